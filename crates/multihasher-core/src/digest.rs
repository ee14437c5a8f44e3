//! Digest primitives — fixed-width uppercase hex wrappers over ring
//!
//! All three are pure functions over the input's UTF-8 bytes. `sha64_hex` is
//! a lossy non-cryptographic condensation of the 512-bit digest, not a
//! distinct hash family.

use ring::digest::{digest, SHA256, SHA512};

/// Hex digits per 64-bit chunk when folding the 512-bit digest.
const FOLD_CHUNK: usize = 16;

fn hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02X}", b));
    }
    out
}

/// SHA-512 of the input, as a 128-char uppercase hex string.
///
/// Width is fixed by construction: every digest byte renders as two hex
/// digits, so leading-zero bytes never shorten the output.
pub fn sha512_hex(input: &str) -> String {
    hex_upper(digest(&SHA512, input.as_bytes()).as_ref())
}

/// SHA-256 of the input, as a 64-char uppercase hex string. Independently
/// computed, not a truncation of the 512-bit form.
pub fn sha256_hex(input: &str) -> String {
    hex_upper(digest(&SHA256, input.as_bytes()).as_ref())
}

/// Folded 64-bit condensation: split `sha512_hex(input)` into 8 chunks of
/// 16 hex chars, sum them as unsigned integers, render the sum as hex,
/// left-pad to 16 and keep the first 16 chars.
///
/// The sum of 8 u64 values needs at most 67 bits, so u128 accumulation
/// cannot overflow.
pub fn sha64_hex(input: &str) -> String {
    let full = sha512_hex(input);
    let mut sum: u128 = 0;
    for chunk in full.as_bytes().chunks(FOLD_CHUNK) {
        // Chunks are always valid hex produced by sha512_hex.
        let s = std::str::from_utf8(chunk).unwrap_or("0");
        sum += u64::from_str_radix(s, 16).unwrap_or(0) as u128;
    }
    let mut hex = format!("{:016X}", sum);
    hex.truncate(FOLD_CHUNK);
    hex
}
