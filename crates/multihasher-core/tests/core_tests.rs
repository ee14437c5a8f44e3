//! Tests for multihasher-core: normalizer, digest primitives, request types

use multihasher_core::*;

// ===========================================================================
// Input normalizer
// ===========================================================================

#[test]
fn normalize_suffix_and_fallback_values() {
    assert_eq!(normalize("5K", 100_000), 5_000);
    assert_eq!(normalize("2M", 100_000), 100_000);
    assert_eq!(normalize("abc", 1000), 1);
    assert_eq!(normalize("", 1000), 1);
}

#[test]
fn normalize_decimal_multipliers() {
    assert_eq!(normalize("2.5K", 100_000), 2_500);
    assert_eq!(normalize("0.001M", 100_000), 1_000);
    assert_eq!(normalize(".5K", 100_000), 500);
}

#[test]
fn normalize_is_case_and_whitespace_insensitive() {
    assert_eq!(normalize("  3k  ", 100_000), 3_000);
    assert_eq!(normalize("1m", 2_000_000), 1_000_000);
}

#[test]
fn normalize_never_fails() {
    for junk in ["", " ", "KM", "--", "1e5", "0x10", "\u{1F600}"] {
        let v = normalize(junk, 1000);
        assert!((1..=1000).contains(&v), "{junk:?} -> {v}");
    }
}

// ===========================================================================
// Digest primitives
// ===========================================================================

#[test]
fn sha512_of_empty_is_the_known_constant() {
    let h = sha512_hex("");
    assert_eq!(h.len(), 128);
    assert_eq!(
        h,
        "CF83E1357EEFB8BDF1542850D66D8007D620E4050B5715DC83F4A921D36CE9CE\
         47D0D13C5D85F2B0FF8318D2877EEC2F63B931BD47417A81A538327AF927DA3E"
    );
}

#[test]
fn digest_widths_are_fixed() {
    for input in ["", "x", "intention", "многобайтовый текст"] {
        assert_eq!(sha512_hex(input).len(), 128);
        assert_eq!(sha256_hex(input).len(), 64);
        assert_eq!(sha64_hex(input).len(), 16);
    }
}

#[test]
fn sha256_is_not_a_truncation_of_sha512() {
    let h512 = sha512_hex("test");
    let h256 = sha256_hex("test");
    assert_ne!(&h512[..64], h256.as_str());
}

#[test]
fn sha64_known_values() {
    assert_eq!(sha64_hex(""), "56B32E4F4598F6C0");
    assert_eq!(sha64_hex("test"), "3EFA8CC91047FC98");
}

// ===========================================================================
// HashRequest
// ===========================================================================

#[test]
fn request_clamps_counts_into_range() {
    let req = HashRequest::new("text", 0, 0, Encoding::Bit512);
    assert_eq!(req.levels, 1);
    assert_eq!(req.repetitions, 1);

    let req = HashRequest::new("text", 5000, 2_000_000, Encoding::Bit512);
    assert_eq!(req.levels, MAX_LEVELS);
    assert_eq!(req.repetitions, MAX_REPETITIONS);
}

#[test]
fn request_from_raw_normalizes_strings() {
    let req = HashRequest::from_raw("text", "10", "5K", Encoding::Bit64);
    assert_eq!(req.levels, 10);
    assert_eq!(req.repetitions, 5_000);
    assert_eq!(req.encoding, Encoding::Bit64);

    let req = HashRequest::from_raw("text", "junk", "2M", Encoding::Bit256);
    assert_eq!(req.levels, 1);
    assert_eq!(req.repetitions, MAX_REPETITIONS);
}

// ===========================================================================
// Encoding
// ===========================================================================

#[test]
fn encoding_labels_roundtrip() {
    assert_eq!(Encoding::from_label("64-Bit"), Encoding::Bit64);
    assert_eq!(Encoding::from_label("256"), Encoding::Bit256);
    assert_eq!(Encoding::from_label("512-bit"), Encoding::Bit512);
    assert_eq!(Encoding::from_label("whatever"), Encoding::Chunked);
}

#[test]
fn encoding_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Encoding::Bit512).unwrap(),
        r#""bit512""#
    );
}

#[test]
fn progress_event_serde_roundtrip() {
    let event = ProgressEvent {
        level_completed: 3,
        total_levels: 10,
        current_encoded_hash: "AB".repeat(64),
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: ProgressEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back.level_completed, 3);
    assert_eq!(back.total_levels, 10);
    assert_eq!(back.current_encoded_hash, event.current_encoded_hash);
}
