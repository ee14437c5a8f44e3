//! Hash cascade — amplify-then-digest levels over a working hash value
//!
//! Canonical amplification rule (one rule, applied at every level; the
//! original text is re-embedded each level):
//!
//! 1. Join `repetitions` copies of the current hash with `\n` and SHA-512
//!    the block to get an intermediate hash.
//! 2. Concatenate `repetitions` copies of `"{original}: {intermediate}\n"`,
//!    prefix the whole block with `"{original}: "`, and SHA-512 again.
//!
//! The result becomes the current hash for the next level. Before level 1
//! the current hash is the original text itself. Output is bit-for-bit
//! reproducible for fixed (text, levels, repetitions).

use multihasher_core::{
    sha256_hex, sha512_hex, sha64_hex, CascadeStatus, Encoding, FinalResult, HashRequest,
    ProgressEvent,
};

/// Render a 128-char hash in the requested output encoding.
pub fn encode_hash(hash: &str, encoding: Encoding) -> String {
    match encoding {
        Encoding::Bit64 => sha64_hex(hash),
        Encoding::Bit256 => sha256_hex(hash),
        Encoding::Bit512 => hash.to_string(),
        // Fallback: 64-char chunks rejoined without separators.
        Encoding::Chunked => hash
            .as_bytes()
            .chunks(64)
            .map(|c| std::str::from_utf8(c).unwrap_or(""))
            .collect(),
    }
}

/// One full amplify-and-rehash level.
///
/// Peak allocation is proportional to `repetitions * current.len()`; the
/// request-level clamps are the only backpressure.
fn amplify_level(original: &str, current: &str, repetitions: u32) -> String {
    let reps = repetitions as usize;

    let mut block = String::with_capacity(reps * (current.len() + 1));
    for i in 0..reps {
        if i > 0 {
            block.push('\n');
        }
        block.push_str(current);
    }
    let intermediate = sha512_hex(&block);

    let line = format!("{}: {}\n", original, intermediate);
    let mut repeated = String::with_capacity(original.len() + 2 + reps * line.len());
    repeated.push_str(original);
    repeated.push_str(": ");
    for _ in 0..reps {
        repeated.push_str(&line);
    }
    sha512_hex(&repeated)
}

/// Stateful cascade stepper. Each `advance()` runs exactly one level and
/// yields its progress event; `final_result()` is available once all levels
/// have run. State is owned exclusively by one run and discarded after it.
pub struct Cascade {
    request: HashRequest,
    current_hash: String,
    level: u32,
}

impl Cascade {
    pub fn new(request: HashRequest) -> Self {
        let current_hash = request.original_text.clone();
        Self {
            request,
            current_hash,
            level: 0,
        }
    }

    pub fn total_levels(&self) -> u32 {
        self.request.levels
    }

    pub fn levels_completed(&self) -> u32 {
        self.level
    }

    pub fn is_done(&self) -> bool {
        self.level >= self.request.levels
    }

    /// Run the next level. Returns `None` once all levels have completed.
    pub fn advance(&mut self) -> Option<ProgressEvent> {
        if self.is_done() {
            return None;
        }
        self.current_hash = amplify_level(
            &self.request.original_text,
            &self.current_hash,
            self.request.repetitions,
        );
        self.level += 1;
        Some(ProgressEvent {
            level_completed: self.level,
            total_levels: self.request.levels,
            current_encoded_hash: encode_hash(&self.current_hash, self.request.encoding),
        })
    }

    /// The final result, using the same encoding rule as progress events.
    /// `None` until every level has run.
    pub fn final_result(&self) -> Option<FinalResult> {
        if !self.is_done() {
            return None;
        }
        Some(FinalResult {
            encoded_hash: encode_hash(&self.current_hash, self.request.encoding),
            encoding: self.request.encoding,
        })
    }
}

/// Synchronous cascade driver: runs every level, invoking `on_progress` once
/// per completed level and polling `is_cancelled` before each level starts.
///
/// Cancellation terminates the run with `Stopped` and no final result; the
/// last progress value already delivered simply stands.
pub fn run_cascade(
    request: HashRequest,
    mut on_progress: impl FnMut(ProgressEvent),
    mut is_cancelled: impl FnMut() -> bool,
) -> CascadeStatus {
    let mut cascade = Cascade::new(request);
    while !cascade.is_done() {
        if is_cancelled() {
            return CascadeStatus::Stopped;
        }
        if let Some(event) = cascade.advance() {
            on_progress(event);
        }
    }
    match cascade.final_result() {
        Some(result) => CascadeStatus::Completed(result),
        None => CascadeStatus::Stopped,
    }
}
