//! Core types for Multihasher

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

pub const MAX_LEVELS: u32 = 1000;
pub const MAX_REPETITIONS: u32 = 100_000;

/// Output encoding for the cascade result
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Folded 64-bit condensation of the 512-bit digest
    Bit64,
    /// Independent SHA-256 of the final hash
    Bit256,
    /// The raw 512-bit hex digest
    #[default]
    Bit512,
    /// Fallback: 512-bit hex split into 64-char chunks, rejoined without separators
    Chunked,
}

impl Encoding {
    /// Parse the user-facing encoding name. Unknown names fall back to `Chunked`,
    /// matching the dropdown's "anything else" branch.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "64" | "64-bit" | "64-Bit" => Encoding::Bit64,
            "256" | "256-bit" | "256-Bit" => Encoding::Bit256,
            "512" | "512-bit" | "512-Bit" => Encoding::Bit512,
            _ => Encoding::Chunked,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Bit64 => "64-bit",
            Encoding::Bit256 => "256-bit",
            Encoding::Bit512 => "512-bit",
            Encoding::Chunked => "chunked",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated cascade request. `levels` and `repetitions` are always within
/// [1, MAX_LEVELS] and [1, MAX_REPETITIONS]; the engine never sees anything else.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HashRequest {
    pub original_text: String,
    pub levels: u32,
    pub repetitions: u32,
    pub encoding: Encoding,
}

impl HashRequest {
    pub fn new(
        original_text: impl Into<String>,
        levels: u32,
        repetitions: u32,
        encoding: Encoding,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            levels: levels.clamp(1, MAX_LEVELS),
            repetitions: repetitions.clamp(1, MAX_REPETITIONS),
            encoding,
        }
    }

    /// Build a request from raw user-typed level/repetition strings,
    /// normalizing each through the fail-soft parser first.
    pub fn from_raw(
        original_text: impl Into<String>,
        levels_raw: &str,
        repetitions_raw: &str,
        encoding: Encoding,
    ) -> Self {
        Self::new(
            original_text,
            normalize(levels_raw, MAX_LEVELS),
            normalize(repetitions_raw, MAX_REPETITIONS),
            encoding,
        )
    }
}

/// Emitted once per completed cascade level. Ephemeral, not persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub level_completed: u32,
    pub total_levels: u32,
    pub current_encoded_hash: String,
}

/// Produced exactly once when the cascade completes, never on cancellation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalResult {
    pub encoded_hash: String,
    pub encoding: Encoding,
}

/// Terminal state of a cascade run. Cancellation is a status, not an error.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CascadeStatus {
    Completed(FinalResult),
    Stopped,
}
