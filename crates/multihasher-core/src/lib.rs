//! Multihasher Core - Types, digest primitives, input normalizer, errors

pub mod digest;
pub mod error;
pub mod normalize;
pub mod types;

pub use digest::{sha256_hex, sha512_hex, sha64_hex};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use types::*;
