//! Core deck library shared by the sampler CLI.
//!
//! Provides:
//! - The `Card` entity with fallible construction from a raw notes row
//! - Question/answer extraction from the delimited field blob
//! - Random sampling of a loaded deck

pub mod error;
pub mod sample;
pub mod types;

pub use error::CardError;
pub use sample::sample;
pub use types::{Card, RawNote, FIELD_SEPARATOR};
