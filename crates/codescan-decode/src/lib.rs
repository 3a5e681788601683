//! Barcode decoder abstraction.
//!
//! Any engine that reads symbols from an 8-bit luminance plane implements
//! [`Decoder`]. [`decode_with_inversion`] adds the scanning policy shared by
//! all engines: try the frame as-is, then once more with inverted luminance,
//! resetting the engine after every attempt.

mod decoder;
mod retry;

pub use decoder::{DecodeOutcome, Decoder};
pub use retry::{decode_with_inversion, DecodeRetrier};
