//! Decode-with-inversion retry.
//!
//! Every attempt resets the decoder when it finishes, whether it returned a
//! result, an error, or unwound.

use crate::{DecodeOutcome, Decoder};
use codescan_core::GrayImageView;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Calls [`Decoder::reset`] when dropped.
struct ResetGuard<'a, D: Decoder + ?Sized> {
    decoder: &'a mut D,
}

impl<D: Decoder + ?Sized> Drop for ResetGuard<'_, D> {
    fn drop(&mut self) {
        self.decoder.reset();
    }
}

fn attempt<D: Decoder + ?Sized>(
    decoder: &mut D,
    luminance: &GrayImageView<'_>,
) -> Result<DecodeOutcome<D::Output>, D::Error> {
    let guard = ResetGuard { decoder };
    guard.decoder.decode(luminance)
}

/// Decode `luminance`, retrying once on the inverted image if nothing is found.
///
/// The inverted pass recovers light-on-dark symbols. Errors from the first
/// attempt propagate without a retry.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(decoder, luminance),
        fields(width = luminance.width, height = luminance.height)
    )
)]
pub fn decode_with_inversion<D: Decoder + ?Sized>(
    decoder: &mut D,
    luminance: &GrayImageView<'_>,
) -> Result<DecodeOutcome<D::Output>, D::Error> {
    match attempt(decoder, luminance)? {
        DecodeOutcome::NotFound => {
            debug!(
                "no symbol in {}x{} frame, retrying inverted",
                luminance.width, luminance.height
            );
            let inverted = luminance.inverted();
            attempt(decoder, &inverted.view())
        }
        found => Ok(found),
    }
}

/// Owns a [`Decoder`] and runs [`decode_with_inversion`] for each frame.
#[derive(Debug, Default)]
pub struct DecodeRetrier<D> {
    decoder: D,
}

impl<D: Decoder> DecodeRetrier<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    pub fn into_inner(self) -> D {
        self.decoder
    }

    pub fn decode(
        &mut self,
        luminance: &GrayImageView<'_>,
    ) -> Result<DecodeOutcome<D::Output>, D::Error> {
        decode_with_inversion(&mut self.decoder, luminance)
    }
}
