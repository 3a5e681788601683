use crate::camera::{compute_image_frame_rect, LayoutError};
use crate::core::{CoreError, GrayImage, Point, Rect, YuvFrame};
use crate::decode::{decode_with_inversion, DecodeOutcome, Decoder};
use crate::ScannerConfig;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced while turning a camera frame into a decode result.
#[derive(thiserror::Error, Debug)]
pub enum FrameError<E> {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("decoder failed: {0}")]
    Decode(E),
}

/// One preview frame plus the on-screen geometry needed to decode it.
#[derive(Clone, Debug)]
pub struct FrameTask {
    /// Frame as delivered by the sensor (NV21).
    pub frame: YuvFrame,
    /// Clockwise rotation that makes the frame upright on screen.
    pub orientation: i32,
    /// Size the preview is drawn at.
    pub preview_size: Point,
    /// Visible view size.
    pub view_size: Point,
    /// Viewfinder rectangle in view pixels.
    pub view_frame_rect: Rect,
    /// Mirror the cropped luminance left-right before decoding.
    pub reverse_horizontal: bool,
}

impl FrameTask {
    /// Task for an unmirrored frame; see [`FrameTask::with_config`].
    pub fn new(
        frame: YuvFrame,
        orientation: i32,
        preview_size: Point,
        view_size: Point,
        view_frame_rect: Rect,
    ) -> Self {
        Self {
            frame,
            orientation,
            preview_size,
            view_size,
            view_frame_rect,
            reverse_horizontal: false,
        }
    }

    /// Apply the per-frame scanner preferences (horizontal mirroring).
    pub fn with_config(mut self, config: &ScannerConfig) -> Self {
        self.reverse_horizontal = config.reverse_horizontal;
        self
    }

    /// Viewfinder rectangle in pixels of the upright frame.
    pub fn image_frame_rect(&self) -> Result<Rect, LayoutError> {
        let (w, h) = (self.frame.width() as i32, self.frame.height() as i32);
        let (w, h) = if self.orientation.rem_euclid(180) == 90 {
            (h, w)
        } else {
            (w, h)
        };
        compute_image_frame_rect(
            w,
            h,
            self.view_frame_rect,
            self.preview_size,
            self.view_size,
        )
    }

    /// Rotate, crop to the viewfinder and run the decoder with inversion retry.
    ///
    /// An empty viewfinder region yields `NotFound` without touching the
    /// decoder.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, decoder),
            fields(
                width = self.frame.width(),
                height = self.frame.height(),
                orientation = self.orientation
            )
        )
    )]
    pub fn decode<D: Decoder + ?Sized>(
        self,
        decoder: &mut D,
    ) -> Result<DecodeOutcome<D::Output>, FrameError<D::Error>> {
        let rect = self.image_frame_rect()?;
        let frame = self.frame.rotate(self.orientation)?;
        if rect.is_empty() {
            debug!("viewfinder maps to an empty region {rect:?}, skipping frame");
            return Ok(DecodeOutcome::NotFound);
        }

        let cropped = frame.luma().crop(rect)?;
        let luminance: GrayImage = if self.reverse_horizontal {
            cropped.view().mirrored_horizontal()
        } else {
            cropped
        };
        decode_with_inversion(decoder, &luminance.view()).map_err(FrameError::Decode)
    }
}
