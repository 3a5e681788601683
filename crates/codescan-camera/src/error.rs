/// The host camera or display is in a state the scanner cannot work with.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraConfigError {
    #[error("unable to configure camera preview size")]
    NoPreviewSize,
    #[error("unable to access display rotation")]
    DisplayUnavailable,
    #[error("invalid display rotation {rotation}")]
    InvalidDisplayRotation { rotation: i32 },
}

/// Degenerate dimensions passed to the preview layout helpers.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("image has a non-positive dimension ({width}x{height})")]
    ZeroImageDimension { width: i32, height: i32 },
    #[error("preview has a non-positive dimension ({width}x{height})")]
    ZeroPreviewDimension { width: i32, height: i32 },
}
