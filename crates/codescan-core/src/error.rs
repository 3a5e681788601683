/// Contract violations detected by the core frame and geometry operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid rotation {degrees} (valid: 0, 90, 180, 270)")]
    InvalidRotation { degrees: i32 },

    #[error("invalid frame buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },

    #[error("invalid YUV 4:2:0 dimensions (width={width}, height={height}); both must be even and non-zero")]
    InvalidYuvDimensions { width: usize, height: usize },

    #[error("region {left},{top}..{right},{bottom} lies outside the {width}x{height} image")]
    RegionOutOfBounds {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        width: usize,
        height: usize,
    },
}
