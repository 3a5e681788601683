//! YUV 4:2:0 semi-planar (NV21) frames and lossless quarter-turn rotation.
//!
//! Layout: `width * height` luma bytes, followed by `width * height / 2`
//! bytes of interleaved chroma, one two-byte pair per 2x2 luma block.

use crate::{CoreError, GrayImageView, Rotation};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Camera frame in YUV 4:2:0 layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YuvFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Required buffer length for a `width x height` 4:2:0 frame, or `None` if
/// it does not fit in `usize`.
#[inline]
pub fn yuv420_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(3).map(|n| n / 2)
}

/// Validate dimensions and buffer length; returns the luma plane size.
fn check_frame(width: usize, height: usize, len: usize) -> Result<usize, CoreError> {
    let bad_dims = CoreError::InvalidYuvDimensions { width, height };
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(bad_dims);
    }
    let expected = yuv420_len(width, height).ok_or(bad_dims)?;
    if len != expected {
        return Err(CoreError::InvalidBufferLength { expected, got: len });
    }
    Ok(width * height)
}

impl YuvFrame {
    /// Wrap a raw frame buffer.
    ///
    /// Both dimensions must be even and non-zero, and `data` must hold
    /// exactly [`yuv420_len`] bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CoreError> {
        check_frame(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The luma plane, usable directly as decoder input.
    pub fn luma(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data[..self.width * self.height],
        }
    }

    /// Rotate the frame clockwise by `degrees`.
    ///
    /// `0` and `360` hand the frame back untouched without copying. Other
    /// values must be `90`, `180` or `270`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self), fields(width = self.width, height = self.height))
    )]
    pub fn rotate(self, degrees: i32) -> Result<Self, CoreError> {
        if degrees == 0 || degrees == 360 {
            return Ok(self);
        }
        let rotation = Rotation::try_from_degrees(degrees)?;
        let data = rotate_yuv420(&self.data, self.width, self.height, rotation)?;
        let (width, height) = if rotation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        };
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Output pixel position of input pixel `(i, j)` in a `w x h` frame.
#[inline]
fn rotated_position(rotation: Rotation, i: usize, j: usize, w: usize, h: usize) -> (usize, usize) {
    match rotation {
        Rotation::Deg0 => (i, j),
        Rotation::Deg90 => (h - 1 - j, i),
        Rotation::Deg180 => (w - 1 - i, h - 1 - j),
        Rotation::Deg270 => (j, w - 1 - i),
    }
}

/// Rotate a raw 4:2:0 buffer into a freshly allocated one of the same length.
///
/// `src` is checked like [`YuvFrame::new`]: even, non-zero dimensions and
/// exactly [`yuv420_len`] bytes. For 90/270 the output is `height x width`.
pub fn rotate_yuv420(
    src: &[u8],
    width: usize,
    height: usize,
    rotation: Rotation,
) -> Result<Vec<u8>, CoreError> {
    let frame_size = check_frame(width, height, src.len())?;
    let w_out = if rotation.swaps_axes() { height } else { width };
    let mut out = vec![0u8; src.len()];

    for j in 0..height {
        for i in 0..width {
            let (i_out, j_out) = rotated_position(rotation, i, j, width, height);

            let y_in = j * width + i;
            let uv_in = frame_size + (j >> 1) * width + (i & !1);
            let y_out = j_out * w_out + i_out;
            let uv_out = frame_size + (j_out >> 1) * w_out + (i_out & !1);

            out[y_out] = src[y_in];
            out[uv_out] = src[uv_in];
            out[uv_out + 1] = src[uv_in + 1];
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x2 frame: luma 1..=8, chroma pairs (10,11) and (20,21).
    fn frame_4x2() -> YuvFrame {
        let mut data: Vec<u8> = (1..=8).collect();
        data.extend_from_slice(&[10, 11, 20, 21]);
        YuvFrame::new(4, 2, data).expect("4x2 frame")
    }

    fn patterned(w: usize, h: usize) -> YuvFrame {
        let data = (0..yuv420_len(w, h).expect("small frame"))
            .map(|v| (v * 7 % 251) as u8)
            .collect();
        YuvFrame::new(w, h, data).expect("patterned frame")
    }

    #[test]
    fn rotate_180_reverses_luma() {
        let out = frame_4x2().rotate(180).expect("rotate");
        assert_eq!((out.width(), out.height()), (4, 2));
        assert_eq!(&out.data()[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(&out.data()[8..], &[20, 21, 10, 11]);
    }

    #[test]
    fn rotate_90_is_clockwise() {
        let out = frame_4x2().rotate(90).expect("rotate");
        assert_eq!((out.width(), out.height()), (2, 4));
        assert_eq!(&out.data()[..8], &[5, 1, 6, 2, 7, 3, 8, 4]);
        assert_eq!(&out.data()[8..], &[10, 11, 20, 21]);
    }

    #[test]
    fn rotate_270_is_counter_clockwise() {
        let out = frame_4x2().rotate(270).expect("rotate");
        assert_eq!((out.width(), out.height()), (2, 4));
        assert_eq!(&out.data()[..8], &[4, 8, 3, 7, 2, 6, 1, 5]);
        assert_eq!(&out.data()[8..], &[20, 21, 10, 11]);
    }

    #[test]
    fn zero_and_full_turn_are_passthrough() {
        let f = patterned(6, 4);
        assert_eq!(f.clone().rotate(0).unwrap(), f);
        assert_eq!(f.clone().rotate(360).unwrap(), f);
    }

    #[test]
    fn invalid_rotations_are_rejected() {
        for bad in [-90, 45, 135, 271, 450, 720] {
            let err = patterned(4, 2).rotate(bad).unwrap_err();
            assert_eq!(err, CoreError::InvalidRotation { degrees: bad });
        }
    }

    #[test]
    fn quarter_turns_compose_to_identity() {
        let f = patterned(6, 4);
        let back = f.clone().rotate(90).unwrap().rotate(270).unwrap();
        assert_eq!(back, f);

        let mut spun = f.clone();
        for _ in 0..4 {
            spun = spun.rotate(90).unwrap();
        }
        assert_eq!(spun, f);

        let half = f.clone().rotate(180).unwrap().rotate(180).unwrap();
        assert_eq!(half, f);
    }

    #[test]
    fn new_validates_dimensions_and_length() {
        assert_eq!(
            YuvFrame::new(3, 2, vec![0; 9]).unwrap_err(),
            CoreError::InvalidYuvDimensions {
                width: 3,
                height: 2
            }
        );
        assert_eq!(
            YuvFrame::new(4, 2, vec![0; 8]).unwrap_err(),
            CoreError::InvalidBufferLength {
                expected: 12,
                got: 8
            }
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(yuv420_len(huge, huge), None);
        assert_eq!(
            YuvFrame::new(huge, huge, Vec::new()).unwrap_err(),
            CoreError::InvalidYuvDimensions {
                width: huge,
                height: huge
            }
        );
        assert_eq!(yuv420_len(4, 2), Some(12));
    }

    #[test]
    fn raw_rotation_validates_its_input() {
        assert_eq!(
            rotate_yuv420(&[0u8; 4], 4, 2, Rotation::Deg90),
            Err(CoreError::InvalidBufferLength {
                expected: 12,
                got: 4
            })
        );
        assert_eq!(
            rotate_yuv420(&[0u8; 9], 3, 2, Rotation::Deg180),
            Err(CoreError::InvalidYuvDimensions {
                width: 3,
                height: 2
            })
        );
        let frame = frame_4x2();
        assert_eq!(
            rotate_yuv420(frame.data(), 4, 2, Rotation::Deg180).as_deref(),
            Ok(&[8, 7, 6, 5, 4, 3, 2, 1, 20, 21, 10, 11][..])
        );
    }

    #[test]
    fn luma_view_covers_y_plane_only() {
        let f = frame_4x2();
        let luma = f.luma();
        assert_eq!((luma.width, luma.height), (4, 2));
        assert_eq!(luma.data, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
