use crate::{CoreError, Rect};

/// Borrowed 8-bit luminance plane, row-major, `data.len() == width * height`.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

/// Owned 8-bit luminance plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

fn check_len(width: usize, height: usize, got: usize) -> Result<(), CoreError> {
    let expected = width * height;
    if got != expected {
        return Err(CoreError::InvalidBufferLength { expected, got });
    }
    Ok(())
}

impl<'a> GrayImageView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, CoreError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Copy out the pixels covered by `rect`.
    ///
    /// The rectangle must be non-empty and lie fully inside the image.
    pub fn crop(&self, rect: Rect) -> Result<GrayImage, CoreError> {
        let inside = rect.left >= 0
            && rect.top >= 0
            && rect.right as i64 <= self.width as i64
            && rect.bottom as i64 <= self.height as i64;
        if rect.is_empty() || !inside {
            return Err(CoreError::RegionOutOfBounds {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
                width: self.width,
                height: self.height,
            });
        }

        let (x0, y0) = (rect.left as usize, rect.top as usize);
        let (w, h) = (rect.width() as usize, rect.height() as usize);
        let mut data = Vec::with_capacity(w * h);
        for row in self.data.chunks_exact(self.width).skip(y0).take(h) {
            data.extend_from_slice(&row[x0..x0 + w]);
        }
        Ok(GrayImage {
            width: w,
            height: h,
            data,
        })
    }

    /// Luminance-inverted copy (`255 - v`): dark-on-light becomes light-on-dark.
    pub fn inverted(&self) -> GrayImage {
        GrayImage {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| 255 - v).collect(),
        }
    }

    /// Left-right mirrored copy.
    pub fn mirrored_horizontal(&self) -> GrayImage {
        let mut data = Vec::with_capacity(self.data.len());
        if self.width > 0 {
            for row in self.data.chunks_exact(self.width) {
                data.extend(row.iter().rev());
            }
        }
        GrayImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl GrayImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CoreError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}
