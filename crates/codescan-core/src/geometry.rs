//! Integer point/rectangle value types and quarter-turn rotations.

use crate::CoreError;
use serde::{Deserialize, Serialize};

/// Integer pair used both as a 2D coordinate and as a `(width, height)` size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `x * y` without overflow, for points that describe a size.
    #[inline]
    pub fn area(&self) -> i64 {
        self.x as i64 * self.y as i64
    }
}

/// Axis-aligned rectangle given by its four edges.
///
/// `left <= right` and `top <= bottom` are expected but not enforced; callers
/// that build rectangles from arbitrary corners should use [`Rect::from_corners`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from two opposite corners in any order.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Half-open containment test: left/top inclusive, right/bottom exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Clamp every edge into `[0, width] x [0, height]`.
    pub fn clamp_to(&self, width: i32, height: i32) -> Self {
        Self {
            left: self.left.clamp(0, width),
            top: self.top.clamp(0, height),
            right: self.right.clamp(0, width),
            bottom: self.bottom.clamp(0, height),
        }
    }

    /// Rotate the rectangle by `rotation` (clockwise, y axis pointing down)
    /// around `(cx, cy)`.
    ///
    /// Rotated coordinates are truncated toward zero and the edges are
    /// re-ordered, so the result always satisfies `left <= right` and
    /// `top <= bottom`.
    pub fn rotate(&self, rotation: Rotation, cx: f32, cy: f32) -> Self {
        let (sin, cos) = rotation.sin_cos();
        let map = |x: i32, y: i32| -> (i32, i32) {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let rx = cos as f32 * dx - sin as f32 * dy + cx;
            let ry = sin as f32 * dx + cos as f32 * dy + cy;
            (rx as i32, ry as i32)
        };
        let (x0, y0) = map(self.left, self.top);
        let (x1, y1) = map(self.right, self.bottom);
        Self::from_corners(x0, y0, x1, y1)
    }
}

/// Quarter-turn rotation, clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Strict constructor: only `0`, `90`, `180` and `270` are accepted.
    pub fn try_from_degrees(degrees: i32) -> Result<Self, CoreError> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(CoreError::InvalidRotation { degrees }),
        }
    }

    /// Normalize any multiple of 90 (negative or above 360) into a rotation.
    ///
    /// Returns `None` when `degrees` is not a multiple of 90.
    pub fn normalized(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            _ => Some(Self::Deg270),
        }
    }

    #[inline]
    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether width and height trade places under this rotation.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Rotation that undoes `self`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg0,
            Self::Deg90 => Self::Deg270,
            Self::Deg180 => Self::Deg180,
            Self::Deg270 => Self::Deg90,
        }
    }

    /// Apply `self`, then `other`.
    pub fn compose(self, other: Self) -> Self {
        match (self.degrees() + other.degrees()) % 360 {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Exact `(sin, cos)` of the angle.
    fn sin_cos(self) -> (i32, i32) {
        match self {
            Self::Deg0 => (0, 1),
            Self::Deg90 => (1, 0),
            Self::Deg180 => (0, -1),
            Self::Deg270 => (-1, 0),
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = CoreError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::try_from_degrees(degrees)
    }
}
