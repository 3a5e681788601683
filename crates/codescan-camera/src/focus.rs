//! Tap-to-focus area mapping and display orientation.
//!
//! Camera focus areas live in a fixed `[-1000, 1000]` square in sensor
//! orientation, with `+1000` at the left/top edge of the view. Screen
//! rectangles are first rotated back into sensor orientation and then
//! mapped (and inverted) into that square.

use crate::CameraConfigError;
use codescan_core::{Rect, Rotation};
use serde::{Deserialize, Serialize};

/// Bound of the normalized focus coordinate space.
pub const FOCUS_AREA_EXTENT: i32 = 1000;

/// Weight assigned to a user-selected focus area.
pub const FOCUS_AREA_WEIGHT: u32 = 1000;

/// Which way the camera sensor faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    Back,
    Front,
}

/// One metering/focus area in normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub rect: Rect,
    pub weight: u32,
}

/// Source of the current screen rotation, as reported by the host display.
pub trait DisplayRotation {
    /// Rotation in degrees (normally 0, 90, 180 or 270), or `None` when the
    /// display service is unavailable.
    fn screen_rotation(&self) -> Option<i32>;
}

impl DisplayRotation for i32 {
    fn screen_rotation(&self) -> Option<i32> {
        Some(*self)
    }
}

impl DisplayRotation for Option<i32> {
    fn screen_rotation(&self) -> Option<i32> {
        *self
    }
}

/// `1000 - 2000 * value / size`, clamped to the focus square.
#[inline]
fn map_coordinate(value: i32, size: i32) -> i32 {
    let mapped = FOCUS_AREA_EXTENT as i64 - 2 * FOCUS_AREA_EXTENT as i64 * value as i64 / size as i64;
    mapped.clamp(-FOCUS_AREA_EXTENT as i64, FOCUS_AREA_EXTENT as i64) as i32
}

/// Convert a view rectangle into a normalized focus rectangle.
///
/// The area is rotated by `-display_orientation` around the view center,
/// every edge is mapped through `1000 - 2000 * v / size` and clamped to
/// `[-1000, 1000]`, and the resulting edges are re-ordered so that
/// `left <= right` and `top <= bottom`.
///
/// Returns `None` when a view dimension is zero or negative, or when
/// `display_orientation` is not a multiple of 90.
pub fn map_touch_to_focus_area(
    area: Rect,
    view_width: i32,
    view_height: i32,
    display_orientation: i32,
) -> Option<Rect> {
    if view_width <= 0 || view_height <= 0 {
        return None;
    }
    let rotation = Rotation::normalized(-display_orientation)?;
    let rotated = area.rotate(rotation, view_width as f32 / 2.0, view_height as f32 / 2.0);
    Some(Rect::from_corners(
        map_coordinate(rotated.left, view_width),
        map_coordinate(rotated.top, view_height),
        map_coordinate(rotated.right, view_width),
        map_coordinate(rotated.bottom, view_height),
    ))
}

/// Normalize a raw screen rotation reading into degrees in `[0, 360)`.
pub fn normalize_screen_rotation(rotation: i32) -> Result<u32, CameraConfigError> {
    Rotation::normalized(rotation)
        .map(Rotation::degrees)
        .ok_or(CameraConfigError::InvalidDisplayRotation { rotation })
}

/// Clockwise angle the preview must be rotated by to appear upright.
///
/// `((front ? 180 : 360) + sensor_orientation - screen_degrees) % 360`.
pub fn display_orientation(
    facing: CameraFacing,
    sensor_orientation: u32,
    display: &impl DisplayRotation,
) -> Result<u32, CameraConfigError> {
    let rotation = display
        .screen_rotation()
        .ok_or(CameraConfigError::DisplayUnavailable)?;
    let screen = normalize_screen_rotation(rotation)? as i64;
    let base: i64 = match facing {
        CameraFacing::Front => 180,
        CameraFacing::Back => 360,
    };
    Ok((base + sensor_orientation as i64 - screen).rem_euclid(360) as u32)
}
