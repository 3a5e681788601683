//! Camera-side geometry and configuration policy for barcode scanners.
//!
//! This crate focuses on:
//! - choosing a preview resolution and frame-rate range from what the device
//!   reports,
//! - mapping between captured image pixels and the on-screen preview,
//! - converting tap-to-focus rectangles into normalized focus areas,
//! - adjusting a [`CameraParameters`] snapshot (scene, focus, zoom, flash).
//!
//! It does **not** open or drive camera hardware. The host reads device
//! capabilities into these types and applies the results back.

mod error;
pub mod focus;
mod fps;
pub mod layout;
mod params;
mod size;

pub use error::{CameraConfigError, LayoutError};
pub use focus::{
    display_orientation, map_touch_to_focus_area, normalize_screen_rotation, CameraFacing,
    DisplayRotation, FocusArea, FOCUS_AREA_EXTENT, FOCUS_AREA_WEIGHT,
};
pub use fps::{select_fps_range, FpsBounds, FpsRange};
pub use layout::{compute_image_frame_rect, compute_preview_size, is_portrait};
pub use params::{AutoFocusMode, CameraParameters, FlashMode, FocusMode, SceneMode};
pub use size::{select_preview_size, CandidateSize, SizeSelectionParams, MIN_PREVIEW_PIXELS};
