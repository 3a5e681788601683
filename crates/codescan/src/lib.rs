//! High-level facade crate for the `codescan-*` workspace.
//!
//! This crate provides:
//! - re-exports of the underlying crates,
//! - [`FrameTask`]: rotate a preview frame, crop it to the viewfinder and run
//!   a [`decode::Decoder`] with inverted-luminance retry,
//! - [`ScannerConfig`]: JSON-loadable scanner preferences applied to a
//!   [`camera::CameraParameters`] snapshot,
//! - (feature `cli`) the `codescan` command line tool.
//!
//! ## Quickstart
//!
//! ```no_run
//! use codescan::camera::{compute_preview_size, CameraParameters};
//! use codescan::core::{Point, Rect, YuvFrame};
//! use codescan::{FrameTask, ScannerConfig};
//!
//! # fn run<D: codescan::decode::Decoder>(decoder: &mut D, nv21: Vec<u8>)
//! # -> Result<(), Box<dyn std::error::Error>> where D::Error: std::error::Error + 'static {
//! let mut camera: CameraParameters = serde_json::from_str(&std::fs::read_to_string("camera.json")?)?;
//! let size = ScannerConfig::default().apply(&mut camera, 1080, 1920)?;
//!
//! let task = FrameTask {
//!     frame: YuvFrame::new(size.x as usize, size.y as usize, nv21)?,
//!     orientation: 90,
//!     preview_size: compute_preview_size(size.y, size.x, 1080, 1920)?,
//!     view_size: Point::new(1080, 1920),
//!     view_frame_rect: Rect::new(240, 660, 840, 1260),
//!     reverse_horizontal: false,
//! };
//! let found = task.decode(decoder)?.is_found();
//! println!("found: {found}");
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `codescan::core`: geometry, luminance planes, YUV frames and rotation.
//! - `codescan::camera`: preview sizing, layout, focus areas, parameter policy.
//! - `codescan::decode`: decoder trait and inversion retry.

pub use codescan_camera as camera;
pub use codescan_core as core;
pub use codescan_decode as decode;

mod config;
mod task;

pub use config::{ScannerConfig, ScannerIoError};
pub use task::{FrameError, FrameTask};
