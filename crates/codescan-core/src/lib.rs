//! Core types for barcode scanning pipelines.
//!
//! This crate is intentionally small: integer geometry, luminance planes and
//! YUV 4:2:0 camera frames with lossless quarter-turn rotation. It does *not*
//! talk to camera hardware or depend on any concrete barcode decoder.

mod error;
mod geometry;
mod image;
mod logger;
mod yuv;

pub use error::CoreError;
pub use geometry::{Point, Rect, Rotation};
pub use image::{GrayImage, GrayImageView};
pub use yuv::{rotate_yuv420, yuv420_len, YuvFrame};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_from_env, init_with_level, parse_level, LOG_ENV_VAR};
