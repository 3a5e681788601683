//! JSON scanner configuration.

use crate::camera::{
    AutoFocusMode, CameraConfigError, CameraParameters, CandidateSize, FlashMode, FpsBounds,
    SizeSelectionParams,
};
use crate::core::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ScannerIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Scanner preferences applied on top of what the camera reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub size_selection: SizeSelectionParams,
    pub fps_bounds: FpsBounds,
    pub auto_focus_mode: AutoFocusMode,
    /// Left untouched when `None`.
    pub flash_mode: Option<FlashMode>,
    /// Left untouched when `None`.
    pub zoom: Option<u32>,
    /// Mirror frames before decoding (front cameras). Carried into each
    /// frame by [`FrameTask::with_config`](crate::FrameTask::with_config).
    pub reverse_horizontal: bool,
}

impl ScannerConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScannerIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScannerIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Configure `camera` for scanning into a `view_width x view_height` view.
    ///
    /// Selects and stores the preview size, then applies the fps, scene,
    /// stabilization, focus, flash and zoom preferences. Returns the selected
    /// preview size.
    pub fn apply(
        &self,
        camera: &mut CameraParameters,
        view_width: u32,
        view_height: u32,
    ) -> Result<Point, CameraConfigError> {
        let size =
            camera.find_suitable_preview_size(view_width, view_height, &self.size_selection)?;
        camera.preview_size = Some(CandidateSize::new(size.x as u32, size.y as u32));

        camera.configure_fps_range(&self.fps_bounds);
        camera.configure_scene_mode();
        camera.configure_video_stabilization();
        camera.set_auto_focus_mode(self.auto_focus_mode);
        if let Some(mode) = self.flash_mode {
            camera.set_flash_mode(mode);
        }
        if let Some(zoom) = self.zoom {
            camera.set_zoom(zoom);
        }
        debug!("camera configured for {view_width}x{view_height}: preview {size:?}");
        Ok(size)
    }
}
