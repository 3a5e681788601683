//! Device camera parameters and the configuration policy the scanner applies.
//!
//! [`CameraParameters`] is a plain snapshot of what the host camera reports
//! (capability lists plus current settings). The host reads it from the
//! device, lets the methods below adjust it, and writes it back.

use crate::focus::{map_touch_to_focus_area, FocusArea, FOCUS_AREA_WEIGHT};
use crate::fps::{select_fps_range, FpsBounds, FpsRange};
use crate::size::{select_preview_size, CandidateSize, SizeSelectionParams};
use crate::CameraConfigError;
use codescan_core::{Point, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

/// Camera focus modes relevant to scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusMode {
    Auto,
    ContinuousPicture,
    ContinuousVideo,
    Fixed,
    Infinity,
    Macro,
    Edof,
}

/// Scene modes; only `Barcode` is ever selected by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneMode {
    Auto,
    Barcode,
    Action,
    Night,
    Portrait,
    Landscape,
    Steadyphoto,
}

/// Flash modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashMode {
    Off,
    On,
    Auto,
    Torch,
    RedEye,
}

/// How the scanner wants the camera to keep the image sharp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoFocusMode {
    /// Periodic single-shot auto focus; works on every device with `Auto`.
    #[default]
    Safe,
    /// Continuous focus when the device supports it.
    Continuous,
}

/// Snapshot of device-reported camera capabilities and current settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParameters {
    pub supported_preview_sizes: Vec<CandidateSize>,
    pub preview_size: Option<CandidateSize>,

    pub supported_fps_ranges: Vec<FpsRange>,
    pub fps_range: Option<FpsRange>,

    pub supported_scene_modes: Vec<SceneMode>,
    pub scene_mode: Option<SceneMode>,

    pub video_stabilization_supported: bool,
    pub video_stabilization: bool,

    pub supported_focus_modes: Vec<FocusMode>,
    pub focus_mode: Option<FocusMode>,
    pub max_focus_areas: u32,
    pub focus_areas: Vec<FocusArea>,

    pub zoom_supported: bool,
    pub max_zoom: u32,
    pub zoom: u32,

    pub supported_flash_modes: Vec<FlashMode>,
    pub flash_mode: Option<FlashMode>,
}

impl CameraParameters {
    /// Preview size for a `frame_width x frame_height` target view.
    pub fn find_suitable_preview_size(
        &self,
        frame_width: u32,
        frame_height: u32,
        params: &SizeSelectionParams,
    ) -> Result<Point, CameraConfigError> {
        select_preview_size(
            Some(self.supported_preview_sizes.as_slice()),
            self.preview_size,
            frame_width,
            frame_height,
            params,
        )
    }

    /// Move the preview fps range inside `bounds` when possible.
    ///
    /// Returns `true` when the range changed.
    pub fn configure_fps_range(&mut self, bounds: &FpsBounds) -> bool {
        let current = self.fps_range.unwrap_or(FpsRange::new(0, u32::MAX));
        match select_fps_range(current, &self.supported_fps_ranges, bounds) {
            Some(range) => {
                debug!("fps range {:?} -> {:?}", self.fps_range, range);
                self.fps_range = Some(range);
                true
            }
            None => false,
        }
    }

    /// Switch to the barcode scene mode when the device offers it.
    pub fn configure_scene_mode(&mut self) {
        if self.scene_mode != Some(SceneMode::Barcode)
            && self.supported_scene_modes.contains(&SceneMode::Barcode)
        {
            self.scene_mode = Some(SceneMode::Barcode);
        }
    }

    /// Enable video stabilization when supported.
    pub fn configure_video_stabilization(&mut self) {
        if self.video_stabilization_supported && !self.video_stabilization {
            self.video_stabilization = true;
        }
    }

    /// Focus on a tapped view region.
    ///
    /// `area` is in view pixels of a `width x height` view shown at
    /// `orientation` degrees. The focus area is stored only when the device
    /// accepts focus areas; focus mode switches to `Auto` when supported.
    pub fn configure_touch_focus(&mut self, area: Rect, width: i32, height: i32, orientation: i32) {
        let Some(rect) = map_touch_to_focus_area(area, width, height, orientation) else {
            return;
        };
        if self.max_focus_areas > 0 {
            self.focus_areas = vec![FocusArea {
                rect,
                weight: FOCUS_AREA_WEIGHT,
            }];
        }
        if self.supported_focus_modes.contains(&FocusMode::Auto) {
            self.focus_mode = Some(FocusMode::Auto);
        }
    }

    pub fn clear_focus_areas(&mut self) {
        self.focus_areas.clear();
    }

    /// Stop automatic refocusing: prefer `Fixed`, else `Auto`.
    ///
    /// Returns `true` when the focus mode changed.
    pub fn disable_auto_focus(&mut self) -> bool {
        if self.supported_focus_modes.is_empty() {
            return false;
        }
        for mode in [FocusMode::Fixed, FocusMode::Auto] {
            if self.supported_focus_modes.contains(&mode) {
                return self.switch_focus_mode(mode);
            }
        }
        false
    }

    /// Apply the scanner's auto focus preference.
    ///
    /// Returns `true` when the focus mode changed.
    pub fn set_auto_focus_mode(&mut self, mode: AutoFocusMode) -> bool {
        if self.supported_focus_modes.is_empty() {
            return false;
        }
        if mode == AutoFocusMode::Continuous {
            if self.focus_mode == Some(FocusMode::ContinuousPicture) {
                return false;
            }
            if self.supported_focus_modes.contains(&FocusMode::ContinuousPicture) {
                self.focus_mode = Some(FocusMode::ContinuousPicture);
                return true;
            }
        }
        if self.focus_mode == Some(FocusMode::Auto) {
            return false;
        }
        if self.supported_focus_modes.contains(&FocusMode::Auto) {
            self.focus_mode = Some(FocusMode::Auto);
            return true;
        }
        false
    }

    /// Set zoom, capped at the device maximum.
    pub fn set_zoom(&mut self, zoom: u32) {
        if self.zoom_supported && self.zoom != zoom {
            self.zoom = zoom.min(self.max_zoom);
        }
    }

    /// Returns `true` when the flash mode changed.
    pub fn set_flash_mode(&mut self, mode: FlashMode) -> bool {
        if self.flash_mode == Some(mode) {
            return false;
        }
        if self.supported_flash_modes.contains(&mode) {
            self.flash_mode = Some(mode);
            return true;
        }
        false
    }

    fn switch_focus_mode(&mut self, mode: FocusMode) -> bool {
        if self.focus_mode == Some(mode) {
            return false;
        }
        self.focus_mode = Some(mode);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> CameraParameters {
        CameraParameters {
            supported_preview_sizes: vec![
                CandidateSize::new(640, 480),
                CandidateSize::new(1280, 720),
                CandidateSize::new(1920, 1080),
            ],
            preview_size: Some(CandidateSize::new(640, 480)),
            supported_fps_ranges: vec![FpsRange::new(7_000, 30_000), FpsRange::new(15_000, 30_000)],
            fps_range: Some(FpsRange::new(7_000, 30_000)),
            supported_scene_modes: vec![SceneMode::Auto, SceneMode::Barcode],
            scene_mode: Some(SceneMode::Auto),
            video_stabilization_supported: true,
            video_stabilization: false,
            supported_focus_modes: vec![FocusMode::Auto, FocusMode::ContinuousPicture, FocusMode::Fixed],
            focus_mode: Some(FocusMode::ContinuousPicture),
            max_focus_areas: 1,
            focus_areas: Vec::new(),
            zoom_supported: true,
            max_zoom: 30,
            zoom: 0,
            supported_flash_modes: vec![FlashMode::Off, FlashMode::Torch],
            flash_mode: Some(FlashMode::Off),
        }
    }

    #[test]
    fn preview_size_comes_from_supported_list() {
        let p = phone()
            .find_suitable_preview_size(1920, 1080, &SizeSelectionParams::default())
            .unwrap();
        assert_eq!(p, Point::new(1920, 1080));
    }

    #[test]
    fn fps_range_moves_inside_bounds() {
        let mut cam = phone();
        assert!(cam.configure_fps_range(&FpsBounds::default()));
        assert_eq!(cam.fps_range, Some(FpsRange::new(15_000, 30_000)));
        assert!(!cam.configure_fps_range(&FpsBounds::default()));
    }

    #[test]
    fn scene_and_stabilization() {
        let mut cam = phone();
        cam.configure_scene_mode();
        cam.configure_video_stabilization();
        assert_eq!(cam.scene_mode, Some(SceneMode::Barcode));
        assert!(cam.video_stabilization);

        let mut plain = CameraParameters::default();
        plain.configure_scene_mode();
        plain.configure_video_stabilization();
        assert_eq!(plain.scene_mode, None);
        assert!(!plain.video_stabilization);
    }

    #[test]
    fn touch_focus_sets_area_and_auto_mode() {
        let mut cam = phone();
        cam.configure_touch_focus(Rect::new(0, 0, 100, 100), 1000, 1000, 0);
        assert_eq!(
            cam.focus_areas,
            vec![FocusArea {
                rect: Rect::new(800, 800, 1000, 1000),
                weight: 1000
            }]
        );
        assert_eq!(cam.focus_mode, Some(FocusMode::Auto));
        cam.clear_focus_areas();
        assert!(cam.focus_areas.is_empty());
    }

    #[test]
    fn touch_focus_without_area_support_only_switches_mode() {
        let mut cam = phone();
        cam.max_focus_areas = 0;
        cam.configure_touch_focus(Rect::new(0, 0, 100, 100), 1000, 1000, 0);
        assert!(cam.focus_areas.is_empty());
        assert_eq!(cam.focus_mode, Some(FocusMode::Auto));
    }

    #[test]
    fn disable_auto_focus_prefers_fixed() {
        let mut cam = phone();
        assert!(cam.disable_auto_focus());
        assert_eq!(cam.focus_mode, Some(FocusMode::Fixed));
        assert!(!cam.disable_auto_focus());

        cam.supported_focus_modes = vec![FocusMode::Auto];
        assert!(cam.disable_auto_focus());
        assert_eq!(cam.focus_mode, Some(FocusMode::Auto));
    }

    #[test]
    fn auto_focus_mode_selection() {
        let mut cam = phone();
        assert!(!cam.set_auto_focus_mode(AutoFocusMode::Continuous));
        assert!(cam.set_auto_focus_mode(AutoFocusMode::Safe));
        assert_eq!(cam.focus_mode, Some(FocusMode::Auto));

        cam.supported_focus_modes = vec![FocusMode::Auto];
        assert!(!cam.set_auto_focus_mode(AutoFocusMode::Continuous));
        assert_eq!(cam.focus_mode, Some(FocusMode::Auto));
    }

    #[test]
    fn zoom_is_capped() {
        let mut cam = phone();
        cam.set_zoom(12);
        assert_eq!(cam.zoom, 12);
        cam.set_zoom(99);
        assert_eq!(cam.zoom, 30);

        cam.zoom_supported = false;
        cam.set_zoom(3);
        assert_eq!(cam.zoom, 30);
    }

    #[test]
    fn flash_mode_requires_support() {
        let mut cam = phone();
        assert!(cam.set_flash_mode(FlashMode::Torch));
        assert!(!cam.set_flash_mode(FlashMode::Torch));
        assert!(!cam.set_flash_mode(FlashMode::RedEye));
        assert_eq!(cam.flash_mode, Some(FlashMode::Torch));
    }

    #[test]
    fn parameters_round_trip_through_json() {
        let json = serde_json::to_string(&phone()).unwrap();
        let back: CameraParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone());

        let sparse: CameraParameters =
            serde_json::from_str(r#"{ "supported_focus_modes": ["auto", "continuous-picture"] }"#)
                .unwrap();
        assert_eq!(
            sparse.supported_focus_modes,
            vec![FocusMode::Auto, FocusMode::ContinuousPicture]
        );
        assert_eq!(sparse.preview_size, None);
    }
}
