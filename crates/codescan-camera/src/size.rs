//! Preview resolution selection.
//!
//! Candidates are scanned largest-first under a slowly widening aspect-ratio
//! tolerance, so a near-exact ratio match at a large resolution wins over a
//! loose match, and a loose match wins over giving up.

use crate::CameraConfigError;
use codescan_core::Point;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Smallest accepted preview area (768x768 equivalent).
pub const MIN_PREVIEW_PIXELS: u64 = 589_824;

/// One device-reported capture resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSize {
    pub width: u32,
    pub height: u32,
}

impl CandidateSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl From<CandidateSize> for Point {
    fn from(size: CandidateSize) -> Self {
        Point::new(size.width as i32, size.height as i32)
    }
}

/// Tuning for [`select_preview_size`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeSelectionParams {
    /// Candidates with fewer pixels are never selected.
    pub min_preview_pixels: u64,
    /// First (tightest) aspect-ratio tolerance.
    pub min_distortion: f64,
    /// Last (loosest) aspect-ratio tolerance, inclusive.
    pub max_distortion: f64,
    /// Tolerance increment between passes.
    pub distortion_step: f64,
}

impl Default for SizeSelectionParams {
    fn default() -> Self {
        Self {
            min_preview_pixels: MIN_PREVIEW_PIXELS,
            min_distortion: 0.3,
            max_distortion: 3.0,
            distortion_step: 0.1,
        }
    }
}

impl SizeSelectionParams {
    /// Number of tolerance passes; 28 with the defaults.
    pub fn distortion_level_count(&self) -> usize {
        let span = self.max_distortion - self.min_distortion;
        if !(self.distortion_step > 0.0) || !(span >= 0.0) {
            return 1;
        }
        (span / self.distortion_step).round() as usize + 1
    }

    /// Tolerances from `min_distortion` to `max_distortion`, computed from a
    /// pass index so accumulated float error cannot add or drop a pass.
    pub fn distortion_levels(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.distortion_level_count())
            .map(move |k| self.min_distortion + k as f64 * self.distortion_step)
    }
}

/// Pick the preview resolution that best matches `target_width / target_height`.
///
/// Falls back to `default_size` when `candidates` is absent or empty, or when
/// no candidate passes the pixel floor within the loosest tolerance. Fails
/// only when there is no default either.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(candidates, params), fields(n = candidates.map_or(0, <[_]>::len)))
)]
pub fn select_preview_size(
    candidates: Option<&[CandidateSize]>,
    default_size: Option<CandidateSize>,
    target_width: u32,
    target_height: u32,
    params: &SizeSelectionParams,
) -> Result<Point, CameraConfigError> {
    if let Some(candidates) = candidates.filter(|c| !c.is_empty()) {
        let mut sorted = candidates.to_vec();
        sorted.sort_by_key(|s| Reverse(s.area()));

        let target_ratio = target_width as f64 / target_height as f64;
        for tolerance in params.distortion_levels() {
            let found = sorted.iter().find(|s| {
                s.area() >= params.min_preview_pixels
                    && (target_ratio - s.ratio()).abs() <= tolerance
            });
            if let Some(size) = found {
                debug!(
                    "preview size {}x{} for target {}x{} (tolerance {:.1})",
                    size.width, size.height, target_width, target_height, tolerance
                );
                return Ok((*size).into());
            }
        }
        warn!(
            "no preview size matches target {}x{} among {} candidates; using device default",
            target_width,
            target_height,
            candidates.len()
        );
    }

    default_size
        .map(Point::from)
        .ok_or(CameraConfigError::NoPreviewSize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(w: u32, h: u32) -> CandidateSize {
        CandidateSize::new(w, h)
    }

    fn device_sizes() -> Vec<CandidateSize> {
        vec![
            s(640, 480),
            s(1280, 720),
            s(1920, 1080),
            s(1024, 768),
            s(352, 288),
        ]
    }

    #[test]
    fn default_params_scan_28_levels() {
        let params = SizeSelectionParams::default();
        let levels: Vec<f64> = params.distortion_levels().collect();
        assert_eq!(levels.len(), 28);
        assert!((levels[0] - 0.3).abs() < 1e-9);
        assert!((levels[27] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn exact_ratio_prefers_largest() {
        let sizes = device_sizes();
        let p = select_preview_size(Some(sizes.as_slice()), None, 1920, 1080, &Default::default());
        assert_eq!(p, Ok(Point::new(1920, 1080)));
    }

    #[test]
    fn closer_ratio_beats_larger_area() {
        // 0.5625 target: 1024x768 deviates by ~0.77, the 16:9 sizes by ~1.22.
        let sizes = device_sizes();
        let p = select_preview_size(Some(sizes.as_slice()), None, 1080, 1920, &Default::default());
        assert_eq!(p, Ok(Point::new(1024, 768)));
    }

    #[test]
    fn equal_area_keeps_input_order() {
        let a = vec![s(1040, 960), s(960, 1040)];
        let b = vec![s(960, 1040), s(1040, 960)];
        let params = SizeSelectionParams::default();
        assert_eq!(
            select_preview_size(Some(a.as_slice()), None, 1000, 1000, &params),
            Ok(Point::new(1040, 960))
        );
        assert_eq!(
            select_preview_size(Some(b.as_slice()), None, 1000, 1000, &params),
            Ok(Point::new(960, 1040))
        );
    }

    #[test]
    fn below_floor_falls_back_to_default() {
        let sizes = vec![s(640, 480), s(352, 288)];
        let p = select_preview_size(Some(sizes.as_slice()), Some(s(640, 480)), 640, 480, &Default::default());
        assert_eq!(p, Ok(Point::new(640, 480)));
    }

    #[test]
    fn empty_or_absent_list_uses_default() {
        let params = SizeSelectionParams::default();
        assert_eq!(
            select_preview_size(Some(&[][..]), Some(s(800, 600)), 4, 3, &params),
            Ok(Point::new(800, 600))
        );
        assert_eq!(
            select_preview_size(None, Some(s(800, 600)), 4, 3, &params),
            Ok(Point::new(800, 600))
        );
    }

    #[test]
    fn no_default_is_a_configuration_error() {
        let params = SizeSelectionParams::default();
        assert_eq!(
            select_preview_size(None, None, 4, 3, &params),
            Err(CameraConfigError::NoPreviewSize)
        );
        let small = vec![s(320, 240)];
        assert_eq!(
            select_preview_size(Some(small.as_slice()), None, 4, 3, &params),
            Err(CameraConfigError::NoPreviewSize)
        );
    }

    #[test]
    fn any_size_above_floor_is_chosen_from_the_list() {
        let sizes = device_sizes();
        let default = s(1, 1);
        let params = SizeSelectionParams::default();
        for (tw, th) in [(480, 800), (1080, 1920), (1000, 1000), (1920, 1080), (2400, 1080)] {
            let p = select_preview_size(Some(sizes.as_slice()), Some(default), tw, th, &params)
                .expect("selection");
            assert!(
                sizes
                    .iter()
                    .any(|c| Point::from(*c) == p && c.area() >= MIN_PREVIEW_PIXELS),
                "target {tw}x{th} picked {p:?}"
            );
        }
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: SizeSelectionParams =
            serde_json::from_str(r#"{ "min_preview_pixels": 1000 }"#).expect("json");
        assert_eq!(params.min_preview_pixels, 1000);
        assert_eq!(params.distortion_level_count(), 28);
    }
}
