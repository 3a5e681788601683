//! Preview frame-rate range policy.

use serde::{Deserialize, Serialize};

/// Frame-rate range in thousandths of a frame per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpsRange {
    pub min: u32,
    pub max: u32,
}

impl FpsRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Acceptable envelope for the preview frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FpsBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for FpsBounds {
    fn default() -> Self {
        Self {
            min: 10_000,
            max: 30_000,
        }
    }
}

impl FpsBounds {
    /// Whether `range` lies entirely inside the envelope.
    #[inline]
    pub fn contains(&self, range: FpsRange) -> bool {
        range.min >= self.min && range.max <= self.max
    }
}

/// Decide which range to switch to, if any.
///
/// Returns `None` when `current` already fits `bounds` or no supported range
/// does; otherwise the first supported range that fits.
pub fn select_fps_range(
    current: FpsRange,
    supported: &[FpsRange],
    bounds: &FpsBounds,
) -> Option<FpsRange> {
    if bounds.contains(current) {
        return None;
    }
    supported.iter().copied().find(|r| bounds.contains(*r))
}
