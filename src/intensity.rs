// SPDX-License-Identifier: GPL-3.0-only

//! Distance-to-intensity mapping
//!
//! Maps a distance in millimeters to a grayscale intensity byte:
//! near = bright, far = dark. The ramp saturates at 255 at or below the
//! minimum depth and decays linearly to 0 over the falloff span.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DEPTH_DISTANCE_MM, MAX_DEPTH_OFFSET_MM, MIN_DEPTH_MM};

/// Intensity ramp calibration
///
/// Fixed configuration for one sensor; not derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityRamp {
    /// Distance at or below which intensity is 255 (millimeters)
    pub min_depth_mm: u16,
    /// Span over which intensity decays linearly to 0 (millimeters)
    pub falloff_mm: u16,
    /// Declared sensor depth ceiling (millimeters, informational)
    pub ceiling_mm: u16,
}

impl Default for IntensityRamp {
    fn default() -> Self {
        Self::kinect()
    }
}

impl IntensityRamp {
    /// Ramp calibrated for the Kinect v1 usable depth range
    pub fn kinect() -> Self {
        Self {
            min_depth_mm: MIN_DEPTH_MM,
            falloff_mm: MAX_DEPTH_OFFSET_MM,
            ceiling_mm: MAX_DEPTH_DISTANCE_MM,
        }
    }

    /// Map a distance in millimeters to an intensity byte
    ///
    /// `255 - 255 * max(distance - min_depth, 0) / falloff`, with truncating
    /// integer division. The intermediate can go below zero for distances
    /// past `min_depth + falloff`; the result is clamped to 0 rather than
    /// wrapped through a byte cast, so far saturation is exactly 0.
    #[inline]
    pub fn intensity(&self, distance_mm: u16) -> u8 {
        let past_min = (i32::from(distance_mm) - i32::from(self.min_depth_mm)).max(0);
        // A zero falloff is treated as 1 mm to keep the mapping total
        let falloff = i32::from(self.falloff_mm).max(1);
        (255 - 255 * past_min / falloff).clamp(0, 255) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_saturates_at_255() {
        let ramp = IntensityRamp::kinect();
        // Everything at or below min_depth maps to full brightness
        for d in [0u16, 1, 400, 849, 850] {
            assert_eq!(ramp.intensity(d), 255, "distance {}", d);
        }
    }

    #[test]
    fn test_far_saturates_at_zero() {
        let ramp = IntensityRamp::kinect();
        // min_depth + falloff = 4000; at and past it the clamp pins 0
        assert_eq!(ramp.intensity(4000), 0);
        assert_eq!(ramp.intensity(4001), 0);
        assert_eq!(ramp.intensity(u16::MAX >> 3), 0);
    }

    #[test]
    fn test_truncating_division() {
        let ramp = IntensityRamp::kinect();
        // distance 851: 255 - 255*1/3150 = 255 - 0 (truncated)
        assert_eq!(ramp.intensity(851), 255);
        // distance 2000: 255 - 255*1150/3150 = 255 - 93 (truncated from 93.09)
        assert_eq!(ramp.intensity(2000), 162);
    }

    #[test]
    fn test_monotonic_non_increasing() {
        let ramp = IntensityRamp::kinect();
        let mut prev = 255u8;
        for d in 0..=5000u16 {
            let i = ramp.intensity(d);
            assert!(i <= prev, "intensity rose at distance {}", d);
            prev = i;
        }
    }
}
