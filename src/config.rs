// SPDX-License-Identifier: GPL-3.0-only

//! User-facing slice configuration
//!
//! Bundles the operator band and intensity calibration so the CLI can load
//! them from a JSON file instead of flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::intensity::IntensityRamp;
use crate::slice::DistanceBand;

/// Slice pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Distance band of interest
    pub band: DistanceBand,
    /// Intensity ramp calibration
    #[serde(default)]
    pub ramp: IntensityRamp,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            // Full usable Kinect range by default
            band: DistanceBand::new(500, 4000),
            ramp: IntensityRamp::kinect(),
        }
    }
}

impl SliceConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
