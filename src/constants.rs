// SPDX-License-Identifier: GPL-3.0-only

//! Depth sensor constants - Single source of truth
//!
//! All packed-sample layout, intensity calibration, and output buffer
//! constants live here. These values are used across the slice pipeline.

use std::time::Duration;

/// Bit width of the player-index field in a packed depth sample
///
/// Each 16-bit sample carries the player index in its low bits and the
/// distance (millimeters) in the remaining high bits.
pub const PLAYER_INDEX_BITS: u16 = 3;

/// Mask selecting the player-index field (low `PLAYER_INDEX_BITS` bits)
pub const PLAYER_INDEX_MASK: u16 = (1 << PLAYER_INDEX_BITS) - 1;

/// Distance at or below which intensity saturates at full brightness (millimeters)
pub const MIN_DEPTH_MM: u16 = 850;

/// Span over which intensity decays linearly from 255 to 0 (millimeters)
pub const MAX_DEPTH_OFFSET_MM: u16 = 3150;

/// Declared sensor depth ceiling (millimeters, informational)
pub const MAX_DEPTH_DISTANCE_MM: u16 = 4000;

/// Highlight color for player pixels, as (red, green, blue) - gold
pub const HIGHLIGHT_RGB: (u8, u8, u8) = (255, 215, 0);

/// Bytes per output pixel (Bgr32: blue, green, red, pad)
pub const BYTES_PER_PIXEL: usize = 4;

/// Channel offsets within one Bgr32 pixel
pub const BLUE_INDEX: usize = 0;
pub const GREEN_INDEX: usize = 1;
pub const RED_INDEX: usize = 2;

/// Nominal sensor frame interval at 30 fps - the render budget per frame
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
