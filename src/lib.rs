// SPDX-License-Identifier: MPL-2.0

//! depthslice - Depth slice visualization for Kinect-class depth sensors
//!
//! Turns one raw depth frame (16-bit packed distance + player-index samples)
//! into a Bgr32 visualization: grayscale intensity by distance inside an
//! operator-selected distance band, everything outside the band suppressed,
//! and tracked-body pixels highlighted in gold.
//!
//! # Architecture
//!
//! - [`frame`]: packed-sample decoding and the borrowed frame view
//! - [`intensity`]: distance-to-brightness mapping
//! - [`slice`]: the per-frame render loop
//! - [`config`]: operator configuration (band + ramp)
//! - [`constants`]: sensor calibration and buffer layout constants
//! - [`errors`]: render precondition failures
//!
//! The crate owns no sensor: an external driver acquires frames, calls
//! [`SliceRenderer::render`] once per tick, and displays the buffer.
//!
//! # Example
//!
//! ```
//! use depthslice::{DistanceBand, RawDepthFrame, SliceRenderer};
//!
//! // One 2x1 frame: distance 850 mm / no player, distance 2000 mm / player 2
//! let samples = [850u16 << 3, (2000 << 3) | 2];
//! let frame = RawDepthFrame::new(2, 1, &samples)?;
//!
//! let renderer = SliceRenderer::default();
//! let pixels = renderer.render_to_vec(&frame, DistanceBand::new(500, 4000))?;
//!
//! assert_eq!(&pixels[0..3], &[255, 255, 255]); // near: full brightness
//! assert_eq!(&pixels[4..7], &[0, 215, 255]); // player: gold (Bgr order)
//! # Ok::<(), depthslice::SliceError>(())
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod intensity;
pub mod slice;

// Re-export commonly used types
pub use config::SliceConfig;
pub use errors::{SliceError, SliceResult};
pub use frame::{DepthSample, RawDepthFrame, decode_sample, samples_from_le_bytes};
pub use intensity::IntensityRamp;
pub use slice::{DistanceBand, SliceRenderer};
