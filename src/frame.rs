// SPDX-License-Identifier: GPL-3.0-only

//! Packed depth frame decoding
//!
//! A depth sensor delivers each pixel as one 16-bit packed sample: the
//! distance in millimeters in the high bits, and a small player index
//! (0 = no tracked body) in the low [`PLAYER_INDEX_BITS`] bits.
//! This module provides the borrowed frame view and the shift/mask decode.

use crate::constants::{PLAYER_INDEX_BITS, PLAYER_INDEX_MASK};
use crate::errors::{SliceError, SliceResult};

/// One decoded depth sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSample {
    /// Distance from the sensor in millimeters
    pub distance_mm: u16,
    /// Player index for this pixel (0 = no tracked body)
    pub player: u8,
}

/// Decode a packed 16-bit sample into distance and player index
///
/// Total over all 16-bit inputs, no failure modes:
/// `distance = sample >> PLAYER_INDEX_BITS`, `player = sample & PLAYER_INDEX_MASK`.
#[inline]
pub fn decode_sample(packed: u16) -> DepthSample {
    DepthSample {
        distance_mm: packed >> PLAYER_INDEX_BITS,
        player: (packed & PLAYER_INDEX_MASK) as u8,
    }
}

/// Borrowed view of one raw depth frame
///
/// Samples are row-major, length = width * height. The view holds no
/// ownership: it is valid for the duration of one frame callback and the
/// renderer retains no reference to it past a render call.
#[derive(Debug, Clone, Copy)]
pub struct RawDepthFrame<'a> {
    width: u32,
    height: u32,
    samples: &'a [u16],
}

impl<'a> RawDepthFrame<'a> {
    /// Create a frame view, validating dimensions against the sample count
    pub fn new(width: u32, height: u32, samples: &'a [u16]) -> SliceResult<Self> {
        if width == 0 || height == 0 {
            return Err(SliceError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(SliceError::FrameSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples (width * height)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the frame holds no samples (never true for a validated frame)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw packed samples in row-major order
    pub fn samples(&self) -> &'a [u16] {
        self.samples
    }
}

/// Convert a raw little-endian byte dump into packed u16 samples
///
/// Sensor dumps and file sources deliver frames as raw bytes; each pair of
/// bytes is one little-endian packed sample. A trailing odd byte is dropped.
pub fn samples_from_le_bytes(bytes: &[u8]) -> Vec<u16> {
    let even = bytes.len() - bytes.len() % 2;
    bytemuck::cast_slice::<u8, [u8; 2]>(&bytes[..even])
        .iter()
        .map(|pair| u16::from_le_bytes(*pair))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_distance_and_player() {
        // distance=2000, player=2 packed as (2000 << 3) | 2
        let sample = decode_sample((2000 << 3) | 2);
        assert_eq!(sample.distance_mm, 2000);
        assert_eq!(sample.player, 2);
    }

    #[test]
    fn test_decode_no_player() {
        let sample = decode_sample(850 << 3);
        assert_eq!(sample.distance_mm, 850);
        assert_eq!(sample.player, 0);
    }

    #[test]
    fn test_decode_round_trip() {
        // Decoding then re-packing must reproduce every 16-bit input
        for packed in [0u16, 1, 7, 8, 6800, 16002, 0x7FFF, 0xFFFF] {
            let s = decode_sample(packed);
            let repacked = (s.distance_mm << PLAYER_INDEX_BITS) | s.player as u16;
            assert_eq!(repacked, packed);
        }
    }

    #[test]
    fn test_frame_validates_dimensions() {
        let samples = vec![0u16; 4];
        assert!(RawDepthFrame::new(2, 2, &samples).is_ok());
        assert_eq!(
            RawDepthFrame::new(0, 2, &samples).unwrap_err(),
            SliceError::InvalidDimensions {
                width: 0,
                height: 2
            }
        );
    }

    #[test]
    fn test_frame_validates_sample_count() {
        let samples = vec![0u16; 3];
        assert_eq!(
            RawDepthFrame::new(2, 2, &samples).unwrap_err(),
            SliceError::FrameSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_samples_from_le_bytes() {
        // 6800 = 0x1A90 little-endian, trailing odd byte dropped
        let bytes = [0x90u8, 0x1A, 0x02, 0x3E, 0xFF];
        let samples = samples_from_le_bytes(&bytes);
        assert_eq!(samples, vec![0x1A90, 0x3E02]);
    }
}
