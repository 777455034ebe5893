// SPDX-License-Identifier: GPL-3.0-only

//! Depth slice rendering
//!
//! Converts one decoded depth frame into a Bgr32 visualization:
//! - pixels inside the operator-selected distance band are grayscale,
//!   intensity-mapped by distance (near = bright)
//! - pixels outside the band are left untouched (black on a zeroed buffer)
//! - pixels carrying a player index are overwritten with the gold
//!   highlight color, which always wins over intensity
//!
//! The per-pixel loop is the hot path and must finish inside one sensor
//! frame interval ([`crate::constants::FRAME_INTERVAL`]). `render` writes
//! into a caller-owned buffer so steady-state operation stays
//! allocation-free.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    BLUE_INDEX, BYTES_PER_PIXEL, GREEN_INDEX, HIGHLIGHT_RGB, RED_INDEX,
};
use crate::errors::{SliceError, SliceResult};
use crate::frame::{RawDepthFrame, decode_sample};
use crate::intensity::IntensityRamp;

/// Operator-selected distance range of interest, in millimeters
///
/// Bounds are exclusive: a distance equal to `min_mm` or `max_mm` is out of
/// band. `min_mm >= max_mm` is not rejected; no distance can then fall in
/// band and the rendered frame degrades to all-suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceBand {
    /// Lower bound (exclusive), millimeters
    pub min_mm: u16,
    /// Upper bound (exclusive), millimeters
    pub max_mm: u16,
}

impl DistanceBand {
    /// Create a band from bounds in millimeters
    pub fn new(min_mm: u16, max_mm: u16) -> Self {
        Self { min_mm, max_mm }
    }

    /// Whether a distance falls strictly inside the band
    #[inline]
    pub fn contains(&self, distance_mm: u16) -> bool {
        distance_mm > self.min_mm && distance_mm < self.max_mm
    }
}

/// Stateless depth-slice renderer
///
/// Holds only fixed configuration (intensity ramp and highlight color);
/// rendering is a pure transform of its inputs. Two calls with identical
/// inputs on freshly zeroed buffers produce byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRenderer {
    ramp: IntensityRamp,
    /// Highlight color as (red, green, blue)
    highlight: (u8, u8, u8),
}

impl Default for SliceRenderer {
    fn default() -> Self {
        Self::new(IntensityRamp::default())
    }
}

impl SliceRenderer {
    /// Create a renderer with the given intensity ramp and the gold highlight
    pub fn new(ramp: IntensityRamp) -> Self {
        Self {
            ramp,
            highlight: HIGHLIGHT_RGB,
        }
    }

    /// Override the player highlight color (red, green, blue)
    pub fn with_highlight(mut self, highlight: (u8, u8, u8)) -> Self {
        self.highlight = highlight;
        self
    }

    /// The renderer's intensity ramp
    pub fn ramp(&self) -> &IntensityRamp {
        &self.ramp
    }

    /// Render one frame into a caller-owned Bgr32 buffer
    ///
    /// `out` must be exactly `width * height * 4` bytes. Out-of-band pixels
    /// are not written at all: callers must zero-fill a fresh buffer, and a
    /// buffer reused across frames keeps stale color where the current
    /// frame is out of band unless cleared first. The pad byte of each
    /// pixel is never written. On error nothing has been written.
    pub fn render(
        &self,
        frame: &RawDepthFrame<'_>,
        band: DistanceBand,
        out: &mut [u8],
    ) -> SliceResult<()> {
        let expected = frame.len() * BYTES_PER_PIXEL;
        if out.len() != expected {
            return Err(SliceError::BufferSizeMismatch {
                expected,
                actual: out.len(),
            });
        }

        let start = Instant::now();
        self.render_span(frame.samples(), band, out);
        debug!(
            width = frame.width(),
            height = frame.height(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Rendered depth slice"
        );
        Ok(())
    }

    /// Render one frame into a freshly allocated, zeroed Bgr32 buffer
    pub fn render_to_vec(
        &self,
        frame: &RawDepthFrame<'_>,
        band: DistanceBand,
    ) -> SliceResult<Vec<u8>> {
        let mut out = vec![0u8; frame.len() * BYTES_PER_PIXEL];
        self.render(frame, band, &mut out)?;
        Ok(out)
    }

    /// Render one frame across `workers` scoped threads
    ///
    /// Pixels are independent, so the frame is split into contiguous
    /// row-major spans with disjoint output slices; each worker runs the
    /// same loop as [`render`](Self::render) over its span. Same contract
    /// and output bytes as the single-threaded path.
    pub fn render_parallel(
        &self,
        frame: &RawDepthFrame<'_>,
        band: DistanceBand,
        out: &mut [u8],
        workers: usize,
    ) -> SliceResult<()> {
        let expected = frame.len() * BYTES_PER_PIXEL;
        if out.len() != expected {
            return Err(SliceError::BufferSizeMismatch {
                expected,
                actual: out.len(),
            });
        }

        let workers = workers.max(1);
        let span = frame.len().div_ceil(workers);
        if workers == 1 || span == 0 {
            self.render_span(frame.samples(), band, out);
            return Ok(());
        }

        let start = Instant::now();
        std::thread::scope(|scope| {
            for (samples, out_span) in frame
                .samples()
                .chunks(span)
                .zip(out.chunks_mut(span * BYTES_PER_PIXEL))
            {
                scope.spawn(move || self.render_span(samples, band, out_span));
            }
        });
        debug!(
            width = frame.width(),
            height = frame.height(),
            workers,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Rendered depth slice (parallel)"
        );
        Ok(())
    }

    /// The per-pixel loop over one contiguous span of samples
    ///
    /// `out` length is `samples.len() * 4`, checked by the callers.
    fn render_span(&self, samples: &[u16], band: DistanceBand, out: &mut [u8]) {
        let (hl_r, hl_g, hl_b) = self.highlight;

        for (packed, pixel) in samples.iter().zip(out.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let sample = decode_sample(*packed);

            if !band.contains(sample.distance_mm) {
                // Out of band: leave the pixel at its current buffer value
                continue;
            }

            let intensity = self.ramp.intensity(sample.distance_mm);
            pixel[BLUE_INDEX] = intensity;
            pixel[GREEN_INDEX] = intensity;
            pixel[RED_INDEX] = intensity;

            // Player pixels get the highlight color regardless of intensity
            if sample.player > 0 {
                pixel[BLUE_INDEX] = hl_b;
                pixel[GREEN_INDEX] = hl_g;
                pixel[RED_INDEX] = hl_r;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLAYER_INDEX_BITS;

    fn pack(distance_mm: u16, player: u16) -> u16 {
        (distance_mm << PLAYER_INDEX_BITS) | player
    }

    #[test]
    fn test_in_band_pixel_is_grayscale() {
        let samples = [pack(2000, 0)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let out = SliceRenderer::default()
            .render_to_vec(&frame, DistanceBand::new(500, 4000))
            .unwrap();
        // 255 - 255*1150/3150 = 162 in all three channels, pad untouched
        assert_eq!(out, vec![162, 162, 162, 0]);
    }

    #[test]
    fn test_out_of_band_pixel_untouched() {
        let samples = [pack(4500, 0)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let mut out = vec![9u8, 8, 7, 6];
        SliceRenderer::default()
            .render(&frame, DistanceBand::new(500, 4000), &mut out)
            .unwrap();
        // Pass-through: the renderer does not black out, it skips
        assert_eq!(out, vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_band_bounds_are_exclusive() {
        let band = DistanceBand::new(500, 4000);
        assert!(!band.contains(500));
        assert!(band.contains(501));
        assert!(band.contains(3999));
        assert!(!band.contains(4000));
    }

    #[test]
    fn test_inverted_band_suppresses_everything() {
        let samples = [pack(2000, 0), pack(1000, 1)];
        let frame = RawDepthFrame::new(2, 1, &samples).unwrap();
        let out = SliceRenderer::default()
            .render_to_vec(&frame, DistanceBand::new(4000, 500))
            .unwrap();
        assert_eq!(out, vec![0u8; 8]);
    }

    #[test]
    fn test_player_highlight_wins_over_intensity() {
        let samples = [pack(2000, 2)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let out = SliceRenderer::default()
            .render_to_vec(&frame, DistanceBand::new(500, 4000))
            .unwrap();
        // Gold in Bgr32 order: B=0, G=215, R=255
        assert_eq!(out, vec![0, 215, 255, 0]);
    }

    #[test]
    fn test_player_out_of_band_not_highlighted() {
        let samples = [pack(4500, 2)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let out = SliceRenderer::default()
            .render_to_vec(&frame, DistanceBand::new(500, 4000))
            .unwrap();
        assert_eq!(out, vec![0u8; 4]);
    }

    #[test]
    fn test_pad_byte_never_written() {
        let samples = [pack(2000, 0)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let mut out = vec![0u8, 0, 0, 42];
        SliceRenderer::default()
            .render(&frame, DistanceBand::new(500, 4000), &mut out)
            .unwrap();
        assert_eq!(out[3], 42);
    }

    #[test]
    fn test_buffer_size_mismatch_rejected_before_write() {
        let samples = [pack(2000, 0), pack(2000, 0)];
        let frame = RawDepthFrame::new(2, 1, &samples).unwrap();
        let mut out = vec![1u8; 7];
        let err = SliceRenderer::default()
            .render(&frame, DistanceBand::new(500, 4000), &mut out)
            .unwrap_err();
        assert_eq!(
            err,
            SliceError::BufferSizeMismatch {
                expected: 8,
                actual: 7
            }
        );
        // Nothing written
        assert_eq!(out, vec![1u8; 7]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let samples: Vec<u16> = (0..64u16)
            .map(|i| pack(700 + i * 50, (i % 7) * u16::from(i % 3 == 0)))
            .collect();
        let frame = RawDepthFrame::new(8, 8, &samples).unwrap();
        let renderer = SliceRenderer::default();
        let band = DistanceBand::new(800, 3500);

        let first = renderer.render_to_vec(&frame, band).unwrap();
        let second = renderer.render_to_vec(&frame, band).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_single_threaded() {
        let samples: Vec<u16> = (0..640u16)
            .map(|i| pack(500 + (i * 13) % 4200, i % 8))
            .collect();
        let frame = RawDepthFrame::new(64, 10, &samples).unwrap();
        let renderer = SliceRenderer::default();
        let band = DistanceBand::new(600, 4000);

        let single = renderer.render_to_vec(&frame, band).unwrap();
        for workers in [1, 2, 3, 7] {
            let mut parallel = vec![0u8; single.len()];
            renderer
                .render_parallel(&frame, band, &mut parallel, workers)
                .unwrap();
            assert_eq!(single, parallel, "workers = {}", workers);
        }
    }

    #[test]
    fn test_custom_highlight_color() {
        let samples = [pack(2000, 1)];
        let frame = RawDepthFrame::new(1, 1, &samples).unwrap();
        let out = SliceRenderer::default()
            .with_highlight((10, 20, 30))
            .render_to_vec(&frame, DistanceBand::new(500, 4000))
            .unwrap();
        assert_eq!(out, vec![30, 20, 10, 0]);
    }
}
