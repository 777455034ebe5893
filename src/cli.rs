// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for rendering depth slices
//!
//! This module stands in for the sensor driver: it acquires a frame (from a
//! file dump or a synthetic generator), calls the renderer once, and
//! "displays" the result by saving a PNG.

use std::path::PathBuf;

use depthslice::constants::{BLUE_INDEX, BYTES_PER_PIXEL, GREEN_INDEX, RED_INDEX};
use depthslice::{
    DistanceBand, RawDepthFrame, SliceConfig, SliceRenderer, samples_from_le_bytes,
};
use tracing::info;

/// Render a raw little-endian frame dump to a PNG
pub fn render_frame(
    input: PathBuf,
    width: u32,
    height: u32,
    min: u16,
    max: u16,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => SliceConfig::load(&path)?,
        None => SliceConfig {
            band: DistanceBand::new(min, max),
            ..SliceConfig::default()
        },
    };

    let bytes = std::fs::read(&input)?;
    let samples = samples_from_le_bytes(&bytes);
    let frame = RawDepthFrame::new(width, height, &samples)?;

    let renderer = SliceRenderer::new(config.ramp);
    let pixels = renderer.render_to_vec(&frame, config.band)?;

    let output = output.unwrap_or_else(|| input.with_extension("png"));
    save_bgrx_png(&pixels, width, height, &output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        min_mm = config.band.min_mm,
        max_mm = config.band.max_mm,
        "Rendered depth slice"
    );
    println!("Saved {}", output.display());
    Ok(())
}

/// Render a synthetic frame: a left-to-right depth ramp over the sensor
/// range with a centered "player" blob, so the pipeline can be exercised
/// without hardware
pub fn render_demo(
    width: u32,
    height: u32,
    min: u16,
    max: u16,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let samples = synthetic_frame(width, height);
    let frame = RawDepthFrame::new(width, height, &samples)?;

    let renderer = SliceRenderer::default();
    let pixels = renderer.render_to_vec(&frame, DistanceBand::new(min, max))?;

    let output = output.unwrap_or_else(|| PathBuf::from("demo.png"));
    save_bgrx_png(&pixels, width, height, &output)?;
    println!("Saved {}", output.display());
    Ok(())
}

/// Build a synthetic packed frame: distance ramps 400..4400 mm across each
/// row, and a centered ellipse carries player index 1
fn synthetic_frame(width: u32, height: u32) -> Vec<u16> {
    let (w, h) = (width as usize, height as usize);
    let mut samples = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let distance = 400 + (x as u32 * 4000 / width.max(1)) as u16;

            // Ellipse around the frame center, radii w/8 and h/4
            let dx = x as i64 - w as i64 / 2;
            let dy = y as i64 - h as i64 / 2;
            let rx = (w as i64 / 8).max(1);
            let ry = (h as i64 / 4).max(1);
            let player = u16::from(dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry);

            samples.push((distance << 3) | player);
        }
    }

    samples
}

/// Save a Bgr32 pixel buffer as an opaque RGBA PNG
fn save_bgrx_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    output: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rgba = Vec::with_capacity(pixels.len());
    for pixel in pixels.chunks_exact(BYTES_PER_PIXEL) {
        rgba.push(pixel[RED_INDEX]);
        rgba.push(pixel[GREEN_INDEX]);
        rgba.push(pixel[BLUE_INDEX]);
        rgba.push(255);
    }

    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or("Pixel buffer does not match image dimensions")?;
    image.save(output)?;
    Ok(())
}
