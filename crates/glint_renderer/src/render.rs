//! Parallel render driver.
//!
//! Pixel evaluation shares no mutable state, so scanlines render in
//! parallel on the rayon pool. Each scanline derives its own seeded RNG
//! from the configured base seed, which keeps renders reproducible no
//! matter how the pool schedules the work.

use crate::integrator::ray_color;
use crate::material::Color;
use crate::sample::gen_f32;
use crate::{Camera, Hittable};
use glint_math::InvalidVectorError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Render configuration, handed over by the scene-construction front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-scanline RNG streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
        }
    }
}

/// Image buffer of linear-space colors in [0, 1].
///
/// Gamma correction, quantization, and encoding are the consumer's job.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render a single pixel, averaging jittered samples.
pub fn render_pixel(
    camera: &Camera,
    scene: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<Color, InvalidVectorError> {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + gen_f32(rng)) / config.width as f32;
        // Image rows run top to bottom; viewport v runs bottom to top.
        let v = 1.0 - (y as f32 + gen_f32(rng)) / config.height as f32;

        let ray = camera.ray(u, v);
        pixel_color += ray_color(&ray, scene, config.max_depth, rng)?;
    }

    Ok(pixel_color / config.samples_per_pixel as f32)
}

/// Render the whole image, one rayon task per scanline.
pub fn render(
    camera: &Camera,
    scene: &dyn Hittable,
    config: &RenderConfig,
) -> Result<ImageBuffer, InvalidVectorError> {
    log::info!(
        "rendering {}x{} at {} spp, depth {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );

    let rows: Vec<Vec<Color>> = (0..config.height)
        .into_par_iter()
        .map(|y| {
            let mut rng = StdRng::seed_from_u64(scanline_seed(config.seed, y));
            (0..config.width)
                .map(|x| render_pixel(camera, scene, x, y, config, &mut rng))
                .collect()
        })
        .collect::<Result<_, _>>()?;

    let mut image = ImageBuffer::new(config.width, config.height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, color) in row.into_iter().enumerate() {
            image.set(x as u32, y as u32, color);
        }
    }

    log::info!("render finished");
    Ok(image)
}

/// Derive a distinct, stable seed for scanline `y`.
fn scanline_seed(base: u64, y: u32) -> u64 {
    // splitmix-style increment keeps neighboring rows decorrelated.
    base.wrapping_add((y as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
