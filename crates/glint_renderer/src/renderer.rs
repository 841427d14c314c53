//! Frame renderer.
//!
//! Implements a Whitted-style ray tracer with:
//! - One primary ray per pixel, no anti-aliasing
//! - Bounded recursive reflection
//! - Fork-join tile rendering over a rayon pool

use crate::bucket::{generate_buckets, render_bucket, thread_grid, BucketResult};
use crate::{Color, Scene};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum number of mirror bounces per primary ray
    pub max_reflection_depth: u32,
    /// Worker count; `None` uses rayon's default
    pub threads: Option<usize>,
    /// Color for rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            max_reflection_depth: 3,
            threads: None,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    /// Builder: set the output resolution.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: set the reflection depth limit.
    pub fn with_max_reflection_depth(mut self, depth: u32) -> Self {
        self.max_reflection_depth = depth;
        self
    }

    /// Builder: set the worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builder: set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

/// Clamp a color to [0, 1] and convert it to opaque 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Compute the color of pixel (x, y).
///
/// Pixel coordinates map linearly onto the camera screen: column 0 is
/// x = -1 and row 0 is y = -1.
pub fn trace_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let x_norm = x as f64 * 2.0 / config.width as f64 - 1.0;
    let y_norm = y as f64 * 2.0 / config.height as f64 - 1.0;

    let ray = scene.camera().generate_ray(x_norm, y_norm);
    match scene.cast_ray(&ray) {
        Some(hit) => scene.shade(&ray, &hit, 0, config.max_reflection_depth),
        None => config.background,
    }
}

/// An RGBA8 image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte offset of the first channel of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let mut pixels = result.pixels.iter();

        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                if let Some(rgba) = pixels.next() {
                    self.set(bucket.x + local_x, bucket.y + local_y, *rgba);
                }
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Render the scene into a new pixel buffer.
///
/// The image is split into one bucket per worker; workers share the scene
/// read-only and the buffer is assembled once they have all finished.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::EmptyImage {
            width: config.width,
            height: config.height,
        });
    }

    let concurrency = config.threads.unwrap_or_else(rayon::current_num_threads).max(1);
    let (columns, rows) = thread_grid(concurrency);
    let buckets = generate_buckets(config.width, config.height, columns, rows);

    log::info!(
        "Rendering {}x{} ({} objects, {} lights) in {} buckets on {} threads",
        config.width,
        config.height,
        scene.objects().len(),
        scene.lights().len(),
        buckets.len(),
        concurrency
    );

    let pool = rayon::ThreadPoolBuilder::new().num_threads(concurrency).build()?;
    let start = Instant::now();

    let results: Vec<BucketResult> = pool.install(|| {
        buckets
            .par_iter()
            .map(|bucket| {
                let pixels = render_bucket(bucket, scene, config);
                log::debug!(
                    "Bucket {} done ({}x{} at {},{})",
                    bucket.index,
                    bucket.width,
                    bucket.height,
                    bucket.x,
                    bucket.y
                );
                BucketResult::new(*bucket, pixels)
            })
            .collect()
    });

    let mut buffer = PixelBuffer::new(config.width, config.height);
    for result in &results {
        buffer.write_bucket(result);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());

    Ok(buffer)
}
