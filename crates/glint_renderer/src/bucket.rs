//! Bucket-based tile rendering.
//!
//! Divides the image into a grid of tiles (buckets), one per worker, that
//! can be rendered independently and in parallel using rayon.

use crate::renderer::{color_to_rgba, trace_pixel, RenderConfig};
use crate::Scene;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Factor a worker count into a near-square `(columns, rows)` grid.
///
/// Rows is the largest divisor of `concurrency` not above its square root,
/// so the grid always has exactly `concurrency` cells. Zero is treated as one.
pub fn thread_grid(concurrency: usize) -> (u32, u32) {
    let n = concurrency.max(1);

    let mut rows = 1;
    let mut candidate = 1;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            rows = candidate;
        }
        candidate += 1;
    }

    ((n / rows) as u32, rows as u32)
}

/// Split an image into a `columns` x `rows` grid of buckets in row-major
/// order.
///
/// Each tile is `dimension / grid` pixels; the last column and row absorb
/// the remainder. The grid is clamped so no bucket is empty.
pub fn generate_buckets(width: u32, height: u32, columns: u32, rows: u32) -> Vec<Bucket> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let columns = columns.clamp(1, width);
    let rows = rows.clamp(1, height);
    let tile_w = width / columns;
    let tile_h = height / rows;

    let mut buckets = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        let y = row * tile_h;
        let bh = if row == rows - 1 { height - y } else { tile_h };

        for col in 0..columns {
            let x = col * tile_w;
            let bw = if col == columns - 1 { width - x } else { tile_w };
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    buckets
}

/// Render a single bucket to RGBA pixels.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> Vec<[u8; 4]> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            let color = trace_pixel(scene, global_x, global_y, config);
            pixels.push(color_to_rgba(color));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// RGBA pixels in row-major order
    pub pixels: Vec<[u8; 4]>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<[u8; 4]>) -> Self {
        Self { bucket, pixels }
    }
}
