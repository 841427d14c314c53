//! Image loading for sprite textures.
//!
//! Decodes an image from disk into an RGB grid that the renderer samples
//! with integer pixel coordinates.

use std::path::Path;

use glint_math::DVec3;
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture has no pixels: {0}")]
    Empty(String),

    #[error("Pixel data does not match {width}x{height}: got {len} pixels")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded image with 8-bit RGB pixels.
#[derive(Clone, Debug)]
pub struct ImageTexture {
    /// Texture width in pixels
    width: u32,

    /// Texture height in pixels
    height: u32,

    /// Row-major pixel data
    pixels: Vec<[u8; 3]>,

    /// Original file path (for debugging)
    path: String,
}

impl ImageTexture {
    /// Load an image from a file path.
    ///
    /// A missing or undecodable file is an error; callers treat it as a
    /// fatal scene setup failure.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let img = image::open(path).map_err(|source| TextureError::Load {
            path: display.clone(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty(display));
        }

        let pixels = rgb.pixels().map(|p| p.0).collect();

        log::debug!("Loaded texture: {} ({}x{})", display, width, height);

        Ok(Self {
            width,
            height,
            pixels,
            path: display,
        })
    }

    /// Build a texture from in-memory pixel data (row-major).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> TextureResult<Self> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty("<memory>".to_string()));
        }
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(TextureError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            path: "<memory>".to_string(),
        })
    }

    /// Get the pixel at integer coordinates as RGB in [0, 1].
    ///
    /// Out-of-range coordinates return black.
    pub fn get_pixel(&self, x: u32, y: u32) -> DVec3 {
        if x >= self.width || y >= self.height {
            return DVec3::ZERO;
        }

        let [r, g, b] = self.pixels[(y * self.width + x) as usize];
        DVec3::new(r as f64, g as f64, b as f64) / 255.0
    }

    /// Texture dimensions in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Source path, or `<memory>` for in-memory textures.
    pub fn path(&self) -> &str {
        &self.path
    }
}
