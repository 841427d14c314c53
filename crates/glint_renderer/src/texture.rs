//! UV to color samplers.
//!
//! Every texture carries its own 2D transform, applied to the incoming UV
//! before sampling. This lets a pattern be tiled, offset or rotated
//! independently of the object it is mapped onto.

use crate::Color;
use glint_core::{ImageTexture, TextureResult};
use glint_math::{DMat3, DVec2};
use std::path::Path;

/// The closed set of texture patterns.
#[derive(Debug, Clone)]
pub enum TextureKind {
    /// A single solid color
    Flat(Color),
    /// Alternating unit squares
    Checker { color_a: Color, color_b: Color },
    /// An image mapped over UV in [-1, 1]
    Sprite(ImageTexture),
}

/// A texture pattern plus its UV transform.
#[derive(Debug, Clone)]
pub struct Texture {
    kind: TextureKind,
    transform: DMat3,
}

impl Texture {
    /// Create a texture with an identity UV transform.
    pub fn new(kind: TextureKind) -> Self {
        Self {
            kind,
            transform: DMat3::IDENTITY,
        }
    }

    /// A solid color texture.
    pub fn flat(color: Color) -> Self {
        Self::new(TextureKind::Flat(color))
    }

    /// A white and black checkerboard.
    pub fn checker() -> Self {
        Self::checker_with_colors(Color::ONE, Color::ZERO)
    }

    /// A checkerboard of two colors.
    pub fn checker_with_colors(color_a: Color, color_b: Color) -> Self {
        Self::new(TextureKind::Checker { color_a, color_b })
    }

    /// An image texture from already decoded pixels.
    pub fn sprite(image: ImageTexture) -> Self {
        Self::new(TextureKind::Sprite(image))
    }

    /// Load an image texture from disk.
    pub fn load_sprite(path: impl AsRef<Path>) -> TextureResult<Self> {
        let image = ImageTexture::load(path)?;
        let (width, height) = image.size();
        log::info!("Sprite texture {} ({}x{})", image.path(), width, height);
        Ok(Self::sprite(image))
    }

    /// Builder: set the UV transform.
    pub fn with_transform(mut self, translation: DVec2, rotation: f64, scale: DVec2) -> Self {
        self.set_transform(translation, rotation, scale);
        self
    }

    /// Set the UV transform as translate * rotate * scale.
    pub fn set_transform(&mut self, translation: DVec2, rotation: f64, scale: DVec2) {
        self.transform = DMat3::from_scale_angle_translation(scale, rotation, translation);
    }

    pub fn kind(&self) -> &TextureKind {
        &self.kind
    }

    pub fn transform(&self) -> DMat3 {
        self.transform
    }

    /// Sample the texture at a surface parameterization.
    pub fn color_at(&self, uv: DVec2) -> Color {
        let uv = self.transform.transform_point2(uv);

        match &self.kind {
            TextureKind::Flat(color) => *color,
            TextureKind::Checker { color_a, color_b } => {
                let sum = uv.x.floor() as i64 + uv.y.floor() as i64;
                if sum.rem_euclid(2) == 0 {
                    *color_a
                } else {
                    *color_b
                }
            }
            TextureKind::Sprite(image) => {
                let (width, height) = image.size();
                let (w, h) = (width as i64, height as i64);

                let x = (((uv.x + 1.0) / 2.0) * width as f64).round() as i64;
                let y = h - (((uv.y + 1.0) / 2.0) * height as f64).round() as i64;

                image.get_pixel(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32)
            }
        }
    }
}
