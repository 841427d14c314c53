//! Glint Renderer - CPU ray tracing.
//!
//! A Whitted-style ray tracer: primary rays from a pinhole camera, point
//! light shadowing, diffuse and specular shading, and recursive mirror
//! reflection with a bounded depth.
//!
//! Every primitive is intersected in its own unit-scale local space and
//! mapped back to world space through its object's [`Transform`].

mod hit;
mod object;
mod sphere;
mod plane;
mod cylinder;
mod cone;
mod triangle;
mod material;
mod texture;
mod light;
mod camera;
mod scene;
mod renderer;
mod bucket;

#[cfg(test)]
mod scenarios;

pub use hit::{Hit, HitRecord, Intersect, LocalHit};
pub use object::{Object, Shape};
pub use sphere::Sphere;
pub use plane::Plane;
pub use cylinder::Cylinder;
pub use cone::Cone;
pub use triangle::TriangleMesh;
pub use material::{
    compute_diffuse, compute_reflection, compute_specular, Color, DiffuseMaterial, Material,
    MetallicMaterial,
};
pub use texture::{Texture, TextureKind};
pub use light::{Illumination, Light, PointLight};
pub use camera::Camera;
pub use scene::{MaterialId, ObjectId, RayHit, Scene, TextureId};
pub use renderer::{
    color_to_rgba, render, trace_pixel, PixelBuffer, RenderConfig, RenderError,
};
pub use bucket::{generate_buckets, render_bucket, thread_grid, Bucket, BucketResult};

/// Re-export common math types from glint_math
pub use glint_math::{DVec2, DVec3, Ray, Transform};
