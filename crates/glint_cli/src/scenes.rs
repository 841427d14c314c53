//! Hardcoded demo scenes.
//!
//! All scenes share one layout: -Z is up, the camera sits on -Y looking at
//! the origin, and the floor is a large plane at z = 1 whose normal faces
//! the objects.

use crate::cli::SceneName;
use anyhow::{bail, Result};
use glint_renderer::{
    Camera, Color, Cone, Cylinder, DiffuseMaterial, MaterialId, MetallicMaterial, Object, Plane,
    PointLight, Scene, Sphere, Texture, TriangleMesh, Transform,
};
use glint_renderer::{DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

/// External resources a scene may pull in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneAssets<'a> {
    pub texture: Option<&'a Path>,
    pub mesh: Option<&'a Path>,
}

/// Build the named scene for an image of the given aspect ratio.
pub fn build(name: SceneName, aspect_ratio: f64, assets: SceneAssets<'_>) -> Result<Scene> {
    let camera = Camera::new()
        .with_position(DVec3::new(0.0, -10.0, -2.0))
        .with_look_at(DVec3::ZERO)
        .with_up(DVec3::Z)
        .with_horizon_size(0.25)
        .with_aspect_ratio(aspect_ratio);

    let mut scene = Scene::new(camera);

    match name {
        SceneName::Spheres => spheres(&mut scene),
        SceneName::Mirrors => mirrors(&mut scene),
        SceneName::Shapes => shapes(&mut scene),
        SceneName::Textured => textured(&mut scene, assets.texture)?,
        SceneName::Mesh => {
            let Some(path) = assets.mesh else {
                bail!("the mesh scene needs --mesh <file.obj>");
            };
            mesh(&mut scene, path)?
        }
    }

    log::info!(
        "Built {:?} scene: {} objects, {} lights",
        name,
        scene.objects().len(),
        scene.lights().len()
    );

    Ok(scene)
}

/// Place a unit primitive.
fn placed(shape: impl Into<glint_renderer::Shape>, translation: DVec3, rotation: DVec3, scale: DVec3) -> Object {
    Object::new(shape).with_transform(Transform::new(translation, rotation, scale))
}

/// A wide floor at z = 1 with the given material.
fn add_floor(scene: &mut Scene, material: MaterialId) {
    scene.add_object(
        placed(Plane::new(), DVec3::new(0.0, 0.0, 1.0), DVec3::ZERO, DVec3::new(16.0, 16.0, 1.0))
            .with_material(material),
    );
}

fn add_key_lights(scene: &mut Scene) {
    scene.add_light(PointLight::new(DVec3::new(5.0, -10.0, -5.0), Color::ONE, 1.0));
    scene.add_light(PointLight::new(DVec3::new(-5.0, -10.0, -5.0), Color::new(1.0, 0.4, 0.4), 0.6));
    scene.add_light(PointLight::new(DVec3::new(0.0, -10.0, -5.0), Color::new(0.4, 0.4, 1.0), 0.6));
}

fn spheres(scene: &mut Scene) {
    let floor = scene.add_material(MetallicMaterial::new(Color::splat(0.5), 0.5, 0.0));
    let chrome = scene.add_material(MetallicMaterial::new(Color::new(0.25, 0.5, 0.8), 0.75, 10.0));
    let matte = scene.add_material(DiffuseMaterial::new(Color::new(1.0, 0.8, 0.0)));

    add_floor(scene, floor);

    let half = DVec3::splat(0.5);
    // No material: plain diffuse from the object color
    scene.add_object(
        placed(Sphere::new(), DVec3::new(-1.5, 0.0, 0.5), DVec3::ZERO, half)
            .with_color(Color::new(0.25, 0.5, 0.8)),
    );
    scene.add_object(
        placed(Sphere::new(), DVec3::new(0.0, 0.0, 0.5), DVec3::ZERO, half).with_material(chrome),
    );
    scene.add_object(
        placed(Sphere::new(), DVec3::new(1.5, 0.0, 0.5), DVec3::ZERO, half).with_material(matte),
    );

    add_key_lights(scene);
}

fn mirrors(scene: &mut Scene) {
    let mirror = scene.add_material(MetallicMaterial::new(Color::ONE, 0.9, 0.0));
    let floor = scene.add_material(DiffuseMaterial::new(Color::splat(0.6)));
    let ball = scene.add_material(MetallicMaterial::new(Color::new(1.0, 0.3, 0.2), 0.2, 20.0));

    add_floor(scene, floor);

    // Facing panels on either side, normals pointing at each other
    let panel = DVec3::new(1.0, 3.0, 1.0);
    scene.add_object(
        placed(Plane::new(), DVec3::new(-2.0, 0.0, 0.0), DVec3::new(0.0, -FRAC_PI_2, 0.0), panel)
            .with_material(mirror),
    );
    scene.add_object(
        placed(Plane::new(), DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, FRAC_PI_2, 0.0), panel)
            .with_material(mirror),
    );

    scene.add_object(
        placed(Sphere::new(), DVec3::new(0.0, 0.0, 0.5), DVec3::ZERO, DVec3::splat(0.5)).with_material(ball),
    );

    add_key_lights(scene);
}

fn shapes(scene: &mut Scene) {
    let floor = scene.add_material(MetallicMaterial::new(Color::splat(0.5), 0.4, 0.0));
    let red = scene.add_material(MetallicMaterial::new(Color::new(1.0, 0.25, 0.25), 0.3, 15.0));
    let green = scene.add_material(DiffuseMaterial::new(Color::new(0.25, 1.0, 0.25)));
    let blue = scene.add_material(MetallicMaterial::new(Color::new(0.25, 0.25, 1.0), 0.5, 30.0));

    add_floor(scene, floor);

    scene.add_object(
        placed(Sphere::new(), DVec3::new(-2.0, 0.0, 0.5), DVec3::ZERO, DVec3::splat(0.5)).with_material(red),
    );
    // Upright cylinder standing on the floor
    scene.add_object(
        placed(Cylinder::new(), DVec3::new(0.0, 0.0, 0.25), DVec3::ZERO, DVec3::new(0.5, 0.5, 0.75))
            .with_material(green),
    );
    // Apex up (toward -Z), base on the floor
    scene.add_object(
        placed(Cone::new(), DVec3::new(2.0, 0.0, -0.5), DVec3::ZERO, DVec3::new(0.5, 0.5, 1.5)).with_material(blue),
    );

    add_key_lights(scene);
}

fn textured(scene: &mut Scene, sprite: Option<&Path>) -> Result<()> {
    let tiles = scene.add_texture(
        Texture::checker_with_colors(Color::splat(0.9), Color::splat(0.2))
            .with_transform(DVec2::ZERO, 0.0, DVec2::splat(16.0)),
    );
    let stripes = scene.add_texture(
        Texture::checker_with_colors(Color::new(1.0, 0.5, 0.0), Color::new(0.2, 0.1, 0.4))
            .with_transform(DVec2::ZERO, PI / 4.0, DVec2::splat(4.0)),
    );

    let floor = scene.add_material(MetallicMaterial::new(Color::ONE, 0.3, 0.0).with_texture(tiles));
    let ball = scene.add_material(DiffuseMaterial::new(Color::ONE).with_texture(stripes));

    add_floor(scene, floor);
    scene.add_object(
        placed(Sphere::new(), DVec3::new(-1.0, 0.0, 0.5), DVec3::ZERO, DVec3::splat(0.5)).with_material(ball),
    );

    if let Some(path) = sprite {
        let image = scene.add_texture(Texture::load_sprite(path)?);
        let card = scene.add_material(DiffuseMaterial::new(Color::ONE).with_texture(image));

        // Card standing on the floor, facing the camera
        scene.add_object(
            placed(Plane::new(), DVec3::new(1.0, 0.0, 0.25), DVec3::new(-FRAC_PI_2, 0.0, 0.0), DVec3::splat(0.75))
                .with_material(card),
        );
    }

    add_key_lights(scene);
    Ok(())
}

fn mesh(scene: &mut Scene, path: &Path) -> Result<()> {
    let mesh = TriangleMesh::load(path)?;
    log::info!("Loaded {} triangles from {}", mesh.triangle_count(), path.display());

    let floor = scene.add_material(DiffuseMaterial::new(Color::splat(0.6)));
    let body = scene.add_material(MetallicMaterial::new(Color::new(0.8, 0.7, 0.5), 0.25, 20.0));

    add_floor(scene, floor);
    // OBJ files are usually +Y up; turn that into this scene's -Z up
    scene.add_object(placed(mesh, DVec3::ZERO, DVec3::new(-FRAC_PI_2, 0.0, 0.0), DVec3::ONE).with_material(body));

    add_key_lights(scene);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenes_build() {
        for name in [SceneName::Spheres, SceneName::Mirrors, SceneName::Shapes, SceneName::Textured] {
            let scene = build(name, 16.0 / 9.0, SceneAssets::default()).unwrap();
            assert!(!scene.objects().is_empty());
            assert_eq!(scene.lights().len(), 3);
        }
    }

    #[test]
    fn test_mesh_scene_requires_path() {
        assert!(build(SceneName::Mesh, 1.0, SceneAssets::default()).is_err());
    }

    #[test]
    fn test_missing_sprite_is_error() {
        let assets = SceneAssets {
            texture: Some(Path::new("does/not/exist.png")),
            mesh: None,
        };
        assert!(build(SceneName::Textured, 1.0, assets).is_err());
    }
}
