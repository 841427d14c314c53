//! End-to-end checks over small hand-built scenes.

use crate::{
    render, trace_pixel, Camera, Color, MetallicMaterial, Object, Plane, PointLight, RenderConfig,
    Scene, Sphere, TriangleMesh,
};
use glint_core::MeshData;
use glint_math::{DVec3, Ray, Transform};
use std::f64::consts::{FRAC_PI_2, PI};

/// Two parallel mirrors facing each other with a light between them.
fn hall_of_mirrors(color: Color) -> Scene {
    let mut scene = Scene::new(Camera::default());
    let mirror = scene.add_material(MetallicMaterial::new(color, 0.5, 0.0));

    let scale = DVec3::new(10.0, 10.0, 1.0);
    scene.add_object(
        Object::new(Plane::new())
            .with_transform(Transform::new(DVec3::ZERO, DVec3::ZERO, scale))
            .with_material(mirror),
    );
    scene.add_object(
        Object::new(Plane::new())
            .with_transform(Transform::new(DVec3::new(0.0, 0.0, -2.0), DVec3::new(PI, 0.0, 0.0), scale))
            .with_material(mirror),
    );
    scene.add_light(PointLight::new(DVec3::new(0.0, 0.0, -1.0), Color::ONE, 1.0));
    scene
}

#[test]
fn test_two_by_two_render_hits_center_only() {
    let mut scene = Scene::new(Camera::default().with_aspect_ratio(16.0 / 9.0));
    scene.add_object(Object::new(Sphere::new()));

    // Unlit hits shade black; misses show the sentinel background
    let sentinel = Color::new(1.0, 0.0, 1.0);
    let config = RenderConfig::default().with_size(2, 2).with_background(sentinel);

    assert_ne!(trace_pixel(&scene, 1, 1, &config), sentinel);
    assert_eq!(trace_pixel(&scene, 0, 0, &config), sentinel);
    assert_eq!(trace_pixel(&scene, 1, 0, &config), sentinel);
    assert_eq!(trace_pixel(&scene, 0, 1, &config), sentinel);

    // Screen corners lie outside the sphere's angular radius
    let camera = scene.camera();
    for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        assert!(scene.cast_ray(&camera.generate_ray(x, y)).is_none());
    }
    assert!(scene.cast_ray(&camera.generate_ray(0.0, 0.0)).is_some());
}

#[test]
fn test_hall_of_mirrors_terminates_after_n_bounces() {
    let base = Color::new(0.8, 0.6, 0.4);
    let scene = hall_of_mirrors(base);

    // Lit head-on with intensity 1, each surface contributes `base` diffusely
    let ray = Ray::new(DVec3::new(0.0, 0.0, -1.0), DVec3::new(0.0, 0.0, -0.5));
    let hit = scene.cast_ray(&ray).unwrap();
    assert!(hit.point.length() < 1e-9);

    for n in 0..=4 {
        let color = scene.shade(&ray, &hit, 0, n);
        let expected = base * (1.0 - 0.5f64.powi(n as i32 + 1));
        assert!(
            (color - expected).length() < 1e-6,
            "depth {}: got {:?}, expected {:?}",
            n,
            color,
            expected
        );
    }
}

#[test]
fn test_casting_is_idempotent() {
    let scene = hall_of_mirrors(Color::ONE);
    let ray = Ray::new(DVec3::new(0.2, -0.1, -1.0), DVec3::new(0.1, 0.0, 0.0));

    let first = scene.cast_ray(&ray).unwrap();
    let second = scene.cast_ray(&ray).unwrap();
    assert_eq!(first, second);
    assert_eq!(scene.shade(&ray, &first, 0, 3), scene.shade(&ray, &second, 0, 3));
}

#[test]
fn test_light_above_plane_falls_off_with_angle() {
    let mut scene = Scene::new(Camera::default());
    let floor = scene.add_object(
        Object::new(Plane::new())
            .with_transform(Transform::new(DVec3::ZERO, DVec3::ZERO, DVec3::new(100.0, 100.0, 1.0))),
    );
    scene.add_light(PointLight::new(DVec3::new(0.0, 0.0, -5.0), Color::ONE, 1.0));
    let light = scene.lights()[0];

    let mut previous = f64::INFINITY;
    for r in [0.0, 1.0, 2.5, 5.0, 10.0, 40.0] {
        let point = DVec3::new(r, 0.0, 0.0);
        let illum = light.compute_lighting(point, DVec3::NEG_Z, &scene, floor).unwrap();

        let angle = (r / 5.0f64).atan();
        assert!((illum.intensity - (1.0 - angle / FRAC_PI_2)).abs() < 1e-9);
        assert!(illum.intensity < previous);
        previous = illum.intensity;
    }

    // Same distance from the foot of the light, same intensity
    let a = light.compute_lighting(DVec3::new(3.0, 0.0, 0.0), DVec3::NEG_Z, &scene, floor).unwrap();
    let b = light.compute_lighting(DVec3::new(0.0, -3.0, 0.0), DVec3::NEG_Z, &scene, floor).unwrap();
    assert!((a.intensity - b.intensity).abs() < 1e-12);
}

#[test]
fn test_unassigned_material_is_plain_diffuse() {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(Object::new(Sphere::new()).with_color(Color::new(0.5, 1.0, 1.0)));
    scene.add_light(PointLight::new(DVec3::new(0.0, -10.0, 0.0), Color::new(1.0, 0.5, 0.25), 0.8));

    let ray = scene.camera().generate_ray(0.0, 0.0);
    let hit = scene.cast_ray(&ray).unwrap();
    let color = scene.shade(&ray, &hit, 0, 3);

    assert!((color - Color::new(0.4, 0.4, 0.2)).length() < 1e-9);
}

#[test]
fn test_grazing_light_contributes_nothing() {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(
        Object::new(Plane::new())
            .with_transform(Transform::new(DVec3::ZERO, DVec3::ZERO, DVec3::new(10.0, 10.0, 1.0))),
    );
    // Light in the plane of the surface
    scene.add_light(PointLight::new(DVec3::new(20.0, 0.0, 0.0), Color::ONE, 1.0));

    let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::ZERO);
    let hit = scene.cast_ray(&ray).unwrap();

    assert_eq!(scene.shade(&ray, &hit, 0, 3), Color::ZERO);
}

#[test]
fn test_mesh_normal_in_world_space() {
    // Unit quad in local z = 0, wound so its face normal is +Z
    let data = MeshData::new(
        vec![
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(-1.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    );
    let mut scene = Scene::new(Camera::default());
    // Stand the quad up facing the default camera, shifted so the view axis
    // lands inside a triangle rather than on the shared diagonal
    scene.add_object(
        Object::new(TriangleMesh::new(&data))
            .with_transform(Transform::new(DVec3::new(0.5, 2.0, 0.0), DVec3::new(FRAC_PI_2, 0.0, 0.0), DVec3::ONE)),
    );

    let ray = scene.camera().generate_ray(0.0, 0.0);
    let hit = scene.cast_ray(&ray).unwrap();

    assert!((hit.point - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-9);
    assert!((hit.normal - DVec3::NEG_Y).length() < 1e-9);
}

#[test]
fn test_render_buffer_is_opaque_rgba() {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(Object::new(Sphere::new()).with_color(Color::new(1.0, 0.2, 0.2)));
    scene.add_light(PointLight::new(DVec3::new(5.0, -10.0, -5.0), Color::ONE, 1.0));

    let config = RenderConfig::default().with_size(9, 7).with_threads(3);
    let buffer = render(&scene, &config).unwrap();

    assert_eq!(buffer.as_bytes().len(), 9 * 7 * 4);
    assert!(buffer.as_bytes().chunks(4).all(|px| px[3] == 255));

    // Rendering is deterministic regardless of scheduling
    assert_eq!(buffer, render(&scene, &config.clone().with_threads(1)).unwrap());
}

#[test]
fn test_render_config_json() {
    let config = RenderConfig::default()
        .with_size(320, 240)
        .with_max_reflection_depth(2)
        .with_background(Color::new(0.1, 0.2, 0.3));

    let json = serde_json::to_string(&config).unwrap();
    let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    // Missing fields fall back to defaults
    let partial: RenderConfig = serde_json::from_str(r#"{ "width": 64, "threads": 2 }"#).unwrap();
    assert_eq!(partial.width, 64);
    assert_eq!(partial.height, 720);
    assert_eq!(partial.threads, Some(2));
    assert_eq!(partial.max_reflection_depth, 3);
}
