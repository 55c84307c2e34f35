//! Phong lighting of a single surface point with hard shadows.

use crate::float::less_or_eq;
use crate::geometry::Geometry;
use crate::material::{Color, Light, Material};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// How far the shadow ray origin is pushed along the normal, so that the
/// surface being shaded does not occlude itself.
pub const SHADOW_BIAS: f32 = 1e-1;

/// Color of the fragment at `position`, summed over every light, unclamped.
pub fn shade(position: Vec3<f32>, normal: Vec3<f32>, material: &Material, scene: &Scene) -> Color {
    let normal = normal.unit();

    let mut color = Color::default();
    for light in scene.lights {
        let light_vec = (light.position - position).unit();

        let ambient = light.ambient * material.ambient;

        if is_shadowed(position, normal, light_vec, light, scene) {
            color = color + ambient;
            continue;
        }

        let diffuse_intensity = normal.dot(&light_vec).max(0.0);

        let view_vec = (position - scene.camera).unit();
        let reflect_vec = (-light_vec).reflect(&normal).unit();
        let specular_intensity = (-view_vec).dot(&reflect_vec).max(0.0).powf(material.shininess);

        let diffuse = light.diffuse * material.diffuse.scale(diffuse_intensity);
        let specular = light.specular * material.specular.scale(specular_intensity);

        color = color + ambient + diffuse + specular;
    }

    color
}

/// Only spheres cast shadows, disks are never tested as occluders.
fn is_shadowed(
    position: Vec3<f32>,
    normal: Vec3<f32>,
    light_vec: Vec3<f32>,
    light: &Light,
    scene: &Scene,
) -> bool {
    let test_point = position + normal.scale(SHADOW_BIAS);
    let ray = Ray::new(test_point, light_vec);
    let light_distance = (light.position - test_point).len();

    scene.spheres.iter().any(|sphere| {
        sphere
            .intersection(&ray)
            .map(|point| less_or_eq((point - test_point).len(), light_distance))
            .unwrap_or(false)
    })
}
