use serde::Deserialize;

use crate::float::{less_or_eq, more};
use crate::geometry::Geometry;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// A plane clipped by a circle.
///
/// The plane is defined by a point, which is also the center of the clipping
/// circle, and a normal (defining the orientation of the plane).
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Disk {
    pub point: Vec3<f32>,
    pub normal: Vec3<f32>,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl Disk {
    pub fn new(point: Vec3<f32>, normal: Vec3<f32>, radius: f32, material: Material) -> Self {
        Self {
            point,
            normal,
            radius,
            material,
        }
    }
}

impl Geometry for Disk {
    fn intersection(&self, ray: &Ray) -> Option<Vec3<f32>> {
        let numerator = (self.point - ray.origin()).dot(&self.normal);
        let denominator = ray.direction().dot(&self.normal);

        // A parallel ray gives an infinite or NaN parameter. `-inf` fails the
        // sign check, `+inf` and NaN leave a NaN distance to the center.
        let t = numerator / denominator;
        if less_or_eq(t, 0.0) {
            return None;
        }

        let intersection = ray.offset(t);
        let distance = (intersection - self.point).len();
        if distance.is_nan() || more(distance, self.radius) {
            return None;
        }

        Some(intersection)
    }

    #[inline]
    fn normal(&self, _point: Vec3<f32>) -> Vec3<f32> {
        self.normal
    }

    #[inline]
    fn material(&self) -> &Material {
        &self.material
    }
}
