use serde::Deserialize;

use crate::float::{equal, more, EPSILON};
use crate::geometry::Geometry;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Sphere {
    pub center: Vec3<f32>,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3<f32>, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Geometry for Sphere {
    /// Solves `|o + d·t - c|² = r²` for the least `t > EPSILON`.
    fn intersection(&self, ray: &Ray) -> Option<Vec3<f32>> {
        let s = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * s.dot(ray.direction());
        let c = s.dot(&s) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        let denominator = 2.0 * a;

        let t = if equal(discriminant, 0.0) {
            let t1 = -b / denominator;
            if t1 > EPSILON {
                t1
            } else {
                return None;
            }
        } else if more(discriminant, 0.0) {
            let sqrt = discriminant.sqrt();

            let t1 = (-b - sqrt) / denominator;
            let t2 = (-b + sqrt) / denominator;

            if t1 > EPSILON {
                t1
            } else if t2 > EPSILON {
                t2
            } else {
                return None;
            }
        } else {
            return None;
        };

        if equal(t, 0.0) {
            return None;
        }

        Some(ray.offset(t))
    }

    #[inline]
    fn normal(&self, point: Vec3<f32>) -> Vec3<f32> {
        (point - self.center).unit()
    }

    #[inline]
    fn material(&self) -> &Material {
        &self.material
    }
}
