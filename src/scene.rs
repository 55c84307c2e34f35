use crate::float::INFINITY;
use crate::geometry::{Disk, Geometry, Primitive, Sphere};
use crate::intersection::Intersection;
use crate::material::{Color, Light};
use crate::ray::Ray;
use crate::shading;
use crate::vec3::Vec3;

/// Read-only view over caller-owned scene storage for the duration of a render.
#[derive(Copy, Clone, Debug)]
pub struct Scene<'a> {
    pub spheres: &'a [Sphere],
    pub disks: &'a [Disk],
    pub lights: &'a [Light],
    /// Background color, returned for rays that hit nothing.
    pub ambient: Color,
    /// Viewer position used for specular highlights.
    pub camera: Vec3<f32>,
}

impl<'a> Scene<'a> {
    pub fn new(
        spheres: &'a [Sphere],
        disks: &'a [Disk],
        lights: &'a [Light],
        ambient: Color,
        camera: Vec3<f32>,
    ) -> Self {
        Self {
            spheres,
            disks,
            lights,
            ambient,
            camera,
        }
    }

    /// All primitives, spheres first, each group in storage order.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'a>> + 'a {
        let spheres: &'a [Sphere] = self.spheres;
        let disks: &'a [Disk] = self.disks;

        spheres.iter().map(Primitive::Sphere).chain(disks.iter().map(Primitive::Disk))
    }

    pub fn trace(&self, ray: &Ray) -> Color {
        match self.closest_intersection(ray) {
            Some(intersection) => {
                let primitive = intersection.primitive;
                let normal = primitive.normal(intersection.point);

                shading::shade(intersection.point, normal, primitive.material(), self)
            }
            None => self.ambient,
        }
    }

    /// Linear scan for the nearest hit. On equal distances the primitive met
    /// first in `primitives()` order is kept.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Intersection<'a>> {
        let mut distance = INFINITY;
        let mut closest = None;

        for primitive in self.primitives() {
            if let Some(point) = primitive.intersection(ray) {
                let d = (point - ray.origin()).len();
                if d < distance {
                    distance = d;
                    closest = Some(Intersection::new(primitive, point, d));
                }
            }
        }

        closest
    }
}
