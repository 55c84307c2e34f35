use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

mod disk;
mod sphere;

pub use self::disk::Disk;
pub use self::sphere::Sphere;

pub trait Geometry {
    /// Returns the first intersection point strictly in front of the ray origin.
    fn intersection(&self, ray: &Ray) -> Option<Vec3<f32>>;

    /// Surface normal at `point`, which is expected to lie on the surface.
    fn normal(&self, point: Vec3<f32>) -> Vec3<f32>;

    fn material(&self) -> &Material;
}

/// Any renderable primitive, borrowed from the scene storage.
#[derive(Copy, Clone, Debug)]
pub enum Primitive<'a> {
    Sphere(&'a Sphere),
    Disk(&'a Disk),
}

impl<'a> Geometry for Primitive<'a> {
    #[inline]
    fn intersection(&self, ray: &Ray) -> Option<Vec3<f32>> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersection(ray),
            Primitive::Disk(disk) => disk.intersection(ray),
        }
    }

    #[inline]
    fn normal(&self, point: Vec3<f32>) -> Vec3<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.normal(point),
            Primitive::Disk(disk) => disk.normal(point),
        }
    }

    #[inline]
    fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Disk(disk) => disk.material(),
        }
    }
}
