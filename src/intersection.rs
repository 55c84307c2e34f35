use crate::geometry::Primitive;
use crate::vec3::Vec3;

/// Nearest hit found along a ray.
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub primitive: Primitive<'a>,
    pub point: Vec3<f32>,
    /// Euclidean distance from the ray origin to `point`.
    pub distance: f32,
}

impl<'a> Intersection<'a> {
    pub fn new(primitive: Primitive<'a>, point: Vec3<f32>, distance: f32) -> Self {
        Self {
            primitive,
            point,
            distance,
        }
    }
}
