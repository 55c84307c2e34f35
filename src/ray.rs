use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    origin: Vec3<f32>,
    direction: Vec3<f32>,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `direction` has zero length.
    pub fn new(origin: Vec3<f32>, direction: Vec3<f32>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f32> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f32> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f32) -> Vec3<f32> {
        self.origin + self.direction.scale(t)
    }
}
