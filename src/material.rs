use serde::Deserialize;

use crate::vec3::Vec3;

pub type Color = Vec3<f32>;

/// Phong reflectance coefficients of a surface.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

/// Point light. Intensity does not fall off with distance.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Light {
    pub position: Vec3<f32>,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Vec3<f32>, ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
        }
    }
}
