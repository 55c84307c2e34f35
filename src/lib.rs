//! Offline ray tracer for spheres and disks lit by point lights, with Phong
//! shading and hard shadows.

pub mod config;
pub mod error;
pub mod float;
pub mod frame;
pub mod geometry;
pub mod intersection;
pub mod material;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod vec3;

pub use crate::config::{Config, RenderConfig, SceneDesc};
pub use crate::error::{Error, Result};
pub use crate::frame::{render, Frame, Frustum};
pub use crate::geometry::{Disk, Geometry, Primitive, Sphere};
pub use crate::intersection::Intersection;
pub use crate::material::{Color, Light, Material};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::vec3::Vec3;
