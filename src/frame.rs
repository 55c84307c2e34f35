use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Bytes per pixel in a rendered frame (RGB).
pub const CHANNELS: usize = 3;

/// Maps raster coordinates onto a fixed rectangle in world space.
///
/// Pixel `(0, 0)` sits next to `start`, the last pixel next to `end`. Only
/// the x and y components of the corners are used, every ray target lies
/// on the `z = depth` plane.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Frustum {
    pub start: Vec3<f32>,
    pub end: Vec3<f32>,
    pub depth: f32,
    /// Origin of every primary ray.
    pub origin: Vec3<f32>,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            start: Vec3::new(-8.0, -4.5, 0.0),
            end: Vec3::new(8.0, 4.5, 0.0),
            depth: -1.0,
            origin: Vec3::new(0.0, 0.0, -4.0),
        }
    }
}

impl Frustum {
    /// World-space point the ray through the center of pixel `(x, y)` aims at.
    pub fn target(&self, x: usize, y: usize, width: usize, height: usize) -> Vec3<f32> {
        let extent = self.end - self.start;

        let pixel_width = extent.x / width as f32;
        let pixel_height = extent.y / height as f32;

        Vec3::new(
            self.start.x + pixel_width * (x as f32 + 0.5),
            self.start.y + pixel_height * (y as f32 + 0.5),
            self.depth,
        )
    }

    #[inline]
    pub fn ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        Ray::new(self.origin, self.target(x, y, width, height) - self.origin)
    }
}

/// Converts a color component to an 8-bit channel, clamping to `[0, 255]`.
#[inline]
pub fn quantize(component: f32) -> u8 {
    let value = 255.0 * component;

    if value > 255.0 {
        255
    } else if value < 0.0 {
        0
    } else {
        value.round() as u8
    }
}

/// Row-major RGB8 pixel buffer: `pixels[y * 3 * width + 3 * x + c]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * CHANNELS],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let offset = y * CHANNELS * self.width + CHANNELS * x;
        [self.pixels[offset], self.pixels[offset + 1], self.pixels[offset + 2]]
    }

    /// Encodes the frame to an image file, format chosen by the path extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let (width, height) = (self.width() as u32, self.height() as u32);
        if self.pixels.len() != width as usize * height as usize * CHANNELS {
            return Err(Error::BufferSize {
                width,
                height,
                len: self.pixels.len(),
            });
        }

        image::save_buffer(path, &self.pixels, width, height, image::ColorType::Rgb8)?;

        Ok(())
    }
}

fn write_pixel(pixel: &mut [u8], color: Color) {
    pixel[0] = quantize(color.x);
    pixel[1] = quantize(color.y);
    pixel[2] = quantize(color.z);
}

/// Traces one primary ray per pixel. Scanlines are rendered in parallel.
pub fn render(scene: &Scene, frustum: &Frustum, width: usize, height: usize) -> Frame {
    let mut frame = Frame::new(width, height);

    let stride = width.max(1) * CHANNELS;
    frame.pixels.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        for (x, pixel) in row.chunks_mut(CHANNELS).enumerate() {
            let ray = frustum.ray(x, y, width, height);
            write_pixel(pixel, scene.trace(&ray));
        }
    });

    frame
}
