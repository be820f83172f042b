// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Vector3f };

use image::{ ImageResult, Rgb, RgbImage };
use std::ops;
use std::path::Path;
use std::vec::Vec;

#[derive(Clone, Debug)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        let transformed_index = index.0 + self.width * index.1;
        assert!(transformed_index < self.height * self.width);
        &self.data[transformed_index]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        let transformed_index = index.0 + self.width * index.1;
        assert!(transformed_index < self.height * self.width);
        &mut self.data[transformed_index]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Vector3f::new(0.0, 0.0, 0.0))
    }

    pub fn filled(width: usize, height: usize, color: Vector3f) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(color; pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write a pixel given in signed coordinates, anything off the canvas is dropped.
    pub fn put(&mut self, x: i64, y: i64, color: Vector3f) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self[(x as usize, y as usize)] = color;
    }

    /// Bresenham line between two points in pixel space.
    pub fn draw_line(&mut self, from: (Float, Float), to: (Float, Float), color: Vector3f) {
        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let to_byte = |v: Float| (v.max(0.0).min(1.0) * 255.0).round() as u8;
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self[(x as usize, y as usize)];
            Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        })
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        log::info!("Writing {}x{} figure to: {}.", self.width, self.height, path.as_ref().display());
        self.to_rgb_image().save(path)
    }
}

/* Test for Bitmap */
