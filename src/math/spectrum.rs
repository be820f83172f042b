// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::fmt;
use std::ops;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0f32, 0.0f32, 0.0f32) }
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        &mut self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = RGBSpectrum;

    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.rgb += rhs.rgb;
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb * rhs }
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.rgb.x, self.rgb.y, self.rgb.z)
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    pub fn r(&self) -> Float {
        self.rgb.x
    }

    pub fn g(&self) -> Float {
        self.rgb.y
    }

    pub fn b(&self) -> Float {
        self.rgb.z
    }

    pub fn is_black(&self) -> bool {
        self.rgb.iter().all(|c| *c == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.rgb.iter().all(|c| c.is_finite())
    }

    pub fn max_value(&self) -> Float {
        self.rgb.max()
    }
}
