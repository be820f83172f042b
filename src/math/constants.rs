/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f32;

pub type Vector3f = na::Vector3<Float>;
pub type Matrix2f = na::Matrix2<Float>;
pub type Complexf = na::Complex<Float>;

pub const PI: Float = 3.14159265359;
pub const TWO_PI: Float = 6.28318530718;
pub const HALF_PI: Float = 1.57079632679;
pub const INV_PI: Float = 0.31830988618;

pub fn deg_to_rad(deg: Float) -> Float {
    deg * (PI / 180.0)
}
