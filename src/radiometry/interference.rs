// Copyright @yucwang 2026

use crate::math::constants::{ Complexf, Float };

/// Interference term of a wave travelling `dist` through a medium of index
/// `eta` with wavenumber `k`, after a reflection with complex amplitude `r`.
pub fn phase_shift(eta: Float, dist: Float, k: Float, r: &Complexf) -> Float {
    (dist * k * eta + r.arg()).sin()
}
