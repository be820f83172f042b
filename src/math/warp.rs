// Copyright @yucwang 2023

use super::constants::{ Float, Vector3f };

use std::fmt;

#[derive(Debug, PartialEq)]
pub struct BroadcastError {
    pub theta_len: usize,
    pub phi_len: usize,
}

impl fmt::Display for BroadcastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot broadcast {} elevations against {} azimuths", self.theta_len, self.phi_len)
    }
}

impl std::error::Error for BroadcastError {}

/// Map an elevation `theta` (from +z) and an azimuth `phi` (from +x) to a
/// unit direction.
pub fn spherical_direction(theta: Float, phi: Float) -> Vector3f {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector3f::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Element-wise `spherical_direction`. A single-element input is broadcast
/// against the other one.
pub fn spherical_directions(theta: &[Float], phi: &[Float]) -> Result<Vec<Vector3f>, BroadcastError> {
    let n = match (theta.len(), phi.len()) {
        (a, b) if a == b => a,
        (1, b) => b,
        (a, 1) => a,
        (a, b) => return Err(BroadcastError { theta_len: a, phi_len: b }),
    };

    let at = |values: &[Float], i: usize| if values.len() == 1 { values[0] } else { values[i] };

    Ok((0..n).map(|i| spherical_direction(at(theta, i), at(phi, i))).collect())
}

/// Inverse of `spherical_direction` for unit vectors, `phi` in `[0, 2pi)`.
pub fn direction_to_spherical(v: &Vector3f) -> (Float, Float) {
    let theta = v.z.max(-1.0).min(1.0).acos();
    let mut phi = v.y.atan2(v.x);
    if phi < 0.0 {
        phi += 2. * super::constants::PI;
    }

    (theta, phi)
}
