// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    x: Vector3f,
    y: Vector3f,
    z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    /// Build an orthonormal frame around a normal (Duff et al. 2017).
    pub fn from_normal(n: Vector3f) -> Frame {
        let sign = 1.0f32.copysign(n.z);
        let a = -1.0 / (sign + n.z);
        let b = n.x * n.y * a;
        let x = Vector3f::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
        let y = Vector3f::new(b, sign + n.y * n.y * a, -n.y);
        Frame { x, y, z: n }
    }

    pub fn to_local(&self, v: Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }

    // Local-frame helpers, the normal is +z.
    pub fn cos_theta(v: &Vector3f) -> Float {
        v.z
    }
}
