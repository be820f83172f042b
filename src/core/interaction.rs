// Copyright @yucwang 2023

use crate::math::constants::Vector3f;
use crate::math::frame::Frame;

/// Minimal surface record handed to a BSDF: the shading frame and the
/// incident direction expressed in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceInteraction {
    sh_frame: Frame,
    wi: Vector3f,
}

impl Default for SurfaceInteraction {
    fn default() -> Self {
        Self { sh_frame: Frame::default(), wi: Vector3f::zeros() }
    }
}

impl SurfaceInteraction {
    /// `wi` is given in world space around a surface with normal `sh_normal`.
    pub fn new(sh_normal: Vector3f, wi: Vector3f) -> Self {
        let sh_frame = Frame::from_normal(sh_normal.normalize());
        Self { sh_frame, wi: sh_frame.to_local(wi) }
    }

    /// Surface facing +z, the world frame is the local frame.
    pub fn with_local_wi(wi: Vector3f) -> Self {
        Self { sh_frame: Frame::default(), wi }
    }

    pub fn wi(&self) -> Vector3f {
        self.wi
    }

    pub fn sh_frame(&self) -> &Frame {
        &self.sh_frame
    }

    pub fn to_local(&self, v: Vector3f) -> Vector3f {
        self.sh_frame.to_local(v)
    }

    pub fn to_world(&self, v: Vector3f) -> Vector3f {
        self.sh_frame.from_local(v)
    }
}

#[cfg(test)]
mod tests {
    use super::SurfaceInteraction;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_tilted_surface_local_wi() {
        let n = Vector3f::new(1.0, 0.0, 0.0);
        let si = SurfaceInteraction::new(n, n);
        assert!((si.wi() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
        assert!((si.to_world(si.wi()) - n).norm() < 1e-5);
    }

    #[test]
    fn test_local_wi_is_kept() {
        let wi = Vector3f::new(0.6, 0.0, 0.8);
        let si = SurfaceInteraction::with_local_wi(wi);
        assert_eq!(si.wi(), wi);
        assert_eq!(si.to_local(wi), wi);
    }
}
