// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFContext, BSDFValue, BSDF};
use crate::core::computation_node::{ComputationNode, next_node_id};
use crate::core::interaction::SurfaceInteraction;
use crate::math::constants::{ INV_PI, Vector3f };
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;

/// Lambertian reflector, `rho / pi * cos(theta_o)` when both directions lie
/// above the surface and zero otherwise.
pub struct LambertianDiffuseBSDF {
    id: String,
    color: RGBSpectrum
}

impl ComputationNode for LambertianDiffuseBSDF {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("diffuse {} (reflectance {})", self.id, self.color)
    }
}

impl BSDF for LambertianDiffuseBSDF {
    fn eval(&self, _ctx: &BSDFContext, si: &SurfaceInteraction, wo: &Vector3f) -> BSDFValue {
        let cos_theta_i = Frame::cos_theta(&si.wi());
        let cos_theta_o = Frame::cos_theta(wo);
        if cos_theta_i <= 0.0 || cos_theta_o <= 0.0 {
            return RGBSpectrum::default();
        }

        self.color * (INV_PI * cos_theta_o)
    }
}

impl LambertianDiffuseBSDF {
    pub fn new(rgb: RGBSpectrum, id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| next_node_id("diffuse")),
            color: rgb,
        }
    }
}
