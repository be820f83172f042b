// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFContext, BSDFValue, BSDF};
use crate::core::computation_node::{ComputationNode, next_node_id};
use crate::core::interaction::SurfaceInteraction;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Pass-through interface. Light only continues along `-wi`, a delta
/// direction, so every evaluation of a finite direction set is zero.
pub struct NullBSDF {
    id: String,
}

impl NullBSDF {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| next_node_id("null")),
        }
    }
}

impl ComputationNode for NullBSDF {
    fn id(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("null {}", self.id)
    }
}

impl BSDF for NullBSDF {
    fn is_null(&self) -> bool {
        true
    }

    fn eval(&self, _ctx: &BSDFContext, _si: &SurfaceInteraction, _wo: &Vector3f) -> BSDFValue {
        RGBSpectrum::default()
    }
}

#[cfg(test)]
mod tests {
    use super::NullBSDF;
    use crate::core::bsdf::{BSDFContext, BSDF};
    use crate::core::computation_node::ComputationNode;
    use crate::core::interaction::SurfaceInteraction;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_eval_is_zero_even_opposite_wi() {
        let bsdf = NullBSDF::new(Some(String::from("glass_interface")));
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        let si = SurfaceInteraction::with_local_wi(wi);
        assert!(bsdf.eval(&BSDFContext::default(), &si, &-wi).is_black());
        assert!(bsdf.eval(&BSDFContext::default(), &si, &wi).is_black());
        assert_eq!(bsdf.id(), "glass_interface");
        assert_eq!(bsdf.describe(), "null glass_interface");
    }
}
