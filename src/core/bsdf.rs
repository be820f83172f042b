// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceInteraction;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

// Definitions of types used in BSDF eval processes
pub type BSDFValue = RGBSpectrum;

/// Per-call evaluation state. Only radiance transport is evaluated, so it
/// carries nothing yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BSDFContext;

pub trait BSDF: ComputationNode + Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn is_null(&self) -> bool {
        false
    }

    /// Evaluate the cosine-weighted BSDF for the incident direction stored
    /// in `si` and a local outgoing direction `wo`.
    fn eval(&self, ctx: &BSDFContext, si: &SurfaceInteraction, wo: &Vector3f) -> BSDFValue;
}
