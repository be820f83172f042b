// Copyright @yucwang 2026

use super::{DiagramError, DispersionDiagram};
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;

/// Dispersion diagram of a diffraction grating. The scattering model is not
/// yet specified, so generating it draws nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GratingDispersion {
    inv_period: Option<Float>,
}

impl GratingDispersion {
    pub fn new(inv_period: Option<Float>) -> Self {
        Self { inv_period }
    }

    pub fn inv_period(&self) -> Option<Float> {
        self.inv_period
    }
}

impl DispersionDiagram for GratingDispersion {
    fn name(&self) -> &'static str {
        "grating dispersion"
    }

    fn generate(&self) -> Result<Option<Bitmap>, DiagramError> {
        log::debug!("Grating dispersion (inv_period = {:?}) is not yet specified, skipping.", self.inv_period);
        Ok(None)
    }
}
