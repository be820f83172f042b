// Copyright @yucwang 2026

pub mod lambertian_diffuse;
pub mod null;

use crate::core::bsdf::BSDF;
use crate::math::spectrum::RGBSpectrum;

use self::lambertian_diffuse::LambertianDiffuseBSDF;
use self::null::NullBSDF;

use std::fmt;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum MaterialError {
    InvalidParameter { name: &'static str, value: String },
}

impl fmt::Display for MaterialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialError::InvalidParameter { name, value } => {
                write!(f, "invalid material parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for MaterialError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffuseParams {
    reflectance: RGBSpectrum,
}

// Same grey as the usual renderer default.
impl Default for DiffuseParams {
    fn default() -> Self {
        Self { reflectance: RGBSpectrum::splat(0.5) }
    }
}

impl DiffuseParams {
    pub fn reflectance(&self) -> RGBSpectrum {
        self.reflectance
    }
}

/// Material kinds the evaluator understands, each with its own checked
/// parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialDescription {
    Diffuse(DiffuseParams),
    Null,
}

impl MaterialDescription {
    /// Reflectance channels must be finite and within `[0, 1]`.
    pub fn diffuse(reflectance: RGBSpectrum) -> Result<Self, MaterialError> {
        let valid = (0..3).all(|i| reflectance[i].is_finite() && (0.0..=1.0).contains(&reflectance[i]));
        if !valid {
            return Err(MaterialError::InvalidParameter {
                name: "reflectance",
                value: reflectance.to_string(),
            });
        }

        Ok(MaterialDescription::Diffuse(DiffuseParams { reflectance }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MaterialDescription::Diffuse(_) => "diffuse",
            MaterialDescription::Null => "null",
        }
    }

    pub fn instantiate(&self) -> Arc<dyn BSDF> {
        match self {
            MaterialDescription::Diffuse(params) => Arc::new(LambertianDiffuseBSDF::new(params.reflectance, None)),
            MaterialDescription::Null => Arc::new(NullBSDF::new(None)),
        }
    }
}
