// Copyright @yucwang 2026

use super::{DiagramError, DispersionDiagram};
use crate::core::angle_grid::{AngleGrid, SweepAxis};
use crate::core::bsdf::BSDFValue;
use crate::core::evaluator::{split_channels, EvaluationAdapter};
use crate::materials::{DiffuseParams, MaterialDescription};
use crate::math::bitmap::Bitmap;
use crate::math::constants::{deg_to_rad, Float, HALF_PI};
use crate::math::warp::spherical_direction;
use crate::plot::polar::PolarPlot;

#[derive(Clone, Debug)]
pub struct DiffuseDispersionSettings {
    /// Incident elevation in radians.
    pub incident_elevation: Float,
    /// Incident azimuth in radians.
    pub incident_azimuth: Float,
    pub resolution: usize,
    pub sweep: SweepAxis,
    /// Elevation for an azimuth sweep, azimuth for an elevation sweep.
    pub fixed_angle: Float,
    pub material: MaterialDescription,
    pub plot: PolarPlot,
}

impl Default for DiffuseDispersionSettings {
    fn default() -> Self {
        Self {
            incident_elevation: deg_to_rad(45.0),
            incident_azimuth: 0.0,
            resolution: 400,
            sweep: SweepAxis::Azimuth,
            fixed_angle: HALF_PI,
            material: MaterialDescription::Diffuse(DiffuseParams::default()),
            plot: PolarPlot::default(),
        }
    }
}

impl DiffuseDispersionSettings {
    pub fn with_sweep(mut self, sweep: SweepAxis) -> Self {
        self.sweep = sweep;
        self.fixed_angle = match sweep {
            SweepAxis::Azimuth => HALF_PI,
            SweepAxis::Elevation => 0.0,
        };
        self
    }
}

/// Grid angles and the colour sample for each of them, in grid order.
#[derive(Clone, Debug)]
pub struct DispersionSamples {
    pub angles: Vec<Float>,
    pub values: Vec<BSDFValue>,
}

pub struct DiffuseDispersion {
    settings: DiffuseDispersionSettings,
    evaluator: EvaluationAdapter,
}

impl DiffuseDispersion {
    pub fn new(settings: DiffuseDispersionSettings, evaluator: EvaluationAdapter) -> Self {
        Self { settings, evaluator }
    }

    pub fn settings(&self) -> &DiffuseDispersionSettings {
        &self.settings
    }

    pub fn sample(&self) -> Result<DispersionSamples, DiagramError> {
        let s = &self.settings;
        let grid = AngleGrid::new(s.sweep, s.resolution, s.fixed_angle)?;
        let wi = spherical_direction(s.incident_elevation, s.incident_azimuth);
        let wo = grid.directions();

        log::info!("Evaluating {} material over {} outgoing directions.", s.material.kind(), wo.len());
        let values = self.evaluator.evaluate(&s.material, wi, &wo)?;

        Ok(DispersionSamples { angles: grid.angles().to_vec(), values })
    }
}

impl DispersionDiagram for DiffuseDispersion {
    fn name(&self) -> &'static str {
        "diffuse dispersion"
    }

    fn generate(&self) -> Result<Option<Bitmap>, DiagramError> {
        let samples = self.sample()?;
        let (red, green, blue) = split_channels(&samples.values);
        let bitmap = self.settings.plot.render(&samples.angles, &red, &green, &blue)?;

        Ok(Some(bitmap))
    }
}
