// Copyright @yucwang 2026

use crate::math::constants::{ Float, Vector3f, TWO_PI };
use crate::math::warp::spherical_direction;

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GridError {
    InvalidResolution(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidResolution(res) => write!(f, "invalid grid resolution {}", res),
        }
    }
}

impl std::error::Error for GridError {}

/// Which spherical coordinate the grid sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SweepAxis {
    /// Sweep azimuth at a fixed elevation.
    Azimuth,
    /// Sweep elevation through the plane at a fixed azimuth.
    Elevation,
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: Float, end: Float, n: usize) -> Vec<Float> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as Float;
            (0..n).map(|i| start + (end - start) * (i as Float / last)).collect()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AngleGrid {
    axis: SweepAxis,
    fixed: Float,
    angles: Vec<Float>,
}

impl AngleGrid {
    pub fn new(axis: SweepAxis, res: usize, fixed: Float) -> Result<Self, GridError> {
        let samples = match res.checked_mul(2) {
            Some(n) if n > 0 => n,
            _ => return Err(GridError::InvalidResolution(res)),
        };

        let angles = linspace(0.0, TWO_PI, samples);
        log::debug!("Built {:?} grid with {} samples, fixed angle {}.", axis, angles.len(), fixed);

        Ok(Self { axis, fixed, angles })
    }

    pub fn azimuthal(res: usize, elevation: Float) -> Result<Self, GridError> {
        Self::new(SweepAxis::Azimuth, res, elevation)
    }

    pub fn elevation_sweep(res: usize, azimuth: Float) -> Result<Self, GridError> {
        Self::new(SweepAxis::Elevation, res, azimuth)
    }

    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    pub fn fixed(&self) -> Float {
        self.fixed
    }

    pub fn angles(&self) -> &[Float] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Outgoing directions in grid order.
    pub fn directions(&self) -> Vec<Vector3f> {
        self.angles
            .iter()
            .map(|&angle| match self.axis {
                SweepAxis::Azimuth => spherical_direction(self.fixed, angle),
                SweepAxis::Elevation => spherical_direction(angle, self.fixed),
            })
            .collect()
    }
}
