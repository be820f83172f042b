// Copyright @yucwang 2026

use crate::math::constants::{ Float, Matrix2f, TWO_PI };

use std::fmt;

/// Spatial coherence of a wave packet: a diffusivity (shape) matrix in the
/// local XY frame plus the optical path length travelled from the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coherence {
    /// Angular spread of the packet around its mean propagation direction.
    pub dmat: Matrix2f,
    /// Optical path length from the source, in meters.
    pub opl: Float,
}

impl Default for Coherence {
    fn default() -> Self {
        Self { dmat: Matrix2f::zeros(), opl: 0.0 }
    }
}

impl Coherence {
    pub fn isotropic(diffusivity: Float, l: Float) -> Self {
        Self { dmat: Matrix2f::new(diffusivity, 0.0, 0.0, diffusivity), opl: l }
    }

    pub fn anisotropic(dmat: Matrix2f, l: Float) -> Self {
        Self { dmat, opl: l }
    }

    pub fn zeros(n: usize) -> Vec<Self> {
        vec![Self::default(); n]
    }

    /// Distance travelled from the source in millimeters.
    pub fn rmm(&self) -> Float {
        self.opl * 1e3
    }

    pub fn propagate(&mut self, rd: Float) {
        self.opl += rd;
    }

    /// Inverse coherence matrix for wavenumber `k`.
    pub fn inv_coherence_matrix(&self, k: Float) -> Matrix2f {
        self.dmat * (k / (TWO_PI * self.rmm()))
    }

    /// Inverse coherence matrix without the wavenumber scaling.
    pub fn inv_coherence_matrix_unscaled(&self) -> Matrix2f {
        self.dmat * (1.0 / self.rmm())
    }

    pub fn inv_coherence_det(&self, k: Float) -> Float {
        self.inv_coherence_matrix(k).determinant()
    }

    pub fn inv_coherence_det_unscaled(&self) -> Float {
        self.inv_coherence_matrix_unscaled().determinant()
    }

    /// Change of frame, `dmat <- m^T * dmat * m`.
    pub fn transform(&mut self, m: &Matrix2f) {
        self.dmat = m.transpose() * self.dmat * m;
    }
}

impl fmt::Display for Coherence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coherence[")?;
        writeln!(f, "  dmat = [[{}, {}], [{}, {}]],",
                 self.dmat[(0, 0)], self.dmat[(0, 1)], self.dmat[(1, 0)], self.dmat[(1, 1)])?;
        writeln!(f, "  opl = {}", self.opl)?;
        write!(f, "]")
    }
}
