// Copyright @yucwang 2026

use super::coherence::Coherence;
use crate::math::spectrum::RGBSpectrum;

use std::fmt;

/// Generalized Stokes parameters of a wave packet: intensity `l`,
/// polarization state `l1..l3` and the packet's coherence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeneralizedRadiance {
    pub l: RGBSpectrum,
    pub l1: RGBSpectrum,
    pub l2: RGBSpectrum,
    pub l3: RGBSpectrum,
    pub coherence: Coherence,
}

impl GeneralizedRadiance {
    /// Unpolarized packet with intensity `l`.
    pub fn new(l: RGBSpectrum) -> Self {
        Self { l, ..Default::default() }
    }

    pub fn zeros(n: usize) -> Vec<Self> {
        vec![Self::default(); n]
    }

    pub fn is_polarized(&self) -> bool {
        !(self.l1.is_black() && self.l2.is_black() && self.l3.is_black())
    }
}

impl fmt::Display for GeneralizedRadiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GeneralizedRadiance[")?;
        writeln!(f, "  L = {},", self.l)?;
        writeln!(f, "  L1 = {},", self.l1)?;
        writeln!(f, "  L2 = {},", self.l2)?;
        writeln!(f, "  L3 = {},", self.l3)?;
        writeln!(f, "  coherence = {}", self.coherence.to_string().replace('\n', "\n  "))?;
        write!(f, "]")
    }
}
