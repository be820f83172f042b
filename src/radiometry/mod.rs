// Copyright @yucwang 2026

pub mod coherence;
pub mod generalized_radiance;
pub mod interference;
