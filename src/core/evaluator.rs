// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFContext, BSDFValue, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceInteraction;
use crate::materials::MaterialDescription;
use crate::math::constants::{Float, Vector3f};

use std::fmt;
use std::thread;

#[derive(Debug, PartialEq)]
pub enum EvaluatorError {
    Unavailable(String),
    BatchSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluatorError::Unavailable(reason) => write!(f, "evaluator unavailable: {}", reason),
            EvaluatorError::BatchSizeMismatch { expected, actual } => {
                write!(f, "evaluator returned {} values for {} directions", actual, expected)
            }
        }
    }
}

impl std::error::Error for EvaluatorError {}

/// Execution variant of the evaluator backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    #[value(name = "scalar_rgb")]
    ScalarRgb,
    #[value(name = "llvm_ad_rgb")]
    LlvmAdRgb,
    #[value(name = "cuda_ad_rgb")]
    CudaAdRgb,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::ScalarRgb => "scalar_rgb",
            Variant::LlvmAdRgb => "llvm_ad_rgb",
            Variant::CudaAdRgb => "cuda_ad_rgb",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluatorConfig {
    pub variant: Variant,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { variant: Variant::ScalarRgb }
    }
}

/// Boundary to whatever evaluates BSDFs. One call evaluates a whole batch;
/// output index `i` belongs to `wo[i]`.
pub trait EvalBackend {
    fn eval_batch(&self,
                  bsdf: &dyn BSDF,
                  ctx: &BSDFContext,
                  si: &SurfaceInteraction,
                  wo: &[Vector3f]) -> Result<Vec<BSDFValue>, EvaluatorError>;
}

/// CPU backend evaluating BSDFs in-process.
pub struct ReferenceBackend {
    config: EvaluatorConfig,
    thread_count: usize,
}

impl ReferenceBackend {
    pub fn new(config: EvaluatorConfig) -> Self {
        let thread_count = match config.variant {
            Variant::LlvmAdRgb => thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            _ => 1,
        };
        log::debug!("Reference backend with variant {} on {} thread(s).", config.variant, thread_count);

        Self { config, thread_count }
    }

    pub fn with_threads(config: EvaluatorConfig, thread_count: usize) -> Self {
        Self { config, thread_count: thread_count.max(1) }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
}

impl EvalBackend for ReferenceBackend {
    fn eval_batch(&self,
                  bsdf: &dyn BSDF,
                  ctx: &BSDFContext,
                  si: &SurfaceInteraction,
                  wo: &[Vector3f]) -> Result<Vec<BSDFValue>, EvaluatorError> {
        match self.config.variant {
            Variant::CudaAdRgb => {
                return Err(EvaluatorError::Unavailable(
                    format!("variant {} has no device backend in this build", self.config.variant)));
            }
            Variant::ScalarRgb => {
                return Ok(wo.iter().map(|w| bsdf.eval(ctx, si, w)).collect());
            }
            Variant::LlvmAdRgb => {}
        }

        if wo.is_empty() {
            return Ok(Vec::new());
        }

        let chunk_size = (wo.len() + self.thread_count - 1) / self.thread_count;
        let mut output = Vec::with_capacity(wo.len());
        thread::scope(|scope| {
            let handles: Vec<_> = wo
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || {
                    chunk.iter().map(|w| bsdf.eval(ctx, si, w)).collect::<Vec<_>>()
                }))
                .collect();

            // Joining in spawn order keeps the batch ordering.
            for handle in handles {
                match handle.join() {
                    Ok(values) => output.extend(values),
                    Err(_) => return Err(EvaluatorError::Unavailable(String::from("evaluation worker panicked"))),
                }
            }
            Ok(())
        })?;

        Ok(output)
    }
}

/// Evaluates a material for one incident direction over a batch of
/// outgoing directions.
pub struct EvaluationAdapter {
    backend: Box<dyn EvalBackend>,
    ctx: BSDFContext,
}

impl EvaluationAdapter {
    pub fn new(backend: Box<dyn EvalBackend>) -> Self {
        Self { backend, ctx: BSDFContext::default() }
    }

    pub fn from_config(config: EvaluatorConfig) -> Self {
        Self::new(Box::new(ReferenceBackend::new(config)))
    }

    pub fn evaluate(&self,
                    material: &MaterialDescription,
                    wi: Vector3f,
                    wo: &[Vector3f]) -> Result<Vec<BSDFValue>, EvaluatorError> {
        let bsdf = material.instantiate();
        let si = SurfaceInteraction::with_local_wi(wi);
        log::debug!("Evaluating {} for {} outgoing directions.", bsdf.describe(), wo.len());

        let values = self.backend.eval_batch(bsdf.as_ref(), &self.ctx, &si, wo)?;
        if values.len() != wo.len() {
            return Err(EvaluatorError::BatchSizeMismatch { expected: wo.len(), actual: values.len() });
        }

        Ok(values)
    }
}

/// Split colour samples into per-channel sequences for plotting.
pub fn split_channels(values: &[BSDFValue]) -> (Vec<Float>, Vec<Float>, Vec<Float>) {
    let red = values.iter().map(|v| v.r()).collect();
    let green = values.iter().map(|v| v.g()).collect();
    let blue = values.iter().map(|v| v.b()).collect();

    (red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::angle_grid::AngleGrid;
    use crate::math::constants::{deg_to_rad, INV_PI};
    use crate::math::spectrum::RGBSpectrum;
    use crate::math::warp::spherical_direction;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {} ≈ {}", a, b);
    }

    fn diffuse() -> MaterialDescription {
        MaterialDescription::diffuse(RGBSpectrum::new(0.3, 0.5, 0.7)).unwrap()
    }

    /// Encodes the input position into the output so ordering is observable.
    struct IndexEchoBackend {
        calls: Rc<Cell<usize>>,
    }

    impl EvalBackend for IndexEchoBackend {
        fn eval_batch(&self,
                      _bsdf: &dyn BSDF,
                      _ctx: &BSDFContext,
                      _si: &SurfaceInteraction,
                      wo: &[Vector3f]) -> Result<Vec<BSDFValue>, EvaluatorError> {
            self.calls.set(self.calls.get() + 1);
            Ok(wo.iter().map(|w| RGBSpectrum::new(w.x, w.y, w.z)).collect())
        }
    }

    struct ShortBackend;

    impl EvalBackend for ShortBackend {
        fn eval_batch(&self,
                      _bsdf: &dyn BSDF,
                      _ctx: &BSDFContext,
                      _si: &SurfaceInteraction,
                      wo: &[Vector3f]) -> Result<Vec<BSDFValue>, EvaluatorError> {
            Ok(vec![RGBSpectrum::default(); wo.len().saturating_sub(1)])
        }
    }

    #[test]
    fn test_backend_called_once_per_batch() {
        let calls = Rc::new(Cell::new(0));
        let adapter = EvaluationAdapter::new(Box::new(IndexEchoBackend { calls: Rc::clone(&calls) }));
        let grid = AngleGrid::azimuthal(10, 1.0).unwrap().directions();
        let values = adapter.evaluate(&diffuse(), Vector3f::new(0.0, 0.0, 1.0), &grid).unwrap();
        assert_eq!(values.len(), 20);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_adapter_keeps_fake_backend_order() {
        let adapter = EvaluationAdapter::new(Box::new(IndexEchoBackend { calls: Rc::new(Cell::new(0)) }));
        let wo = vec![Vector3f::new(0.1, 0.2, 0.3), Vector3f::new(0.4, 0.5, 0.6)];
        let values = adapter.evaluate(&diffuse(), Vector3f::new(0.0, 0.0, 1.0), &wo).unwrap();
        assert_eq!(values[0], RGBSpectrum::new(0.1, 0.2, 0.3));
        assert_eq!(values[1], RGBSpectrum::new(0.4, 0.5, 0.6));
    }

    #[test]
    fn test_adapter_rejects_short_batch() {
        let adapter = EvaluationAdapter::new(Box::new(ShortBackend));
        let wo = vec![Vector3f::new(0.0, 0.0, 1.0); 3];
        let err = adapter.evaluate(&diffuse(), Vector3f::new(0.0, 0.0, 1.0), &wo).unwrap_err();
        assert_eq!(err, EvaluatorError::BatchSizeMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_cuda_variant_is_unavailable() {
        let adapter = EvaluationAdapter::from_config(EvaluatorConfig { variant: Variant::CudaAdRgb });
        let wo = vec![Vector3f::new(0.0, 0.0, 1.0)];
        let err = adapter.evaluate(&diffuse(), Vector3f::new(0.0, 0.0, 1.0), &wo).unwrap_err();
        assert!(matches!(err, EvaluatorError::Unavailable(_)));
    }

    #[test]
    fn test_parallel_variant_matches_scalar() {
        let wi = spherical_direction(deg_to_rad(45.0), 0.0);
        let wo = AngleGrid::elevation_sweep(37, 0.0).unwrap().directions();
        let scalar = EvaluationAdapter::from_config(EvaluatorConfig { variant: Variant::ScalarRgb });
        let parallel = EvaluationAdapter::new(Box::new(
            ReferenceBackend::with_threads(EvaluatorConfig { variant: Variant::LlvmAdRgb }, 5)));

        let a = scalar.evaluate(&diffuse(), wi, &wo).unwrap();
        let b = parallel.evaluate(&diffuse(), wi, &wo).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_diffuse_values_follow_cosine_law() {
        let adapter = EvaluationAdapter::from_config(EvaluatorConfig::default());
        let wi = spherical_direction(deg_to_rad(45.0), 0.0);
        let wo = vec![Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0)];
        let values = adapter.evaluate(&diffuse(), wi, &wo).unwrap();
        assert_close(values[0].r(), 0.3 * INV_PI);
        assert_close(values[0].g(), 0.5 * INV_PI);
        assert_close(values[0].b(), 0.7 * INV_PI);
        assert!(values[1].is_black());
    }

    #[test]
    fn test_split_channels() {
        let values = vec![RGBSpectrum::new(1.0, 2.0, 3.0), RGBSpectrum::new(4.0, 5.0, 6.0)];
        let (r, g, b) = split_channels(&values);
        assert_eq!(r, vec![1.0, 4.0]);
        assert_eq!(g, vec![2.0, 5.0]);
        assert_eq!(b, vec![3.0, 6.0]);
    }

    proptest! {
        #[test]
        fn prop_output_length_matches_grid(res in 1usize..300, threads in 1usize..9) {
            let wo = AngleGrid::azimuthal(res, 0.7).unwrap().directions();
            let adapter = EvaluationAdapter::new(Box::new(
                ReferenceBackend::with_threads(EvaluatorConfig { variant: Variant::LlvmAdRgb }, threads)));
            let values = adapter.evaluate(&diffuse(), Vector3f::new(0.0, 0.0, 1.0), &wo).unwrap();
            prop_assert_eq!(values.len(), wo.len());
        }

        #[test]
        fn prop_permutation_is_preserved(
            perm in (2usize..64).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        ) {
            let wi = spherical_direction(deg_to_rad(30.0), 0.4);
            let wo: Vec<Vector3f> = (0..perm.len())
                .map(|i| spherical_direction(0.05 * i as f32, 0.3 * i as f32))
                .collect();

            let permuted: Vec<Vector3f> = perm.iter().map(|&i| wo[i]).collect();

            let adapter = EvaluationAdapter::new(Box::new(
                ReferenceBackend::with_threads(EvaluatorConfig { variant: Variant::LlvmAdRgb }, 3)));
            let base = adapter.evaluate(&diffuse(), wi, &wo).unwrap();
            let shuffled = adapter.evaluate(&diffuse(), wi, &permuted).unwrap();
            for (k, &i) in perm.iter().enumerate() {
                prop_assert_eq!(shuffled[k], base[i]);
            }
        }
    }
}
