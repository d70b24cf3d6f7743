//! Inference - deterministic scorer over a verified model
//!
//! Never fails for a numeric feature set; output always in [0, 1].

use super::loader::LoadedModel;
use crate::logic::features::{FeatureSet, MODEL_SCORE};

/// Score the feature set.
///
/// Mean of the feature values, each clamped to [0, 1]; non-finite values
/// count as 0. `model_score` itself is never an input.
pub fn run_model_inference(model: &LoadedModel, features: &FeatureSet) -> f64 {
    let (sum, count) = features
        .iter()
        .filter(|(name, _)| *name != MODEL_SCORE)
        .map(|(_, v)| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 })
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));

    let score = if count > 0 { sum / count as f64 } else { 0.0 };

    log::debug!("model {} scored {:.4} over {} features", model.hash(), score, count);
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::load_and_verify_model;

    fn model() -> (tempfile::TempDir, LoadedModel) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.bin");
        std::fs::write(&path, b"hello").unwrap();
        let model = load_and_verify_model(&path, None).unwrap();
        (dir, model)
    }

    #[test]
    fn test_bounded_output() {
        let (_dir, m) = model();
        let f = FeatureSet::new().with("x", 1.0);
        let s = run_model_inference(&m, &f);
        assert!((0.0..=1.0).contains(&s));

        let wild = FeatureSet::new()
            .with("a", 50.0)
            .with("b", -3.0)
            .with("c", f64::NAN);
        let s = run_model_inference(&m, &wild);
        assert!((0.0..=1.0).contains(&s));
        assert!((s - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_self_reference() {
        let (_dir, m) = model();
        assert_eq!(run_model_inference(&m, &FeatureSet::new()), 0.0);

        let only_model = FeatureSet::new().with(MODEL_SCORE, 1.0);
        assert_eq!(run_model_inference(&m, &only_model), 0.0);
    }
}
