//! Model Module - Optional ML contribution
//!
//! Artifact verification is separate from inference so a model can be
//! swapped without touching the scoring path.
//!
//! Load failure is fail-open for the v2 score (heuristics only).
//! The v3 contract layer never relaxes on model state.

pub mod loader;
pub mod inference;

// Re-export common types
pub use loader::{compute_file_hash, load_and_verify_model, LoadedModel, ModelError};
pub use inference::run_model_inference;
