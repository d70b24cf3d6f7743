//! Shield Contract v3
//!
//! Fail-closed boundary for the adaptive-learning collaborator.
//!
//! ## Structure
//! - `types` - request / response / decision
//! - `reason_codes` - stable SNTL_* codes
//! - `hash` - canonical JSON + pinned SHA-256
//! - `numeric` - NaN / Infinity tolerant parsing
//! - `validate` - ordered request checks
//! - `evaluator` - state machine wrapping the scoring pipeline
//!
//! ## Usage
//! ```rust,ignore
//! let v3 = SentinelV3::default();
//! let response = v3.evaluate(&request);
//! if response.decision.blocks() { /* refuse */ }
//! ```

pub mod evaluator;
pub mod hash;
pub mod numeric;
pub mod reason_codes;
pub mod types;
pub mod validate;


pub use evaluator::{decision_for_status, EvaluationState, SentinelV3};
pub use hash::{canonical_hash_v3, canonical_hash_with_algo, canonical_json_bytes, canonical_sha256, HashError};
pub use numeric::{contains_non_finite, parse_lenient, LenientJson, NON_FINITE_MARKER};
pub use reason_codes::ReasonCode;
pub use types::{
    ContractError, Decision, Evidence, ResponseMeta, RiskBlock, SentinelV3Request,
    SentinelV3Response, ERROR_TIER,
};
pub use validate::{request_id_of, ALLOWED_TOP_LEVEL_KEYS};
