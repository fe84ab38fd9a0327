//! # pseudo-engine
//!
//! Two-pass pseudonymization of recognizer output:
//! normalize spans → resolve identities → plan tokens, then render each
//! sentence through an offset-safe edit plan.
//! [`Pipeline`] wires a tagger and the shared statistics recorder around it.

pub mod conll;
pub mod context;
pub mod edit_plan;
pub mod engine;
pub mod normalizer;
pub mod pipeline;
pub mod planner;
pub mod pool;
pub mod renderer;
pub mod resolver;

pub use context::DocumentContext;
pub use engine::{DocumentOutput, PseudoEngine};
pub use pipeline::{Pipeline, PipelineOutput};
pub use planner::{PseudoMapping, SubstitutionPlan};
pub use pool::ReplacementPool;
pub use resolver::{IdentityKey, IdentityResolver, Resolution};
