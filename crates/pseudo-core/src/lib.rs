//! # pseudo-core
//!
//! Foundation crate for the pseudonymization engine.
//! Defines the span and statistics model, the tagger seam, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PseudoConfig;
pub use errors::{PseudoError, PseudoResult};
pub use models::{
    DocSummary, EntityCategory, EntitySpan, OutputType, PoolExhaustionNotice, RawSpan,
    RunningStats, SentenceInput, SentenceRecord,
};
pub use traits::IEntityTagger;
