//! ccopy Generator Core
//!
//! Decides, per class, whether to synthesize a copy constructor that copies
//! disjoint groups of fields on separate threads, and emits it.
//!
//! # Pipeline
//!
//! ```text
//! DeclarationSource
//!     │
//!     ▼
//! check_eligibility ──► skip (user copy ctor / forward decl / no marker)
//!     │
//!     ▼
//! partition ──► GroupPartition (classify each field)
//!     │
//!     ▼
//! should_generate_concurrent_body ──► skip annotation (< 2 groups)
//!     │
//!     ▼
//! generate ──► GeneratedBody ──► TextEmitter
//! ```
//!
//! Every step is a total, deterministic function of its input. The only
//! effects are tracing events and the text handed to the emitter.

mod classify;
mod config;
mod eligibility;
mod generate;
mod inject;
mod partition;
mod plan;

pub use classify::classify;
pub use config::{InjectConfig, MarkerMatch, DEFAULT_MARKER};
pub use eligibility::{carries_marker, check_eligibility, is_eligible, Eligibility};
pub use generate::generate;
pub use inject::{
    inject, inject_with_progress, ClassOutcome, ClassReport, InjectionReport, SKIP_ANNOTATION,
};
pub use partition::partition;
pub use plan::{should_generate_concurrent_body, MIN_CONCURRENT_GROUPS};
