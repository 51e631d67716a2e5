//! Caregiver text triage.
//!
//! Pipeline: normalize → match (emergency, urgent, topic, medication)
//! → resolve urgency tier → assemble guidance → export.
//!
//! Every stage is a pure function over its input and the static rule
//! tables in [`patterns`]. Nothing here holds state or performs I/O.

pub mod assembler;
pub mod export;
pub mod normalize;
pub mod orchestrator;
pub mod patterns;
pub mod resolver;
pub mod types;

pub use export::export_report;
pub use orchestrator::{classify, match_text, RuleBasedResponder};
pub use types::{
    MatchResult, Responder, ResponseBundle, SeverityTag, SuggestionItem, Topic, TriageError,
    UrgencyTier,
};
