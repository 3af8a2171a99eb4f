//! MaxWritings content quality scorer
//!
//! Scores a blog draft for search-engine friendliness and lists what to fix.
//! Everything here is a pure function of a [`DraftSnapshot`]: no I/O, no
//! shared state, safe to call on every keystroke.
//!
//! - `stats`: word, size, tag and transition-word counts
//! - `structure`: overlong section and paragraph detection
//! - `scoring`: the point rules, score clamping and recommendations
//! - `evaluation`: everything bundled, plus the publish gate

pub mod draft;
pub mod evaluation;
pub mod scoring;
pub mod stats;
pub mod structure;
pub mod text;
pub mod transitions;

pub use draft::DraftSnapshot;
pub use evaluation::{assess, publish_blockers, Evaluation, PublishBlocker, MAX_PUBLISH_KILOBYTES};
pub use scoring::{
    evaluate, evaluate_with, score_draft, Rule, ScoreBand, ScoreResult, ScoringProfile, MAX_SCORE,
};
pub use stats::{derive_stats, ContentStats};
pub use structure::{audit_structure, IssueKind, StructuralIssue};
pub use text::{html_to_text, word_count};
