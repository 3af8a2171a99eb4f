//! Scoring rules
//!
//! Each rule awards a fixed number of points when its condition holds. The
//! score is the clamped sum; recommendations are the failed rules' advice
//! followed by the structural auditor's messages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::draft::DraftSnapshot;
use crate::stats::{derive_stats, ContentStats};
use crate::structure::{audit_structure, StructuralIssue};

/// Highest score a draft can display
pub const MAX_SCORE: u32 = 100;

pub const TITLE_MIN_CHARS: usize = 50;
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const MIN_WORDS: usize = 300;
pub const MIN_TRANSITION_WORDS: usize = 5;

/// A single scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    TitleLength,
    KeywordInTitle,
    SufficientLength,
    MetaDescriptionLength,
    FeaturedImage,
    Subheading,
    Link,
    Table,
    KeywordInBody,
    Writer,
    Transitions,
}

impl Rule {
    /// Every rule, in recommendation order
    pub const ALL: [Rule; 11] = [
        Rule::TitleLength,
        Rule::KeywordInTitle,
        Rule::SufficientLength,
        Rule::MetaDescriptionLength,
        Rule::FeaturedImage,
        Rule::Subheading,
        Rule::Link,
        Rule::Table,
        Rule::KeywordInBody,
        Rule::Writer,
        Rule::Transitions,
    ];

    pub fn points(self) -> u32 {
        match self {
            Rule::TitleLength => 20,
            Rule::KeywordInTitle => 15,
            Rule::SufficientLength => 15,
            Rule::MetaDescriptionLength => 15,
            Rule::FeaturedImage => 10,
            Rule::Subheading => 10,
            Rule::Link => 5,
            Rule::Table => 5,
            Rule::KeywordInBody => 10,
            Rule::Writer => 5,
            Rule::Transitions => 5,
        }
    }

    /// Whether the draft satisfies this rule
    pub fn holds(self, draft: &DraftSnapshot, stats: &ContentStats) -> bool {
        match self {
            Rule::TitleLength => {
                (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&draft.title.chars().count())
            }
            Rule::KeywordInTitle => draft
                .keyword()
                .is_some_and(|k| contains_ignore_case(&draft.title, k)),
            Rule::SufficientLength => stats.word_count >= MIN_WORDS,
            Rule::MetaDescriptionLength => (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS)
                .contains(&draft.description().chars().count()),
            Rule::FeaturedImage => !draft.featured_image_url.is_empty(),
            Rule::Subheading => stats.heading_h2_count > 0,
            Rule::Link => stats.link_tag_count > 0,
            Rule::Table => stats.table_tag_count > 0,
            Rule::KeywordInBody => draft
                .keyword()
                .is_some_and(|k| contains_ignore_case(&draft.body_text, k)),
            Rule::Writer => !draft.writer_name.is_empty(),
            Rule::Transitions => stats.transition_word_count >= MIN_TRANSITION_WORDS,
        }
    }

    /// Advice for a draft that fails this rule
    pub fn recommendation(self, draft: &DraftSnapshot, stats: &ContentStats) -> String {
        match self {
            Rule::TitleLength => format!(
                "Title should be {}-{} characters (currently {})",
                TITLE_MIN_CHARS,
                TITLE_MAX_CHARS,
                draft.title.chars().count()
            ),
            Rule::KeywordInTitle if draft.keyword().is_none() => missing_keyword(),
            Rule::KeywordInTitle => "Include the focus keyword in the title".to_string(),
            Rule::SufficientLength => format!(
                "Content should be at least {} words (currently {})",
                MIN_WORDS, stats.word_count
            ),
            Rule::MetaDescriptionLength => format!(
                "Meta description should be {}-{} characters (currently {})",
                DESCRIPTION_MIN_CHARS,
                DESCRIPTION_MAX_CHARS,
                draft.description().chars().count()
            ),
            Rule::FeaturedImage => "Add a featured image".to_string(),
            Rule::Subheading => "Add at least one H2 subheading".to_string(),
            Rule::Link => "Add at least one link".to_string(),
            Rule::Table => "Consider adding a table to summarize key data".to_string(),
            Rule::KeywordInBody if draft.keyword().is_none() => missing_keyword(),
            Rule::KeywordInBody => "Use the focus keyword in the content".to_string(),
            Rule::Writer => "Attribute the post to a writer".to_string(),
            Rule::Transitions => format!(
                "Use more transition words (at least {}, currently {})",
                MIN_TRANSITION_WORDS, stats.transition_word_count
            ),
        }
    }
}

fn missing_keyword() -> String {
    "Set a focus keyword".to_string()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Which optional rules are in play
///
/// The table and transition rules were added to the editor over time; a
/// profile selects whether they count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub track_tables: bool,
    pub track_transitions: bool,
}

impl ScoringProfile {
    /// All rules
    pub fn full() -> Self {
        Self {
            track_tables: true,
            track_transitions: true,
        }
    }

    /// Only the rules every editor version scores
    pub fn basic() -> Self {
        Self {
            track_tables: false,
            track_transitions: false,
        }
    }

    pub fn tracks(&self, rule: Rule) -> bool {
        match rule {
            Rule::Table => self.track_tables,
            Rule::Transitions => self.track_transitions,
            _ => true,
        }
    }

    /// Rules in play, in recommendation order
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(move |rule| self.tracks(*rule))
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::full()
    }
}

/// Score plus advice for one draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0 to 100 inclusive
    pub score: u32,
    /// Ordered, without duplicates
    pub recommendations: Vec<String>,
}

/// Evaluate a draft with every rule in play.
pub fn evaluate(draft: &DraftSnapshot) -> ScoreResult {
    evaluate_with(&ScoringProfile::full(), draft)
}

/// Evaluate a draft with the given profile.
pub fn evaluate_with(profile: &ScoringProfile, draft: &DraftSnapshot) -> ScoreResult {
    let stats = derive_stats(draft);
    let issues = audit_structure(&draft.body_html);
    score_draft(profile, draft, &stats, &issues)
}

/// Score a draft from already derived stats and issues.
pub fn score_draft(
    profile: &ScoringProfile,
    draft: &DraftSnapshot,
    stats: &ContentStats,
    issues: &[StructuralIssue],
) -> ScoreResult {
    let total: u32 = profile
        .rules()
        .filter(|rule| rule.holds(draft, stats))
        .map(Rule::points)
        .sum();

    ScoreResult {
        score: total.min(MAX_SCORE),
        recommendations: recommendations(profile, draft, stats, issues),
    }
}

fn recommendations(
    profile: &ScoringProfile,
    draft: &DraftSnapshot,
    stats: &ContentStats,
    issues: &[StructuralIssue],
) -> Vec<String> {
    let failed = profile
        .rules()
        .filter(|rule| !rule.holds(draft, stats))
        .map(|rule| rule.recommendation(draft, stats));
    let structural = issues.iter().map(|issue| issue.message.clone());

    let mut seen = HashSet::new();
    failed
        .chain(structural)
        .filter(|message| seen.insert(message.clone()))
        .collect()
}

/// Display band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=49 => ScoreBand::Poor,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::Good,
        }
    }

    /// One-line verdict shown under the progress bar
    pub fn verdict(self) -> &'static str {
        match self {
            ScoreBand::Poor => "Needs improvement. Follow the recommendations below.",
            ScoreBand::Fair => "Good, but could be improved.",
            ScoreBand::Good => "Excellent! Your post is well optimized for SEO.",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Poor => write!(f, "poor"),
            ScoreBand::Fair => write!(f, "fair"),
            ScoreBand::Good => write!(f, "good"),
        }
    }
}
