//! Combined evaluation
//!
//! Bundles everything the editor renders after a change: statistics,
//! structural issues, the score with its band, and whether the draft may be
//! published.

use serde::{Deserialize, Serialize};

use crate::draft::DraftSnapshot;
use crate::scoring::{score_draft, ScoreBand, ScoreResult, ScoringProfile};
use crate::stats::{derive_stats, ContentStats};
use crate::structure::{audit_structure, StructuralIssue};

/// Largest body, in KiB of HTML, that may be published
pub const MAX_PUBLISH_KILOBYTES: u64 = 2048;

/// Reason a draft may not be published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PublishBlocker {
    Oversized { size_kilobytes: u64 },
    StructuralIssues { count: usize },
}

impl std::fmt::Display for PublishBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishBlocker::Oversized { size_kilobytes } => write!(
                f,
                "content is {} KB, the limit is {} KB",
                size_kilobytes, MAX_PUBLISH_KILOBYTES
            ),
            PublishBlocker::StructuralIssues { count } => {
                write!(f, "{} structural issue(s) must be fixed", count)
            }
        }
    }
}

/// Publish blockers for already derived stats and issues
pub fn publish_blockers(stats: &ContentStats, issues: &[StructuralIssue]) -> Vec<PublishBlocker> {
    let mut blockers = Vec::new();
    if stats.size_kilobytes > MAX_PUBLISH_KILOBYTES {
        blockers.push(PublishBlocker::Oversized {
            size_kilobytes: stats.size_kilobytes,
        });
    }
    if !issues.is_empty() {
        blockers.push(PublishBlocker::StructuralIssues {
            count: issues.len(),
        });
    }
    blockers
}

/// Full evaluation of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub stats: ContentStats,
    pub issues: Vec<StructuralIssue>,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub band: ScoreBand,
    pub publish_blockers: Vec<PublishBlocker>,
}

impl Evaluation {
    pub fn score(&self) -> u32 {
        self.result.score
    }

    pub fn can_publish(&self) -> bool {
        self.publish_blockers.is_empty()
    }
}

/// Evaluate a draft and derive everything the editor displays.
pub fn assess(profile: &ScoringProfile, draft: &DraftSnapshot) -> Evaluation {
    let stats = derive_stats(draft);
    let issues = audit_structure(&draft.body_html);
    let result = score_draft(profile, draft, &stats, &issues);
    let band = ScoreBand::from_score(result.score);
    let publish_blockers = publish_blockers(&stats, &issues);

    Evaluation {
        stats,
        issues,
        result,
        band,
        publish_blockers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::evaluate_with;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn assess_matches_evaluate() {
        let draft = DraftSnapshot {
            title: "t".repeat(55),
            body_html: format!("<h2>A</h2><p>{}</p>", words(200)),
            body_text: words(200),
            ..Default::default()
        };
        let profile = ScoringProfile::full();
        let evaluation = assess(&profile, &draft);
        assert_eq!(evaluation.result, evaluate_with(&profile, &draft));
        assert_eq!(evaluation.stats, derive_stats(&draft));
    }

    #[test]
    fn clean_draft_can_publish() {
        let draft = DraftSnapshot {
            body_html: format!("<h2>A</h2><p>{}</p>", words(100)),
            ..Default::default()
        };
        let evaluation = assess(&ScoringProfile::full(), &draft);
        assert!(evaluation.can_publish());
        assert_eq!(evaluation.band, ScoreBand::Poor);
    }

    #[test]
    fn structural_issues_block_publishing() {
        let draft = DraftSnapshot {
            body_html: format!("<p>{}</p>", words(151)),
            ..Default::default()
        };
        let evaluation = assess(&ScoringProfile::full(), &draft);
        assert_eq!(
            evaluation.publish_blockers,
            vec![PublishBlocker::StructuralIssues { count: 1 }]
        );
    }

    #[test]
    fn omitted_end_tags_do_not_hide_structural_issues() {
        let draft = DraftSnapshot {
            body_html: format!("<ul><li>a<li>b</ul><p>{}</p>", words(400)),
            ..Default::default()
        };
        let evaluation = assess(&ScoringProfile::full(), &draft);
        assert!(!evaluation.can_publish());
        assert_eq!(
            evaluation.publish_blockers,
            vec![PublishBlocker::StructuralIssues { count: 2 }]
        );
    }

    #[test]
    fn oversized_body_blocks_publishing() {
        let stats = ContentStats {
            size_kilobytes: MAX_PUBLISH_KILOBYTES + 1,
            ..Default::default()
        };
        assert_eq!(
            publish_blockers(&stats, &[]),
            vec![PublishBlocker::Oversized {
                size_kilobytes: 2049
            }]
        );

        let at_limit = ContentStats {
            size_kilobytes: MAX_PUBLISH_KILOBYTES,
            ..Default::default()
        };
        assert!(publish_blockers(&at_limit, &[]).is_empty());
    }

    #[test]
    fn blocker_display() {
        let blocker = PublishBlocker::StructuralIssues { count: 2 };
        assert_eq!(blocker.to_string(), "2 structural issue(s) must be fixed");
    }

    #[test]
    fn evaluation_serializes_flat() {
        let evaluation = assess(&ScoringProfile::full(), &DraftSnapshot::default());
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["band"], "poor");
        assert!(json["recommendations"].is_array());
        assert_eq!(json["stats"]["word_count"], 0);
    }
}
