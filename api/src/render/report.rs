//! Markdown SEO report
//!
//! Renders an evaluation the way the editor sidebar shows it.

use maxwritings_seo::Evaluation;

/// Render an evaluation to markdown
pub fn render_seo_report(evaluation: &Evaluation) -> String {
    let mut buf = String::new();
    let stats = &evaluation.stats;

    buf.push_str("# SEO Report\n\n");
    buf.push_str(&format!(
        "**Score:** {}/100 ({})\n\n",
        evaluation.score(),
        evaluation.band
    ));
    buf.push_str(&format!("{}\n\n", evaluation.band.verdict()));

    buf.push_str("## Content\n\n");
    buf.push_str(&format!("- Words: {}\n", stats.word_count));
    buf.push_str(&format!("- Size: {} KB\n", stats.size_kilobytes));
    buf.push_str(&format!(
        "- Headings: {} H2, {} H3\n",
        stats.heading_h2_count, stats.heading_h3_count
    ));
    buf.push_str(&format!("- Images: {}\n", stats.image_tag_count));
    buf.push_str(&format!("- Links: {}\n", stats.link_tag_count));
    buf.push_str(&format!("- Tables: {}\n", stats.table_tag_count));
    buf.push_str(&format!(
        "- Transition words: {}\n\n",
        stats.transition_word_count
    ));

    buf.push_str("## Recommendations\n\n");
    if evaluation.result.recommendations.is_empty() {
        buf.push_str("_Nothing to improve._\n\n");
    } else {
        for recommendation in &evaluation.result.recommendations {
            buf.push_str(&format!("- {}\n", recommendation));
        }
        buf.push('\n');
    }

    if !evaluation.can_publish() {
        buf.push_str("## Publishing blocked\n\n");
        for blocker in &evaluation.publish_blockers {
            buf.push_str(&format!("- {}\n", blocker));
        }
        buf.push('\n');
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxwritings_seo::{assess, DraftSnapshot, ScoringProfile};

    #[test]
    fn empty_draft_report() {
        let evaluation = assess(&ScoringProfile::full(), &DraftSnapshot::default());

        let report = render_seo_report(&evaluation);

        assert!(report.contains("**Score:** 0/100 (poor)"));
        assert!(report.contains("- Words: 0"));
        assert!(report.contains("- Add a featured image"));
        assert!(!report.contains("Publishing blocked"));
    }

    #[test]
    fn blocked_draft_lists_blockers() {
        let body = format!("<p>{}</p>", vec!["word"; 160].join(" "));
        let draft = DraftSnapshot {
            body_text: vec!["word"; 160].join(" "),
            body_html: body,
            ..Default::default()
        };
        let evaluation = assess(&ScoringProfile::full(), &draft);

        let report = render_seo_report(&evaluation);

        assert!(report.contains("## Publishing blocked"));
        assert!(report.contains("1 structural issue(s) must be fixed"));
        assert!(report.contains("Paragraph has 160 words"));
    }
}
