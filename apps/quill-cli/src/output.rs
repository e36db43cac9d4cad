//! Plain-text and JSON rendering of command results.

use std::fmt::Write as _;

use serde::Serialize;

use quill_core::domain::Post;
use quill_core::listing::PostSummary;
use quill_core::seo::{self, ScoreBand, SeoReport};
use quill_core::status::SystemStatus;

use crate::cli::OutputFormat;

/// Print `value` in the requested format; `plain` renders the text form.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    plain: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Plain => print!("{}", plain(value)),
    }
    Ok(())
}

fn mark(ok: bool) -> char {
    if ok { '✓' } else { '✗' }
}

pub fn seo_report(report: &SeoReport) -> String {
    let band = match report.band() {
        ScoreBand::Good => "good",
        ScoreBand::Fair => "fair",
        ScoreBand::Poor => "needs work",
    };
    let checks = &report.checks;

    let mut out = String::new();
    let _ = writeln!(out, "SEO score: {}/100 ({band})", report.seo_score);
    let _ = writeln!(
        out,
        "  {} Title length        {:>4} chars  (target {}-{})",
        mark(checks.title),
        report.title_length,
        seo::TITLE_RANGE.start(),
        seo::TITLE_RANGE.end()
    );
    let _ = writeln!(
        out,
        "  {} Meta description    {:>4} chars  (target {}-{})",
        mark(checks.description),
        report.description_length,
        seo::DESCRIPTION_RANGE.start(),
        seo::DESCRIPTION_RANGE.end()
    );
    let _ = writeln!(
        out,
        "  {} Word count          {:>4}        (min {})",
        mark(checks.content_length),
        report.word_count,
        seo::MIN_WORD_COUNT
    );
    let _ = writeln!(
        out,
        "  {} Reading time        {:>4} min    (min {})",
        mark(checks.reading_time),
        report.reading_time,
        seo::MIN_READING_MINUTES
    );

    if !report.keyword_density.is_empty() {
        let keywords: Vec<String> = report
            .keyword_density
            .iter()
            .map(|k| format!("{} {:.2}%", k.keyword, k.percentage))
            .collect();
        let _ = writeln!(out, "Top keywords: {}", keywords.join(", "));
    }

    let _ = writeln!(out, "Suggestions:");
    for suggestion in &report.suggestions {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}

pub fn post(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(
        out,
        "by {} on {}  [{}]  /{}",
        post.author,
        post.created_at.format("%Y-%m-%d"),
        post.id,
        post.slug
    );
    if !post.tags.is_empty() {
        let _ = writeln!(out, "tags: {}", post.tags.join(", "));
    }
    if let Some(description) = &post.meta_description {
        let _ = writeln!(out, "description: {description}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    out
}

pub fn summaries(summaries: &[PostSummary]) -> String {
    let mut out = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}  [{}]", summary.title, summary.id);
        let _ = writeln!(out, "  {} · {} · /{}", summary.author, summary.created, summary.slug);
        if !summary.tags.is_empty() {
            let _ = writeln!(out, "  tags: {}", summary.tags.join(", "));
        }
        let _ = writeln!(out, "  {}", summary.excerpt.replace('\n', " "));
    }
    out
}

pub fn system_status(status: &SystemStatus) -> String {
    let mut out = String::new();
    for component in status.components() {
        let _ = writeln!(
            out,
            "{} {:<12} {}",
            mark(component.ok),
            component.name,
            component.label
        );
    }
    if let Some(error) = &status.health.error {
        let _ = writeln!(out, "error: {error}");
    }
    if let Some(hint) = status.hint() {
        let _ = writeln!(out, "{hint}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::HealthStatus;

    #[test]
    fn test_seo_report_lists_checks_and_suggestions() {
        let report = seo::analyze("Short", "tiny body", "");
        let text = seo_report(&report);
        assert!(text.starts_with("SEO score: 0/100 (needs work)"));
        assert!(text.contains("✗ Title length"));
        assert!(text.contains("(target 50-60)"));
        for suggestion in &report.suggestions {
            assert!(text.contains(suggestion.as_str()));
        }
    }

    #[test]
    fn test_offline_status_shows_hint() {
        let status = SystemStatus {
            health: HealthStatus::offline("Cannot connect"),
        };
        let text = system_status(&status);
        assert!(text.contains("✗ Backend API"));
        assert!(text.contains("Not Available"));
        assert!(text.contains("error: Cannot connect"));
        assert!(text.contains("port 8000"));
    }

    #[test]
    fn test_placeholder_post() {
        let text = post(&Post::placeholder());
        assert!(text.contains("[demo_1]"));
    }

    #[test]
    fn test_summaries_separated_by_blank_line() {
        let a = PostSummary::from(&Post::placeholder());
        let text = summaries(&[a.clone(), a]);
        assert_eq!(text.matches("\n\n").count(), 1);
    }
}
