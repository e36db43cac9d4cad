//! Client-side SEO heuristic.
//!
//! [`analyze`] scores a post from its title, body and meta description with
//! four equally weighted pass/fail checks and collects suggestions for every
//! failed check. The computation is pure and total: any input, including
//! empty strings, produces a report.
//!
//! Lengths are counted in Unicode scalar values.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::Serialize;

pub const TITLE_RANGE: RangeInclusive<usize> = 50..=60;
pub const DESCRIPTION_RANGE: RangeInclusive<usize> = 120..=160;
pub const MIN_WORD_COUNT: usize = 300;
pub const MIN_READING_MINUTES: usize = 2;
pub const WORDS_PER_MINUTE: usize = 200;

/// Points awarded per passing check.
pub const CHECK_POINTS: u8 = 25;

const TOP_KEYWORDS: usize = 5;
const MIN_KEYWORD_LEN: usize = 4;
const STOP_WORDS: [&str; 6] = ["this", "that", "with", "from", "have", "were"];

pub const GOOD_STANDING: &str = "Great! Your SEO looks good.";
const TITLE_TOO_SHORT: &str = "Title is too short. Aim for 50-60 characters.";
const TITLE_TOO_LONG: &str = "Title is too long. Keep it under 60 characters.";
const DESCRIPTION_TOO_SHORT: &str = "Meta description is too short. Aim for 120-160 characters.";
const DESCRIPTION_TOO_LONG: &str = "Meta description is too long. Keep it under 160 characters.";
const CONTENT_TOO_SHORT: &str = "Content is too short. Aim for at least 300 words for better SEO.";
const CONTENT_TOO_BRIEF: &str = "Content might be too brief. Longer articles tend to rank better.";
const NO_KEYWORDS: &str = "Consider adding more specific keywords to improve SEO.";

/// Share of one keyword among the qualifying tokens of the content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    /// Percentage truncated to two decimals.
    pub percentage: f64,
}

/// Outcome of each scored check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoChecks {
    pub title: bool,
    pub description: bool,
    pub content_length: bool,
    pub reading_time: bool,
}

impl SeoChecks {
    fn passed(&self) -> u8 {
        [
            self.title,
            self.description,
            self.content_length,
            self.reading_time,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u8
    }
}

/// Coarse grading of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60.. => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// Full SEO analysis of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub title_length: usize,
    pub description_length: usize,
    pub word_count: usize,
    /// Estimated minutes, rounded up.
    pub reading_time: usize,
    /// Top keywords, most frequent first.
    pub keyword_density: Vec<KeywordDensity>,
    /// 0-100, always a multiple of [`CHECK_POINTS`].
    pub seo_score: u8,
    pub suggestions: Vec<String>,
    pub checks: SeoChecks,
}

impl SeoReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.seo_score)
    }
}

/// Analyze a post and score it.
pub fn analyze(title: &str, content: &str, meta_description: &str) -> SeoReport {
    let title_length = title.chars().count();
    let description_length = meta_description.chars().count();
    let word_count = word_count(content);
    let reading_time = reading_time(word_count);
    let keyword_density = keyword_density(content);

    let checks = SeoChecks {
        title: TITLE_RANGE.contains(&title_length),
        description: DESCRIPTION_RANGE.contains(&description_length),
        content_length: word_count >= MIN_WORD_COUNT,
        reading_time: reading_time >= MIN_READING_MINUTES,
    };

    let mut suggestions = Vec::new();
    if !checks.title {
        suggestions.push(if title_length < *TITLE_RANGE.start() {
            TITLE_TOO_SHORT
        } else {
            TITLE_TOO_LONG
        });
    }
    if !checks.description {
        suggestions.push(if description_length < *DESCRIPTION_RANGE.start() {
            DESCRIPTION_TOO_SHORT
        } else {
            DESCRIPTION_TOO_LONG
        });
    }
    if !checks.content_length {
        suggestions.push(CONTENT_TOO_SHORT);
    }
    if !checks.reading_time {
        suggestions.push(CONTENT_TOO_BRIEF);
    }
    if keyword_density.is_empty() && word_count > 0 {
        suggestions.push(NO_KEYWORDS);
    }
    if suggestions.is_empty() {
        suggestions.push(GOOD_STANDING);
    }

    SeoReport {
        title_length,
        description_length,
        word_count,
        reading_time,
        keyword_density,
        seo_score: checks.passed() * CHECK_POINTS,
        suggestions: suggestions.into_iter().map(str::to_string).collect(),
        checks,
    }
}

/// Number of whitespace-separated words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Reading time in whole minutes, rounded up.
pub fn reading_time(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Top keywords of `content` with their density.
///
/// Candidate tokens are lower-cased words longer than three characters.
/// Each is stripped of non-word characters and counted unless it became too
/// short or is a stop word. Densities are relative to the number of
/// candidate tokens; ties keep first-seen order.
pub fn keyword_density(content: &str) -> Vec<KeywordDensity> {
    let lowered = content.to_lowercase();
    let candidates: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .collect();

    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for word in &candidates {
        let clean: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if clean.len() < MIN_KEYWORD_LEN || STOP_WORDS.contains(&clean.as_str()) {
            continue;
        }
        match index.get(&clean) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                index.insert(clean.clone(), tally.len());
                tally.push((clean, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    let total = candidates.len();
    tally
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(keyword, count)| KeywordDensity {
            keyword,
            percentage: truncated_percentage(count, total),
        })
        .collect()
}

/// `count / total` as a percentage truncated to two decimals.
///
/// Computed in integer basis points so the shares never sum past 100.
fn truncated_percentage(count: usize, total: usize) -> f64 {
    let basis_points = count * 10_000 / total;
    basis_points as f64 / 100.0
}
