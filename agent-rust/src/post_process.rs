//! Heuristics that pull a title and tags out of generated text.
//!
//! Lengths are counted in characters, never bytes.

const TITLE_SCAN_LINES: usize = 5;
const MAX_TITLE_LINE_CHARS: usize = 100;
const FALLBACK_TITLE_CHARS: usize = 50;
const MAX_TAGS: usize = 5;
pub const PREVIEW_CHARS: usize = 200;

/// Checked in order against the lower-cased body.
const TAG_TABLE: &[(&str, &str)] = &[
    ("artificial intelligence", "AI"),
    ("machine learning", "ML"),
    ("ai", "AI"),
    ("data science", "Data Science"),
    ("blockchain", "Blockchain"),
    ("cybersecurity", "Cybersecurity"),
    ("cloud", "Cloud"),
    ("marketing", "Marketing"),
    ("seo", "SEO"),
    ("productivity", "Productivity"),
    ("startup", "Startup"),
    ("finance", "Finance"),
    ("health", "Health"),
    ("education", "Education"),
    ("sustainability", "Sustainability"),
];

/// Pick a title for generated text.
///
/// A markdown `# ` or `## ` heading wins. Otherwise the first short line
/// among the first few non-empty lines that is not a bullet. Otherwise the
/// opening characters of the text followed by `...`.
#[must_use]
pub fn extract_title(body: &str) -> String {
    if let Some(heading) = body.lines().map(str::trim).find_map(|line| {
        line.strip_prefix("# ")
            .or_else(|| line.strip_prefix("## "))
            .map(str::trim)
            .filter(|heading| !heading.is_empty())
    }) {
        return heading.to_string();
    }

    if let Some(line) = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TITLE_SCAN_LINES)
        .find(|line| !line.starts_with('*') && line.chars().count() < MAX_TITLE_LINE_CHARS)
    {
        return line.to_string();
    }

    format!("{}...", truncate_chars(body, FALLBACK_TITLE_CHARS))
}

/// Up to five distinct tags: capitalized topic words longer than three
/// characters, then labels for known terms found in the body.
#[must_use]
pub fn extract_tags(body: &str, topic: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    topic
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(capitalize)
        .for_each(&mut push);

    let body = body.to_lowercase();
    TAG_TABLE
        .iter()
        .filter(|(term, _)| body.contains(term))
        .for_each(|(_, tag)| push((*tag).to_string()));

    tags.truncate(MAX_TAGS);
    tags
}

/// Whitespace-separated token count.
#[must_use]
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// At most `max_chars` characters, with `...` appended when cut.
#[must_use]
pub fn preview(body: &str, max_chars: usize) -> String {
    let truncated = truncate_chars(body, max_chars);
    if truncated.len() < body.len() {
        format!("{truncated}...")
    } else {
        truncated.to_string()
    }
}

/// The first `max_chars` characters of `body`.
#[must_use]
pub fn truncate_chars(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

/// "stRATEGY" -> "Strategy"
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_heading() {
        assert_eq!(extract_title("# My Title\nbody text"), "My Title");
        assert_eq!(
            extract_title("Intro line\n\n## Section Heading\nmore"),
            "Section Heading"
        );
    }

    #[test]
    fn title_from_first_short_line() {
        assert_eq!(
            extract_title("\n* bullet first\nA plain opening line\nrest"),
            "A plain opening line"
        );
    }

    #[test]
    fn title_falls_back_to_prefix() {
        let long_line = "x".repeat(120);
        assert_eq!(extract_title(&long_line), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn title_of_empty_body() {
        assert_eq!(extract_title(""), "...");
    }

    #[test]
    fn title_counts_characters() {
        let line = "é".repeat(99);
        assert_eq!(extract_title(&line), line);
    }

    #[test]
    fn tags_topic_words_then_table() {
        assert_eq!(
            extract_tags("This post covers machine learning and AI strategy", "ai strategy"),
            ["Strategy", "ML", "AI"]
        );
    }

    #[test]
    fn tags_are_deduplicated_and_capped() {
        let tags = extract_tags(
            "Marketing with AI, machine learning, blockchain and cloud SEO",
            "marketing tips",
        );
        assert_eq!(tags, ["Marketing", "Tips", "ML", "AI", "Blockchain"]);
    }

    #[test]
    fn counts_whitespace_tokens() {
        assert_eq!(word_count("one two\nthree\t four  "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview("short", 200), "short");
        let body = "ab".repeat(150);
        let shown = preview(&body, PREVIEW_CHARS);
        assert_eq!(shown.chars().count(), 203);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hé", 10), "hé");
    }
}
