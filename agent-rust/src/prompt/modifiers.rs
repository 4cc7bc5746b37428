//! Lookup tables that shape a prompt: tone, length, audience and SEO.

use crate::request::{ContentRequest, ContentType, Length, Tone};
use serde::Serialize;

const DEFAULT_LENGTH_DESCRIPTION: &str = "well-developed";
const DEFAULT_WORD_COUNT_RANGE: &str = "500-800 words";

#[must_use]
pub fn tone_guidance(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Maintain a professional, authoritative voice with industry-appropriate language."
        }
        Tone::Casual => "Use a relaxed, conversational tone that feels like talking to a friend.",
        Tone::Friendly => "Be warm, approachable, and encouraging in your communication style.",
        Tone::Formal => "Use formal language structure with proper grammar and academic tone.",
        Tone::Creative => {
            "Be imaginative, use creative metaphors, and think outside the box."
        }
        Tone::Humorous => "Include appropriate humor, wit, and light-hearted elements.",
        Tone::Authoritative => "Demonstrate expertise, confidence, and thought leadership.",
        Tone::Conversational => "Write as if having a natural conversation with the reader.",
    }
}

/// Adjective phrase for the requested length. `ExtraLong` has no entry of
/// its own.
#[must_use]
pub fn length_description(length: Length) -> &'static str {
    match length {
        Length::Short => "concise and focused",
        Length::Medium => "well-developed",
        Length::Long => "comprehensive and detailed",
        Length::ExtraLong => DEFAULT_LENGTH_DESCRIPTION,
    }
}

/// Word-count range for a (length, content type) pair, falling back to
/// "500-800 words" where the table has no entry.
#[must_use]
pub fn word_count_range(length: Length, content_type: ContentType) -> &'static str {
    use ContentType::{Article, Blog, Email, Marketing, Social};

    match (length, content_type) {
        (Length::Short, Blog) => "300-500 words",
        (Length::Short, Social) => "50-100 words",
        (Length::Short, Marketing) => "150-300 words",
        (Length::Short, Email) => "100-200 words",
        (Length::Short, Article) => "400-600 words",
        (Length::Medium, Blog | Article) => "800-1200 words",
        (Length::Medium, Social) => "100-200 words",
        (Length::Medium, Marketing) => "300-500 words",
        (Length::Medium, Email) => "200-400 words",
        (Length::Long, Blog) => "1500-2500 words",
        (Length::Long, Social) => "200-300 words",
        (Length::Long, Marketing) => "500-1000 words",
        (Length::Long, Email) => "400-800 words",
        (Length::Long, Article) => "1500-3000 words",
        _ => DEFAULT_WORD_COUNT_RANGE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceCategory {
    Beginners,
    Professionals,
    Executives,
    Technical,
    General,
}

impl AudienceCategory {
    /// Classify a free-text audience description. Categories are checked
    /// in order and the first keyword hit wins.
    #[must_use]
    pub fn classify(audience: &str) -> Self {
        const RULES: [(AudienceCategory, &[&str]); 4] = [
            (
                AudienceCategory::Beginners,
                &["beginner", "new", "starter", "novice"],
            ),
            (
                AudienceCategory::Professionals,
                &["professional", "expert", "specialist", "practitioner"],
            ),
            (
                AudienceCategory::Executives,
                &["executive", "manager", "leader", "director", "ceo"],
            ),
            (
                AudienceCategory::Technical,
                &["developer", "engineer", "technical", "programmer"],
            ),
        ];

        let audience = audience.to_lowercase();
        RULES
            .iter()
            .find(|(_, words)| words.iter().any(|word| audience.contains(word)))
            .map_or(Self::General, |(category, _)| *category)
    }

    #[must_use]
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Beginners => {
                "Explain concepts clearly, avoid jargon, include definitions for technical terms."
            }
            Self::Professionals => {
                "Use industry terminology, assume baseline knowledge, focus on advanced insights."
            }
            Self::Executives => {
                "Be concise, focus on strategic implications, include ROI and business impact."
            }
            Self::Technical => {
                "Include technical details, code examples, and implementation specifics."
            }
            Self::General => {
                "Use accessible language for a broad audience, explain technical concepts simply."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoLevel {
    High,
    Medium,
    Low,
    None,
}

impl SeoLevel {
    #[must_use]
    pub fn for_request(seo_focused: bool) -> Self {
        if seo_focused {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn requirements(self) -> &'static str {
        match self {
            Self::High => {
                "Optimize heavily for SEO with keyword density 1-2%, include meta descriptions, use semantic keywords."
            }
            Self::Medium => {
                "Include target keywords naturally, use related terms, optimize headings for search."
            }
            Self::Low => {
                "Focus on readability first, include keywords naturally without forcing them."
            }
            Self::None => "Write purely for human readers without SEO considerations.",
        }
    }
}

/// Modifiers resolved for a single request.
///
/// Tone and audience guidance are resolved here but the built-in templates
/// do not reference them; only `length_description`, `word_count_range` and
/// `seo_requirements` reach the prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptModifiers {
    pub tone_guidance: &'static str,
    pub length_description: &'static str,
    pub word_count_range: &'static str,
    /// `None` when the request names no target audience.
    pub audience: Option<AudienceCategory>,
    pub audience_guidance: Option<&'static str>,
    pub seo_level: SeoLevel,
    pub seo_requirements: &'static str,
}

impl PromptModifiers {
    #[must_use]
    pub fn resolve(request: &ContentRequest) -> Self {
        let audience = request.target_audience().map(AudienceCategory::classify);
        let seo_level = SeoLevel::for_request(request.seo_focused());
        Self {
            tone_guidance: tone_guidance(request.tone()),
            length_description: length_description(request.length()),
            word_count_range: word_count_range(request.length(), request.content_type()),
            audience,
            audience_guidance: audience.map(AudienceCategory::guidance),
            seo_level,
            seo_requirements: seo_level.requirements(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ranges_follow_the_table() {
        assert_eq!(
            word_count_range(Length::Short, ContentType::Blog),
            "300-500 words"
        );
        assert_eq!(
            word_count_range(Length::Medium, ContentType::Blog),
            "800-1200 words"
        );
        assert_eq!(
            word_count_range(Length::Long, ContentType::Article),
            "1500-3000 words"
        );
    }

    #[test]
    fn missing_entries_fall_back() {
        assert_eq!(
            word_count_range(Length::ExtraLong, ContentType::Blog),
            "500-800 words"
        );
        assert_eq!(
            word_count_range(Length::Short, ContentType::Tutorial),
            "500-800 words"
        );
        assert_eq!(length_description(Length::ExtraLong), "well-developed");
    }

    #[test]
    fn classifies_audience_in_priority_order() {
        assert_eq!(
            AudienceCategory::classify("New managers"),
            AudienceCategory::Beginners
        );
        assert_eq!(
            AudienceCategory::classify("Marketing Directors"),
            AudienceCategory::Executives
        );
        assert_eq!(
            AudienceCategory::classify("backend developers"),
            AudienceCategory::Technical
        );
        assert_eq!(
            AudienceCategory::classify("Healthcare specialists"),
            AudienceCategory::Professionals
        );
        assert_eq!(
            AudienceCategory::classify("everyone"),
            AudienceCategory::General
        );
    }

    #[test]
    fn resolves_modifiers_for_request() {
        let request = ContentRequest::builder(
            "Kubernetes",
            ContentType::Blog,
            Tone::Casual,
            Length::Long,
        )
        .target_audience("platform engineers")
        .seo_focused(true)
        .build()
        .expect("valid request");

        let modifiers = PromptModifiers::resolve(&request);
        assert_eq!(modifiers.word_count_range, "1500-2500 words");
        assert_eq!(modifiers.audience, Some(AudienceCategory::Technical));
        assert_eq!(modifiers.seo_level, SeoLevel::Medium);
        assert_eq!(modifiers.tone_guidance, tone_guidance(Tone::Casual));
    }

    #[test]
    fn no_audience_means_no_guidance() {
        let request =
            ContentRequest::builder("Kubernetes", ContentType::Blog, Tone::Casual, Length::Long)
                .build()
                .expect("valid request");

        let modifiers = PromptModifiers::resolve(&request);
        assert_eq!(modifiers.audience, None);
        assert_eq!(modifiers.audience_guidance, None);
        assert_eq!(modifiers.seo_level, SeoLevel::Low);
    }
}
