//! Closed enumerations describing what to generate.

use crate::ContentError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kind of content to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Blog,
    Social,
    Article,
    Marketing,
    Email,
    Newsletter,
    ProductDescription,
    CaseStudy,
    Tutorial,
    PressRelease,
}

impl ContentType {
    /// Value and display name in a single lookup
    fn metadata(self) -> (&'static str, &'static str) {
        match self {
            Self::Blog => ("blog", "Blog"),
            Self::Social => ("social", "Social"),
            Self::Article => ("article", "Article"),
            Self::Marketing => ("marketing", "Marketing"),
            Self::Email => ("email", "Email"),
            Self::Newsletter => ("newsletter", "Newsletter"),
            Self::ProductDescription => ("product_description", "Product Description"),
            Self::CaseStudy => ("case_study", "Case Study"),
            Self::Tutorial => ("tutorial", "Tutorial"),
            Self::PressRelease => ("press_release", "Press Release"),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.metadata().0
    }

    /// Name used when the content is stored, e.g. "Case Study".
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.metadata().1
    }

    #[must_use]
    pub fn all() -> [Self; 10] {
        [
            Self::Blog,
            Self::Social,
            Self::Article,
            Self::Marketing,
            Self::Email,
            Self::Newsletter,
            Self::ProductDescription,
            Self::CaseStudy,
            Self::Tutorial,
            Self::PressRelease,
        ]
    }
}

/// Voice of the generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Formal,
    Creative,
    Humorous,
    Authoritative,
    Conversational,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Creative => "creative",
            Self::Humorous => "humorous",
            Self::Authoritative => "authoritative",
            Self::Conversational => "conversational",
        }
    }

    #[must_use]
    pub fn all() -> [Self; 8] {
        [
            Self::Professional,
            Self::Casual,
            Self::Friendly,
            Self::Formal,
            Self::Creative,
            Self::Humorous,
            Self::Authoritative,
            Self::Conversational,
        ]
    }
}

/// Target length of the generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Short,
    Medium,
    Long,
    ExtraLong,
}

impl Length {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::ExtraLong => "extra_long",
        }
    }

    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Short, Self::Medium, Self::Long, Self::ExtraLong]
    }
}

/// Case-insensitive match of `value` against the string values of `all`.
fn parse_member<T: Copy>(
    value: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &str,
) -> Result<T, ContentError> {
    let needle = value.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|member| as_str(*member) == needle)
        .ok_or_else(|| {
            let allowed: Vec<&str> = all.iter().map(|member| as_str(*member)).collect();
            ContentError::Validation(format!(
                "Invalid {kind}: '{value}'. Use one of: {}",
                allowed.join(", ")
            ))
        })
}

impl FromStr for ContentType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, &Self::all(), Self::as_str, "content type")
    }
}

impl FromStr for Tone {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, &Self::all(), Self::as_str, "tone")
    }
}

impl FromStr for Length {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, &Self::all(), Self::as_str, "length")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("BLOG".parse::<ContentType>().ok(), Some(ContentType::Blog));
        assert_eq!(
            " Case_Study ".parse::<ContentType>().ok(),
            Some(ContentType::CaseStudy)
        );
        assert_eq!("Humorous".parse::<Tone>().ok(), Some(Tone::Humorous));
        assert_eq!("EXTRA_LONG".parse::<Length>().ok(), Some(Length::ExtraLong));
    }

    #[test]
    fn rejects_unknown_members() {
        let err = "podcast".parse::<ContentType>().expect_err("not a content type");
        assert!(matches!(err, ContentError::Validation(ref msg) if msg.contains("podcast")));
        assert!("extra long".parse::<Length>().is_err());
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentType::ProductDescription).expect("serializable"),
            "\"product_description\""
        );
    }
}
