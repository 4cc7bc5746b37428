//! What the caller wants generated.

mod fields;
mod kinds;

pub use fields::*;
pub use kinds::{ContentType, Length, Tone};

use crate::ContentError;
use serde::Serialize;

/// A validated content request. Built through [`ContentRequestBuilder`];
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRequest {
    topic: String,
    content_type: ContentType,
    tone: Tone,
    length: Length,
    target_audience: Option<String>,
    keywords: Vec<String>,
    call_to_action: Option<String>,
    brand_voice: Option<String>,
    custom_instructions: Option<String>,
    industry: Option<String>,
    include_examples: bool,
    seo_focused: bool,
    type_fields: TypeFields,
}

impl ContentRequest {
    /// Start a request from typed values.
    pub fn builder(
        topic: impl Into<String>,
        content_type: ContentType,
        tone: Tone,
        length: Length,
    ) -> ContentRequestBuilder {
        ContentRequestBuilder::new(topic.into(), Ok(content_type), Ok(tone), Ok(length))
    }

    /// Start a request from user-supplied strings. Unknown values are
    /// reported by [`ContentRequestBuilder::build`].
    pub fn parse(
        topic: impl Into<String>,
        content_type: &str,
        tone: &str,
        length: &str,
    ) -> ContentRequestBuilder {
        ContentRequestBuilder::new(
            topic.into(),
            content_type.parse(),
            tone.parse(),
            length.parse(),
        )
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn call_to_action(&self) -> Option<&str> {
        self.call_to_action.as_deref()
    }

    #[must_use]
    pub fn brand_voice(&self) -> Option<&str> {
        self.brand_voice.as_deref()
    }

    #[must_use]
    pub fn custom_instructions(&self) -> Option<&str> {
        self.custom_instructions.as_deref()
    }

    #[must_use]
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    #[must_use]
    pub fn include_examples(&self) -> bool {
        self.include_examples
    }

    #[must_use]
    pub fn seo_focused(&self) -> bool {
        self.seo_focused
    }

    #[must_use]
    pub fn type_fields(&self) -> &TypeFields {
        &self.type_fields
    }
}

/// Builder for [`ContentRequest`].
/// # Default Values
/// - `target_audience`: `None` (rendered as "general audience")
/// - `keywords`: `vec![]`
/// - `call_to_action`: `None` (rendered as "Engage with this content")
/// - `brand_voice`, `custom_instructions`, `industry`: `None`
/// - `include_examples`: `false`
/// - `seo_focused`: `false`
/// - `type_fields`: [`TypeFields::defaults_for`] the content type
#[derive(Debug)]
pub struct ContentRequestBuilder {
    topic: String,
    content_type: Result<ContentType, ContentError>,
    tone: Result<Tone, ContentError>,
    length: Result<Length, ContentError>,
    target_audience: Option<String>,
    keywords: Vec<String>,
    call_to_action: Option<String>,
    brand_voice: Option<String>,
    custom_instructions: Option<String>,
    industry: Option<String>,
    include_examples: bool,
    seo_focused: bool,
    type_fields: Option<TypeFields>,
}

impl ContentRequestBuilder {
    fn new(
        topic: String,
        content_type: Result<ContentType, ContentError>,
        tone: Result<Tone, ContentError>,
        length: Result<Length, ContentError>,
    ) -> Self {
        Self {
            topic,
            content_type,
            tone,
            length,
            target_audience: None,
            keywords: Vec::new(),
            call_to_action: None,
            brand_voice: None,
            custom_instructions: None,
            industry: None,
            include_examples: false,
            seo_focused: false,
            type_fields: None,
        }
    }

    #[must_use]
    pub fn target_audience(mut self, target_audience: impl Into<String>) -> Self {
        self.target_audience = non_blank(target_audience.into());
        self
    }

    /// Add a keyword. Blank keywords are ignored.
    #[must_use]
    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        if let Some(keyword) = non_blank(keyword.into()) {
            self.keywords.push(keyword);
        }
        self
    }

    /// Set the keywords. Blank keywords are ignored.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords
            .into_iter()
            .filter_map(|keyword| non_blank(keyword.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn call_to_action(mut self, call_to_action: impl Into<String>) -> Self {
        self.call_to_action = non_blank(call_to_action.into());
        self
    }

    #[must_use]
    pub fn brand_voice(mut self, brand_voice: impl Into<String>) -> Self {
        self.brand_voice = non_blank(brand_voice.into());
        self
    }

    #[must_use]
    pub fn custom_instructions(mut self, custom_instructions: impl Into<String>) -> Self {
        self.custom_instructions = non_blank(custom_instructions.into());
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = non_blank(industry.into());
        self
    }

    #[must_use]
    pub fn include_examples(mut self, include_examples: bool) -> Self {
        self.include_examples = include_examples;
        self
    }

    #[must_use]
    pub fn seo_focused(mut self, seo_focused: bool) -> Self {
        self.seo_focused = seo_focused;
        self
    }

    /// Override the type-specific placeholders. The variant must match the
    /// content type.
    #[must_use]
    pub fn type_fields(mut self, type_fields: TypeFields) -> Self {
        self.type_fields = Some(type_fields);
        self
    }

    pub fn build(self) -> Result<ContentRequest, ContentError> {
        if self.topic.trim().is_empty() {
            return Err(ContentError::Validation(
                "Topic must not be empty".to_string(),
            ));
        }
        let content_type = self.content_type?;
        let tone = self.tone?;
        let length = self.length?;

        let type_fields = match self.type_fields {
            Some(fields) if fields.content_type() != content_type => {
                return Err(ContentError::Validation(format!(
                    "Fields for '{}' cannot be used with content type '{content_type}'",
                    fields.content_type()
                )));
            }
            Some(fields) => fields,
            None => TypeFields::defaults_for(content_type),
        };

        Ok(ContentRequest {
            topic: self.topic,
            content_type,
            tone,
            length,
            target_audience: self.target_audience,
            keywords: self.keywords,
            call_to_action: self.call_to_action,
            brand_voice: self.brand_voice,
            custom_instructions: self.custom_instructions,
            industry: self.industry,
            include_examples: self.include_examples,
            seo_focused: self.seo_focused,
            type_fields,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
