use super::{
    instructions::{default_instructions, get_instructions, InstructionParam},
    modifiers::PromptModifiers,
    suggestions::{self, ContentSuggestions},
    templates::{render_template, TemplateSet},
};
use crate::{
    request::{ContentRequest, ContentType},
    ContentError,
};

const DEFAULT_TARGET_AUDIENCE: &str = "general audience";
const DEFAULT_CALL_TO_ACTION: &str = "Engage with this content";

const QUALITY_GUIDELINES: &str = "

QUALITY STANDARDS:
- Ensure accuracy and fact-check claims
- Use clear, concise language
- Maintain consistent voice throughout
- Include transitions between sections
- End with clear next steps
- Proofread for grammar and spelling
- Make content valuable and actionable

OUTPUT FORMAT:
- Provide clean, formatted text
- Use markdown for structure where appropriate
- Include suggested title options
- Separate meta information (suggested tags, SEO title, etc.)
";

/// Turns a [`ContentRequest`] into the prompt sent to a language model.
/// Rendering is pure: the same request always yields the same prompt.
#[derive(Debug, Clone)]
pub struct PromptEngine {
    templates: TemplateSet,
    instructions: Vec<InstructionParam>,
}

impl PromptEngine {
    #[must_use]
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            instructions: default_instructions(),
        }
    }

    /// Add an instruction after the built-in ones.
    #[must_use]
    pub fn add_instruction(mut self, instruction: impl Into<InstructionParam>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// The modifiers `render` would apply to this request.
    #[must_use]
    pub fn modifiers(&self, request: &ContentRequest) -> PromptModifiers {
        PromptModifiers::resolve(request)
    }

    pub fn render(&self, request: &ContentRequest) -> Result<String, ContentError> {
        let template = self.templates.get(request.content_type())?;
        let modifiers = self.modifiers(request);
        let additional_instructions = get_instructions(&self.instructions, request);

        let mut values = vec![
            ("topic", request.topic()),
            ("tone", request.tone().as_str()),
            ("length_description", modifiers.length_description),
            ("word_count_range", modifiers.word_count_range),
            (
                "target_audience",
                request.target_audience().unwrap_or(DEFAULT_TARGET_AUDIENCE),
            ),
            ("seo_requirements", modifiers.seo_requirements),
            (
                "call_to_action",
                request.call_to_action().unwrap_or(DEFAULT_CALL_TO_ACTION),
            ),
            ("additional_instructions", additional_instructions.as_str()),
        ];
        values.extend(request.type_fields().placeholders());

        let mut prompt = render_template(template, &values)?;

        if !request.keywords().is_empty() {
            prompt.push_str("\nKEYWORDS TO INCLUDE: ");
            prompt.push_str(&request.keywords().join(", "));
            prompt.push_str("\nIntegrate these keywords naturally throughout the content.");
        }

        prompt.push_str(QUALITY_GUIDELINES);
        Ok(prompt)
    }

    /// Titles, keywords, structures and calls to action for a topic.
    #[must_use]
    pub fn suggest(&self, topic: &str, content_type: ContentType) -> ContentSuggestions {
        suggestions::suggest(topic, content_type)
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new(TemplateSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Length, SocialFields, Tone, TypeFields};

    fn blog(length: Length) -> ContentRequest {
        ContentRequest::builder("AI in Healthcare", ContentType::Blog, Tone::Professional, length)
            .build()
            .expect("valid request")
    }

    #[test]
    fn renders_blog_prompt() {
        let prompt = PromptEngine::default()
            .render(&blog(Length::Short))
            .expect("renders");

        assert!(prompt.contains("Write a concise and focused blog post about \"AI in Healthcare\"."));
        assert!(prompt.contains("- Word count: 300-500 words"));
        assert!(prompt.contains("- Target audience: general audience"));
        assert!(prompt.contains("6. Call-to-action: Engage with this content"));
        assert!(prompt.contains(
            "- Include SEO optimization: Focus on readability first, include keywords naturally without forcing them."
        ));
        assert!(prompt.ends_with(QUALITY_GUIDELINES));
        assert!(!prompt.contains("KEYWORDS TO INCLUDE"));
    }

    #[test]
    fn medium_blog_uses_medium_range() {
        let prompt = PromptEngine::default()
            .render(&blog(Length::Medium))
            .expect("renders");
        assert!(prompt.contains("800-1200 words"));
    }

    #[test]
    fn extra_long_falls_back() {
        let prompt = PromptEngine::default()
            .render(&blog(Length::ExtraLong))
            .expect("renders");
        assert!(prompt.contains("Write a well-developed blog post"));
        assert!(prompt.contains("500-800 words"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let engine = PromptEngine::default();
        let request = blog(Length::Long);
        assert_eq!(
            engine.render(&request).expect("renders"),
            engine.render(&request).expect("renders")
        );
    }

    #[test]
    fn every_content_type_renders() {
        let engine = PromptEngine::default();
        for content_type in ContentType::all() {
            let request =
                ContentRequest::builder("Solar power", content_type, Tone::Friendly, Length::Medium)
                    .build()
                    .expect("valid request");
            let prompt = engine.render(&request).expect("renders");
            assert!(prompt.contains("Solar power"), "{content_type} mentions the topic");
        }
    }

    #[test]
    fn topic_is_rendered_verbatim() {
        let request =
            ContentRequest::builder(" Rust ", ContentType::Blog, Tone::Casual, Length::Short)
                .build()
                .expect("valid request");
        let prompt = PromptEngine::default().render(&request).expect("renders");
        assert!(prompt.contains(" Rust "));
    }

    #[test]
    fn appends_keywords_and_instructions() {
        let request =
            ContentRequest::builder("Composting", ContentType::Blog, Tone::Casual, Length::Short)
                .keywords(["soil", "compost bin"])
                .brand_voice("Earthy")
                .include_examples(true)
                .build()
                .expect("valid request");

        let prompt = PromptEngine::default().render(&request).expect("renders");

        assert!(prompt.contains(
            "BRAND VOICE: Earthy\nInclude relevant real-world examples and case studies.\n"
        ));
        assert!(prompt.contains(
            "\nKEYWORDS TO INCLUDE: soil, compost bin\nIntegrate these keywords naturally throughout the content.\n\nQUALITY STANDARDS:"
        ));
    }

    #[test]
    fn uses_type_fields() {
        let request =
            ContentRequest::builder("Launch day", ContentType::Social, Tone::Creative, Length::Short)
                .type_fields(TypeFields::Social(SocialFields {
                    platform: "LinkedIn".to_string(),
                    ..SocialFields::default()
                }))
                .build()
                .expect("valid request");

        let prompt = PromptEngine::default().render(&request).expect("renders");
        assert!(prompt.contains("engaging content for LinkedIn."));
        assert!(prompt.contains("- Character limit: 280 characters"));
    }

    #[test]
    fn missing_template_is_unsupported() {
        let engine = PromptEngine::new(TemplateSet::builtin().without(ContentType::Blog));
        assert!(matches!(
            engine.render(&blog(Length::Short)),
            Err(ContentError::UnsupportedContentType(ContentType::Blog))
        ));
    }

    #[test]
    fn bad_placeholder_fails_to_render() {
        let engine = PromptEngine::new(
            TemplateSet::empty().with(ContentType::Blog, "About {topic} for {platform}"),
        );
        assert!(matches!(
            engine.render(&blog(Length::Short)),
            Err(ContentError::TemplateRender(_))
        ));
    }

    #[test]
    fn custom_instruction_is_appended() {
        let engine = PromptEngine::new(
            TemplateSet::empty().with(ContentType::Blog, "{topic}|{additional_instructions}"),
        )
        .add_instruction("Avoid passive voice.");

        let request =
            ContentRequest::builder("Editing", ContentType::Blog, Tone::Formal, Length::Short)
                .industry("publishing")
                .build()
                .expect("valid request");

        let prompt = engine.render(&request).expect("renders");
        assert!(prompt.starts_with(
            "Editing|INDUSTRY CONTEXT: Tailor content for the publishing industry.\nAvoid passive voice."
        ));
    }
}
