//! Base prompt templates and the placeholder renderer.

use crate::{request::ContentType, ContentError};
use std::{borrow::Cow, collections::BTreeMap};

const BLOG_TEMPLATE: &str = r#"
You are an expert content writer specializing in creating engaging blog posts. 

Write a {length_description} blog post about "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Word count: {word_count_range}
- Include SEO optimization: {seo_requirements}

STRUCTURE:
1. Compelling headline
2. Engaging introduction with hook
3. Main content with clear headings (H2, H3)
4. Actionable insights and practical tips
5. Conclusion with key takeaways
6. Call-to-action: {call_to_action}

WRITING GUIDELINES:
- Use active voice
- Include relevant examples and case studies
- Add bullet points and numbered lists for readability
- Optimize for search engines with natural keyword integration
- Make it scannable with subheadings
- Include transitional phrases for flow

{additional_instructions}
"#;

const SOCIAL_TEMPLATE: &str = r#"
You are a social media expert creating engaging content for {platform}.

Create a {tone} social media post about "{topic}".

REQUIREMENTS:
- Platform: {platform}
- Character limit: {character_limit}
- Target audience: {target_audience}
- Include hashtags: {hashtag_requirements}

STRUCTURE:
1. Attention-grabbing opening
2. Main message with value
3. Call-to-action
4. Relevant hashtags

WRITING GUIDELINES:
- Use emojis strategically
- Create thumb-stopping content
- Include social proof if relevant
- Ask engaging questions
- Use trending hashtags appropriately
- Make it shareable

{additional_instructions}
"#;

const MARKETING_TEMPLATE: &str = r#"
You are a conversion copywriter creating persuasive marketing content.

Write {length_description} marketing copy for "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Primary goal: {marketing_goal}
- Call-to-action: {call_to_action}

STRUCTURE:
1. Attention-grabbing headline
2. Problem identification
3. Solution presentation
4. Benefits and features
5. Social proof/testimonials
6. Urgency/scarcity
7. Strong call-to-action

COPYWRITING TECHNIQUES:
- Use AIDA framework (Attention, Interest, Desire, Action)
- Focus on benefits over features
- Address objections proactively
- Use power words and emotional triggers
- Create urgency without being pushy
- Include specific, measurable claims

{additional_instructions}
"#;

const EMAIL_TEMPLATE: &str = r#"
You are an email marketing specialist creating high-converting email campaigns.

Write a {length_description} email about "{topic}".

REQUIREMENTS:
- Email type: {email_type}
- Tone: {tone}
- Target audience: {target_audience}
- Primary goal: {email_goal}

STRUCTURE:
1. Compelling subject line
2. Personal greeting
3. Opening hook
4. Main content with value
5. Clear call-to-action
6. Professional signature

EMAIL BEST PRACTICES:
- Write scannable content
- Use conversational tone
- Personalize when possible
- Include single, clear CTA
- Optimize for mobile reading
- Test different subject lines

{additional_instructions}
"#;

const ARTICLE_TEMPLATE: &str = r#"
You are a professional journalist and subject matter expert.

Write a comprehensive {length_description} article about "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Article type: {article_type}
- Research depth: {research_requirements}

STRUCTURE:
1. Informative headline
2. Executive summary/abstract
3. Introduction with thesis
4. Main sections with evidence
5. Analysis and insights
6. Conclusion with implications
7. References/sources

WRITING STANDARDS:
- Use authoritative sources
- Include data and statistics
- Maintain objectivity
- Use proper citations
- Ensure fact accuracy
- Follow journalistic standards

{additional_instructions}
"#;

const TUTORIAL_TEMPLATE: &str = r#"
You are an instructional designer creating step-by-step educational content.

Create a comprehensive tutorial on "{topic}".

REQUIREMENTS:
- Skill level: {skill_level}
- Learning objectives: {learning_objectives}
- Time to complete: {estimated_time}
- Tools/resources needed: {required_tools}

STRUCTURE:
1. Clear title and overview
2. Prerequisites and requirements
3. Learning objectives
4. Step-by-step instructions
5. Screenshots/examples (descriptions)
6. Troubleshooting section
7. Next steps/further learning

INSTRUCTIONAL DESIGN:
- Use clear, actionable language
- Break complex tasks into simple steps
- Include checkpoints and validation
- Anticipate common mistakes
- Provide alternative approaches
- End with practice exercises

{additional_instructions}
"#;

const NEWSLETTER_TEMPLATE: &str = r#"
You are a newsletter editor curating content that subscribers look forward to.

Write a {length_description} issue of {newsletter_name} about "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Issue focus: {issue_focus}
- Word count: {word_count_range}

STRUCTURE:
1. Catchy issue headline
2. Short editor's introduction
3. Featured story
4. Quick hits and curated links
5. Key takeaway for the reader
6. Call-to-action: {call_to_action}

EDITORIAL GUIDELINES:
- Lead with the most valuable insight
- Keep sections short and skimmable
- Use a consistent, recognizable voice
- Link ideas back to the reader's goals
- Avoid filler and repetition
- Close with something to look forward to

{additional_instructions}
"#;

const PRODUCT_DESCRIPTION_TEMPLATE: &str = r#"
You are an e-commerce copywriter writing product descriptions that convert.

Write a {length_description} product description for "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Product category: {product_category}
- Highlight: {key_features}
- Include SEO optimization: {seo_requirements}

STRUCTURE:
1. Benefit-driven product headline
2. Opening line that sparks desire
3. Key features as scannable bullet points
4. How the product solves the buyer's problem
5. Specifications and details
6. Call-to-action: {call_to_action}

COPYWRITING GUIDELINES:
- Translate features into benefits
- Use sensory and concrete language
- Answer likely buyer questions
- Keep sentences short and punchy
- Avoid unverifiable superlatives
- Match the vocabulary of the target buyer

{additional_instructions}
"#;

const CASE_STUDY_TEMPLATE: &str = r#"
You are a business writer documenting customer success stories.

Write a {length_description} case study about "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Client industry: {client_industry}
- Results focus: {results_focus}

STRUCTURE:
1. Results-oriented headline
2. Client background
3. The challenge
4. The solution and implementation
5. Results with concrete metrics
6. Client testimonial
7. Call-to-action: {call_to_action}

STORYTELLING GUIDELINES:
- Frame the client as the hero
- Quantify outcomes wherever possible
- Show before and after clearly
- Keep technical detail relevant to the reader
- Use quotes to add credibility
- End with lessons others can apply

{additional_instructions}
"#;

const PRESS_RELEASE_TEMPLATE: &str = r#"
You are a public relations specialist writing newsworthy press releases.

Write a {length_description} press release from {organization} about "{topic}".

REQUIREMENTS:
- Tone: {tone}
- Target audience: {target_audience}
- Release timing: {release_timing}
- Word count: {word_count_range}

STRUCTURE:
1. Release line and dateline
2. Newsworthy headline
3. Lead paragraph answering who, what, when, where and why
4. Supporting details and context
5. Spokesperson quote
6. Boilerplate about the organization
7. Media contact information

PRESS WRITING STANDARDS:
- Use the inverted pyramid
- Write in the third person
- Keep claims factual and verifiable
- Avoid marketing hype
- Keep paragraphs short
- Follow AP style where possible

{additional_instructions}
"#;

fn builtin_template(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Blog => BLOG_TEMPLATE,
        ContentType::Social => SOCIAL_TEMPLATE,
        ContentType::Article => ARTICLE_TEMPLATE,
        ContentType::Marketing => MARKETING_TEMPLATE,
        ContentType::Email => EMAIL_TEMPLATE,
        ContentType::Newsletter => NEWSLETTER_TEMPLATE,
        ContentType::ProductDescription => PRODUCT_DESCRIPTION_TEMPLATE,
        ContentType::CaseStudy => CASE_STUDY_TEMPLATE,
        ContentType::Tutorial => TUTORIAL_TEMPLATE,
        ContentType::PressRelease => PRESS_RELEASE_TEMPLATE,
    }
}

/// Base templates keyed by content type.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<ContentType, Cow<'static, str>>,
}

impl TemplateSet {
    /// A template for every content type.
    #[must_use]
    pub fn builtin() -> Self {
        ContentType::all()
            .into_iter()
            .fold(Self::empty(), |set, content_type| {
                set.with(content_type, builtin_template(content_type))
            })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Register or replace the template for a content type.
    #[must_use]
    pub fn with(
        mut self,
        content_type: ContentType,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.templates.insert(content_type, template.into());
        self
    }

    /// Remove the template for a content type.
    #[must_use]
    pub fn without(mut self, content_type: ContentType) -> Self {
        self.templates.remove(&content_type);
        self
    }

    pub fn get(&self, content_type: ContentType) -> Result<&str, ContentError> {
        self.templates
            .get(&content_type)
            .map(AsRef::as_ref)
            .ok_or(ContentError::UnsupportedContentType(content_type))
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substitute `{name}` placeholders. `{{` and `}}` produce literal braces.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> Result<String, ContentError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(ContentError::TemplateRender(format!(
                                "Unterminated placeholder '{{{name}'"
                            )));
                        }
                    }
                }
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| {
                        ContentError::TemplateRender(format!("Unknown placeholder '{{{name}}}'"))
                    })?;
                output.push_str(value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '}' => {
                return Err(ContentError::TemplateRender(
                    "Single '}' encountered in template".to_string(),
                ));
            }
            c => output.push(c),
        }
    }

    Ok(output)
}
