//! Placeholders that only some templates use.
//!
//! Each content type owns one record; every field has a documented default
//! so a request never needs to supply them.

use super::ContentType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialFields {
    /// Default: "general social media"
    pub platform: String,
    /// Default: "280 characters"
    pub character_limit: String,
    /// Default: "Include 3-5 relevant hashtags"
    pub hashtag_requirements: String,
}

impl Default for SocialFields {
    fn default() -> Self {
        Self {
            platform: "general social media".to_string(),
            character_limit: "280 characters".to_string(),
            hashtag_requirements: "Include 3-5 relevant hashtags".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingFields {
    /// Default: "generate leads"
    pub marketing_goal: String,
}

impl Default for MarketingFields {
    fn default() -> Self {
        Self {
            marketing_goal: "generate leads".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFields {
    /// Default: "newsletter"
    pub email_type: String,
    /// Default: "inform and engage"
    pub email_goal: String,
}

impl Default for EmailFields {
    fn default() -> Self {
        Self {
            email_type: "newsletter".to_string(),
            email_goal: "inform and engage".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    /// Default: "informational"
    pub article_type: String,
    /// Default: "well-researched"
    pub research_requirements: String,
}

impl Default for ArticleFields {
    fn default() -> Self {
        Self {
            article_type: "informational".to_string(),
            research_requirements: "well-researched".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialFields {
    /// Default: "beginner"
    pub skill_level: String,
    /// Default: "understand the topic"
    pub learning_objectives: String,
    /// Default: "15 minutes"
    pub estimated_time: String,
    /// Default: "none"
    pub required_tools: String,
}

impl Default for TutorialFields {
    fn default() -> Self {
        Self {
            skill_level: "beginner".to_string(),
            learning_objectives: "understand the topic".to_string(),
            estimated_time: "15 minutes".to_string(),
            required_tools: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterFields {
    /// Default: "our newsletter"
    pub newsletter_name: String,
    /// Default: "the latest insights and updates"
    pub issue_focus: String,
}

impl Default for NewsletterFields {
    fn default() -> Self {
        Self {
            newsletter_name: "our newsletter".to_string(),
            issue_focus: "the latest insights and updates".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescriptionFields {
    /// Default: "general"
    pub product_category: String,
    /// Default: "the most important features and benefits"
    pub key_features: String,
}

impl Default for ProductDescriptionFields {
    fn default() -> Self {
        Self {
            product_category: "general".to_string(),
            key_features: "the most important features and benefits".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyFields {
    /// Default: "business"
    pub client_industry: String,
    /// Default: "measurable outcomes and lessons learned"
    pub results_focus: String,
}

impl Default for CaseStudyFields {
    fn default() -> Self {
        Self {
            client_industry: "business".to_string(),
            results_focus: "measurable outcomes and lessons learned".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressReleaseFields {
    /// Default: "the company"
    pub organization: String,
    /// Default: "for immediate release"
    pub release_timing: String,
}

impl Default for PressReleaseFields {
    fn default() -> Self {
        Self {
            organization: "the company".to_string(),
            release_timing: "for immediate release".to_string(),
        }
    }
}

/// Type-specific template values, one variant per [`ContentType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum TypeFields {
    Blog,
    Social(SocialFields),
    Article(ArticleFields),
    Marketing(MarketingFields),
    Email(EmailFields),
    Newsletter(NewsletterFields),
    ProductDescription(ProductDescriptionFields),
    CaseStudy(CaseStudyFields),
    Tutorial(TutorialFields),
    PressRelease(PressReleaseFields),
}

impl TypeFields {
    /// Defaults for the given content type.
    #[must_use]
    pub fn defaults_for(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Blog => Self::Blog,
            ContentType::Social => Self::Social(SocialFields::default()),
            ContentType::Article => Self::Article(ArticleFields::default()),
            ContentType::Marketing => Self::Marketing(MarketingFields::default()),
            ContentType::Email => Self::Email(EmailFields::default()),
            ContentType::Newsletter => Self::Newsletter(NewsletterFields::default()),
            ContentType::ProductDescription => {
                Self::ProductDescription(ProductDescriptionFields::default())
            }
            ContentType::CaseStudy => Self::CaseStudy(CaseStudyFields::default()),
            ContentType::Tutorial => Self::Tutorial(TutorialFields::default()),
            ContentType::PressRelease => Self::PressRelease(PressReleaseFields::default()),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Blog => ContentType::Blog,
            Self::Social(_) => ContentType::Social,
            Self::Article(_) => ContentType::Article,
            Self::Marketing(_) => ContentType::Marketing,
            Self::Email(_) => ContentType::Email,
            Self::Newsletter(_) => ContentType::Newsletter,
            Self::ProductDescription(_) => ContentType::ProductDescription,
            Self::CaseStudy(_) => ContentType::CaseStudy,
            Self::Tutorial(_) => ContentType::Tutorial,
            Self::PressRelease(_) => ContentType::PressRelease,
        }
    }

    /// Placeholder name/value pairs contributed to the template.
    #[must_use]
    pub fn placeholders(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Blog => vec![],
            Self::Social(fields) => vec![
                ("platform", fields.platform.as_str()),
                ("character_limit", fields.character_limit.as_str()),
                ("hashtag_requirements", fields.hashtag_requirements.as_str()),
            ],
            Self::Article(fields) => vec![
                ("article_type", fields.article_type.as_str()),
                ("research_requirements", fields.research_requirements.as_str()),
            ],
            Self::Marketing(fields) => vec![("marketing_goal", fields.marketing_goal.as_str())],
            Self::Email(fields) => vec![
                ("email_type", fields.email_type.as_str()),
                ("email_goal", fields.email_goal.as_str()),
            ],
            Self::Newsletter(fields) => vec![
                ("newsletter_name", fields.newsletter_name.as_str()),
                ("issue_focus", fields.issue_focus.as_str()),
            ],
            Self::ProductDescription(fields) => vec![
                ("product_category", fields.product_category.as_str()),
                ("key_features", fields.key_features.as_str()),
            ],
            Self::CaseStudy(fields) => vec![
                ("client_industry", fields.client_industry.as_str()),
                ("results_focus", fields.results_focus.as_str()),
            ],
            Self::Tutorial(fields) => vec![
                ("skill_level", fields.skill_level.as_str()),
                ("learning_objectives", fields.learning_objectives.as_str()),
                ("estimated_time", fields.estimated_time.as_str()),
                ("required_tools", fields.required_tools.as_str()),
            ],
            Self::PressRelease(fields) => vec![
                ("organization", fields.organization.as_str()),
                ("release_timing", fields.release_timing.as_str()),
            ],
        }
    }
}
