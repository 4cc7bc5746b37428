//! Reference material for planning content: industry profiles, seasonal
//! themes, viral patterns and user-saved templates.

use crate::{errors::CatalogError, request::ContentType, Tone};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Vocabulary and audience hints for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub tone_preferences: &'static [Tone],
    pub common_topics: &'static [&'static str],
    pub audience_segments: &'static [&'static str],
}

const INDUSTRY_PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        name: "technology",
        keywords: &[
            "innovation",
            "digital transformation",
            "automation",
            "AI",
            "machine learning",
        ],
        tone_preferences: &[Tone::Professional, Tone::Authoritative],
        common_topics: &[
            "software development",
            "cybersecurity",
            "cloud computing",
            "data analytics",
        ],
        audience_segments: &[
            "developers",
            "IT professionals",
            "tech executives",
            "early adopters",
        ],
    },
    IndustryProfile {
        name: "healthcare",
        keywords: &[
            "patient care",
            "medical research",
            "healthcare technology",
            "wellness",
            "treatment",
        ],
        tone_preferences: &[Tone::Professional, Tone::Authoritative, Tone::Friendly],
        common_topics: &[
            "patient outcomes",
            "medical devices",
            "healthcare policy",
            "preventive care",
        ],
        audience_segments: &[
            "healthcare professionals",
            "patients",
            "medical researchers",
            "administrators",
        ],
    },
    IndustryProfile {
        name: "finance",
        keywords: &[
            "investment",
            "financial planning",
            "risk management",
            "returns",
            "portfolio",
        ],
        tone_preferences: &[Tone::Professional, Tone::Formal, Tone::Authoritative],
        common_topics: &[
            "market analysis",
            "investment strategies",
            "financial planning",
            "regulatory compliance",
        ],
        audience_segments: &[
            "investors",
            "financial advisors",
            "business owners",
            "individuals",
        ],
    },
    IndustryProfile {
        name: "education",
        keywords: &[
            "learning",
            "education",
            "skills development",
            "training",
            "knowledge",
        ],
        tone_preferences: &[Tone::Friendly, Tone::Conversational, Tone::Professional],
        common_topics: &[
            "online learning",
            "skill development",
            "educational technology",
            "career advancement",
        ],
        audience_segments: &[
            "students",
            "educators",
            "professionals",
            "lifelong learners",
        ],
    },
    IndustryProfile {
        name: "marketing",
        keywords: &[
            "brand awareness",
            "customer engagement",
            "conversion",
            "ROI",
            "digital marketing",
        ],
        tone_preferences: &[Tone::Creative, Tone::Conversational, Tone::Professional],
        common_topics: &[
            "content marketing",
            "social media",
            "SEO",
            "email marketing",
            "analytics",
        ],
        audience_segments: &[
            "marketers",
            "business owners",
            "agencies",
            "entrepreneurs",
        ],
    },
];

#[must_use]
pub fn industry_profiles() -> &'static [IndustryProfile] {
    INDUSTRY_PROFILES
}

/// Look up a profile by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn industry_profile(name: &str) -> Option<&'static IndustryProfile> {
    let name = name.trim();
    INDUSTRY_PROFILES
        .iter()
        .find(|profile| profile.name.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonalTheme {
    pub name: &'static str,
    pub themes: &'static [&'static str],
    pub angles: &'static [&'static str],
    pub emotional_triggers: &'static [&'static str],
}

const SEASONAL_THEMES: &[SeasonalTheme] = &[
    SeasonalTheme {
        name: "new_year",
        themes: &[
            "resolutions",
            "fresh start",
            "goal setting",
            "planning",
            "reflection",
        ],
        angles: &[
            "year-end review",
            "predictions",
            "planning guides",
            "resolution tips",
        ],
        emotional_triggers: &["motivation", "optimism", "determination", "reflection"],
    },
    SeasonalTheme {
        name: "spring",
        themes: &[
            "renewal",
            "growth",
            "fresh beginnings",
            "cleaning",
            "optimization",
        ],
        angles: &[
            "spring cleaning",
            "new beginnings",
            "growth strategies",
            "refreshing approaches",
        ],
        emotional_triggers: &["energy", "renewal", "hope", "activity"],
    },
    SeasonalTheme {
        name: "back_to_school",
        themes: &[
            "learning",
            "preparation",
            "organization",
            "skill building",
            "knowledge",
        ],
        angles: &[
            "learning resources",
            "skill development",
            "productivity tips",
            "educational content",
        ],
        emotional_triggers: &["curiosity", "preparation", "ambition", "growth"],
    },
    SeasonalTheme {
        name: "holiday_season",
        themes: &[
            "gratitude",
            "giving",
            "reflection",
            "celebration",
            "community",
        ],
        angles: &[
            "year-end summaries",
            "gift guides",
            "reflection pieces",
            "gratitude content",
        ],
        emotional_triggers: &["warmth", "gratitude", "generosity", "reflection"],
    },
];

#[must_use]
pub fn seasonal_themes() -> &'static [SeasonalTheme] {
    SEASONAL_THEMES
}

/// A recurring shape of content that tends to spread well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViralPattern {
    pub name: &'static str,
    pub structure: &'static str,
    /// Item counts that work well for list formats. Empty for other patterns.
    pub optimal_numbers: &'static [u32],
    pub hooks: &'static [&'static str],
    pub engagement_triggers: &'static [&'static str],
}

const VIRAL_PATTERNS: &[ViralPattern] = &[
    ViralPattern {
        name: "listicles",
        structure: "numbered list format",
        optimal_numbers: &[5, 7, 10, 15, 21],
        hooks: &["X things", "X secrets", "X mistakes", "X ways"],
        engagement_triggers: &["curiosity gaps", "practical value", "easy consumption"],
    },
    ViralPattern {
        name: "how_to_guides",
        structure: "step-by-step instructions",
        optimal_numbers: &[],
        hooks: &["How to", "The ultimate guide to", "Master X in Y steps"],
        engagement_triggers: &["problem-solving", "skill building", "immediate value"],
    },
    ViralPattern {
        name: "contrarian_takes",
        structure: "challenge common beliefs",
        optimal_numbers: &[],
        hooks: &[
            "Why X is wrong",
            "The truth about X",
            "What nobody tells you about X",
        ],
        engagement_triggers: &["curiosity", "controversy", "insider knowledge"],
    },
    ViralPattern {
        name: "behind_the_scenes",
        structure: "insider perspective",
        optimal_numbers: &[],
        hooks: &[
            "Inside look at",
            "What really happens",
            "Behind the scenes of",
        ],
        engagement_triggers: &["exclusivity", "authenticity", "human connection"],
    },
];

#[must_use]
pub fn viral_patterns() -> &'static [ViralPattern] {
    VIRAL_PATTERNS
}

/// A user-defined template stored as one JSON file. Fields other than the
/// known ones are kept as they were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structure: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_practices: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            structure: Vec::new(),
            best_practices: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// Custom templates kept as `<name>.json` files in one directory.
pub struct CustomTemplateStore {
    dir: PathBuf,
    templates: BTreeMap<String, CustomTemplate>,
}

impl CustomTemplateStore {
    /// Open `dir`, creating it when missing, and load every `*.json` file in
    /// it. Files that cannot be read or parsed are logged and skipped.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| io_error(&dir, source))?;

        let mut templates = BTreeMap::new();
        for entry in fs::read_dir(&dir).map_err(|source| io_error(&dir, source))? {
            let path = entry.map_err(|source| io_error(&dir, source))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match read_template(&path) {
                Ok(template) => {
                    templates.insert(name.to_string(), template);
                }
                Err(err) => warn!(error = %err, "Skipping template file"),
            }
        }

        info!(dir = %dir.display(), count = templates.len(), "Custom templates loaded");
        Ok(Self { dir, templates })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CustomTemplate> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Write `template` to `<name>.json`, replacing any previous file, and
    /// keep it in memory.
    pub fn save(&mut self, name: &str, template: CustomTemplate) -> Result<(), CatalogError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CatalogError::InvalidName(name.to_string()));
        }

        let path = self.dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(&template).map_err(|source| {
            CatalogError::Json {
                path: path.display().to_string(),
                source,
            }
        })?;
        fs::write(&path, json).map_err(|source| io_error(&path, source))?;

        info!(name, "Custom template saved");
        self.templates.insert(name.to_string(), template);
        Ok(())
    }

    /// Save the stock blog and social templates unless files with those
    /// names already exist.
    pub fn install_defaults(&mut self) -> Result<(), CatalogError> {
        for (name, template) in default_templates() {
            if !self.templates.contains_key(name) {
                self.save(name, template)?;
            }
        }
        Ok(())
    }
}

fn read_template(path: &Path) -> Result<CustomTemplate, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn io_error(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_templates() -> [(&'static str, CustomTemplate); 2] {
    let blog = CustomTemplate {
        name: "Professional Blog Post".to_string(),
        content_type: Some(ContentType::Blog),
        structure: strings(&[
            "Compelling headline with benefit",
            "Hook that addresses reader's pain point",
            "Brief overview of what they'll learn",
            "Main content with subheadings",
            "Actionable takeaways",
            "Conclusion with next steps",
            "Clear call-to-action",
        ]),
        best_practices: strings(&[
            "Use H2 and H3 headings for structure",
            "Include bullet points for readability",
            "Add examples and case studies",
            "Optimize for featured snippets",
            "Include internal and external links",
        ]),
        extra: extra_fields(json!({
            "word_count_ranges": {
                "short": "500-800",
                "medium": "1000-1500",
                "long": "2000-3000"
            }
        })),
    };

    let social = CustomTemplate {
        name: "Engaging Social Media Post".to_string(),
        content_type: Some(ContentType::Social),
        structure: strings(&[
            "Attention-grabbing opening",
            "Value-driven main content",
            "Call-to-action",
            "Relevant hashtags",
        ]),
        best_practices: Vec::new(),
        extra: extra_fields(json!({
            "platforms": {
                "twitter": { "character_limit": 280, "hashtag_limit": 2 },
                "linkedin": { "character_limit": 3000, "hashtag_limit": 5 },
                "facebook": { "character_limit": 2000, "hashtag_limit": 3 },
                "instagram": { "character_limit": 2200, "hashtag_limit": 10 }
            },
            "engagement_tactics": [
                "Ask questions",
                "Use emojis strategically",
                "Include statistics or facts",
                "Share personal experiences",
                "Create urgency or FOMO"
            ]
        })),
    };

    [("blog_template", blog), ("social_template", social)]
}

fn extra_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_industry_profile_ignoring_case() {
        let profile = industry_profile(" Healthcare ").expect("known industry");
        assert_eq!(profile.name, "healthcare");
        assert_eq!(
            profile.tone_preferences,
            [Tone::Professional, Tone::Authoritative, Tone::Friendly]
        );
        assert!(industry_profile("agriculture").is_none());
        assert_eq!(industry_profiles().len(), 5);
    }

    #[test]
    fn reference_tables_are_populated() {
        let names: Vec<_> = seasonal_themes().iter().map(|theme| theme.name).collect();
        assert_eq!(
            names,
            ["new_year", "spring", "back_to_school", "holiday_season"]
        );

        let listicles = &viral_patterns()[0];
        assert_eq!(listicles.optimal_numbers, [5, 7, 10, 15, 21]);
        assert!(viral_patterns()[1..]
            .iter()
            .all(|pattern| pattern.optimal_numbers.is_empty()));
    }

    #[test]
    fn saved_templates_are_loaded_on_open() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = CustomTemplateStore::open(dir.path().join("templates")).expect("opens");
        assert!(store.is_empty());

        let mut template = CustomTemplate::new("Launch announcement");
        template.content_type = Some(ContentType::PressRelease);
        template.structure = vec!["Headline".to_string(), "Quote".to_string()];
        template
            .extra
            .insert("embargo".to_string(), Value::Bool(true));
        store.save("launch", template.clone()).expect("saves");

        let reopened = CustomTemplateStore::open(store.dir()).expect("reopens");
        assert_eq!(reopened.get("launch"), Some(&template));
        assert_eq!(reopened.names().collect::<Vec<_>>(), ["launch"]);
    }

    #[test]
    fn unreadable_files_are_skipped() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("broken.json"), "{ not json").expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");
        fs::write(
            dir.path().join("minimal.json"),
            r#"{ "name": "Minimal", "tone": "friendly" }"#,
        )
        .expect("write");

        let store = CustomTemplateStore::open(dir.path()).expect("opens");
        assert_eq!(store.len(), 1);
        let minimal = store.get("minimal").expect("loaded");
        assert_eq!(minimal.content_type, None);
        assert_eq!(minimal.extra.get("tone"), Some(&json!("friendly")));
    }

    #[test]
    fn rejects_names_that_are_not_plain_file_stems() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = CustomTemplateStore::open(dir.path()).expect("opens");

        for name in ["", "../escape", "a b", "nested/name"] {
            assert!(matches!(
                store.save(name, CustomTemplate::new("x")),
                Err(CatalogError::InvalidName(_))
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn installs_defaults_without_overwriting() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = CustomTemplateStore::open(dir.path()).expect("opens");
        store
            .save("blog_template", CustomTemplate::new("Mine"))
            .expect("saves");

        store.install_defaults().expect("installs");

        assert_eq!(store.get("blog_template").map(|t| t.name.as_str()), Some("Mine"));
        let social = store.get("social_template").expect("installed");
        assert_eq!(social.content_type, Some(ContentType::Social));
        assert_eq!(
            social.extra["platforms"]["twitter"]["character_limit"],
            json!(280)
        );
    }
}
