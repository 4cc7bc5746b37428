//! Starting points offered before a request is written.

use crate::request::ContentType;
use serde::Serialize;

/// A named outline of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStructure {
    pub name: &'static str,
    pub sections: &'static [&'static str],
}

const BLOG_STRUCTURES: &[ContentStructure] = &[
    ContentStructure {
        name: "listicle",
        sections: &[
            "Compelling headline with number",
            "Brief introduction explaining the value",
            "Numbered list items with detailed explanations",
            "Conclusion summarizing key points",
            "Call-to-action",
        ],
    },
    ContentStructure {
        name: "how_to",
        sections: &[
            "Problem statement",
            "Overview of solution",
            "Step-by-step instructions",
            "Tips and best practices",
            "Common mistakes to avoid",
            "Conclusion with next steps",
        ],
    },
    ContentStructure {
        name: "comparison",
        sections: &[
            "Introduction to options being compared",
            "Criteria for comparison",
            "Detailed comparison sections",
            "Pros and cons analysis",
            "Recommendation",
            "Call-to-action",
        ],
    },
];

const MARKETING_FRAMEWORKS: &[ContentStructure] = &[
    ContentStructure {
        name: "aida",
        sections: &["Attention", "Interest", "Desire", "Action"],
    },
    ContentStructure {
        name: "pas",
        sections: &["Problem", "Agitation", "Solution"],
    },
    ContentStructure {
        name: "before_after_bridge",
        sections: &[
            "Before (current state)",
            "After (desired state)",
            "Bridge (solution)",
        ],
    },
    ContentStructure {
        name: "features_advantages_benefits",
        sections: &["Features", "Advantages", "Benefits", "Proof"],
    },
];

/// Structures registered for a content type. Only blogs have any.
#[must_use]
pub fn structures_for(content_type: ContentType) -> &'static [ContentStructure] {
    match content_type {
        ContentType::Blog => BLOG_STRUCTURES,
        _ => &[],
    }
}

/// Copywriting frameworks. These are not offered as marketing structures.
#[must_use]
pub fn marketing_frameworks() -> &'static [ContentStructure] {
    MARKETING_FRAMEWORKS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSuggestions {
    pub titles: Vec<String>,
    pub keywords: Vec<String>,
    pub structures: Vec<String>,
    pub calls_to_action: Vec<String>,
}

const MAX_KEYWORD_SUGGESTIONS: usize = 10;

pub(crate) fn suggest(topic: &str, content_type: ContentType) -> ContentSuggestions {
    ContentSuggestions {
        titles: title_suggestions(topic, content_type),
        keywords: keyword_suggestions(topic),
        structures: structures_for(content_type)
            .iter()
            .map(|structure| structure.name.to_string())
            .collect(),
        calls_to_action: cta_suggestions(content_type)
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

fn title_suggestions(topic: &str, content_type: ContentType) -> Vec<String> {
    match content_type {
        ContentType::Blog => vec![
            format!("The Complete Guide to {topic}"),
            format!("Everything You Need to Know About {topic}"),
            format!("Mastering {topic}: A Step-by-Step Guide"),
            format!("The Ultimate {topic} Strategy for 2024"),
            format!("How to Excel at {topic} (Even as a Beginner)"),
        ],
        ContentType::Social => vec![
            format!("Quick tip about {topic} 💡"),
            format!("The truth about {topic} that nobody talks about"),
            format!("Why {topic} matters more than you think"),
            format!("Hot take on {topic} 🔥"),
            format!("The {topic} game-changer you need to know"),
        ],
        ContentType::Marketing => vec![
            format!("Transform Your Business with {topic}"),
            format!("Unlock the Power of {topic}"),
            format!("Why {topic} is Your Secret Weapon"),
            format!("The {topic} Solution You've Been Looking For"),
            format!("Get Results Fast with {topic}"),
        ],
        _ => vec![format!("Understanding {topic}")],
    }
}

fn keyword_suggestions(topic: &str) -> Vec<String> {
    let words: Vec<String> = topic.split_whitespace().map(str::to_lowercase).collect();
    let variants = words.iter().flat_map(|word| {
        [
            format!("{word} guide"),
            format!("{word} tips"),
            format!("{word} strategy"),
            format!("{word} best practices"),
            format!("how to {word}"),
        ]
    });

    words
        .iter()
        .cloned()
        .chain(variants)
        .take(MAX_KEYWORD_SUGGESTIONS)
        .collect()
}

fn cta_suggestions(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Blog => &[
            "What's your experience with this topic? Share in the comments!",
            "Ready to get started? Download our free guide.",
            "Found this helpful? Share it with your network!",
            "Want more tips like this? Subscribe to our newsletter.",
            "Have questions? Contact our team for personalized advice.",
        ],
        ContentType::Social => &[
            "Double-tap if you agree! 👍",
            "Save this post for later 📌",
            "Tag someone who needs to see this!",
            "What do you think? Comment below! 👇",
            "Follow for more tips like this! ✨",
        ],
        ContentType::Marketing => &[
            "Get started with a free consultation today!",
            "Claim your limited-time offer now!",
            "Join thousands of satisfied customers!",
            "Don't wait - secure your spot today!",
            "Experience the difference for yourself!",
        ],
        _ => &["Take action today!"],
    }
}
