use crate::request::ContentRequest;

/// A line of the `{additional_instructions}` block, derived from the request.
#[derive(Debug, Clone)]
pub enum InstructionParam {
    String(String),
    Func(fn(&ContentRequest) -> Option<String>),
}

impl InstructionParam {
    pub fn as_string(&self, request: &ContentRequest) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Func(f) => f(request),
        }
    }
}

impl From<String> for InstructionParam {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for InstructionParam {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

fn brand_voice(request: &ContentRequest) -> Option<String> {
    request
        .brand_voice()
        .map(|voice| format!("BRAND VOICE: {voice}"))
}

fn industry(request: &ContentRequest) -> Option<String> {
    request
        .industry()
        .map(|industry| format!("INDUSTRY CONTEXT: Tailor content for the {industry} industry."))
}

fn include_examples(request: &ContentRequest) -> Option<String> {
    request
        .include_examples()
        .then(|| "Include relevant real-world examples and case studies.".to_string())
}

fn custom_instructions(request: &ContentRequest) -> Option<String> {
    request
        .custom_instructions()
        .map(|custom| format!("CUSTOM REQUIREMENTS: {custom}"))
}

/// Instructions applied to every request, in output order.
#[must_use]
pub fn default_instructions() -> Vec<InstructionParam> {
    vec![
        InstructionParam::Func(brand_voice),
        InstructionParam::Func(industry),
        InstructionParam::Func(include_examples),
        InstructionParam::Func(custom_instructions),
    ]
}

pub fn get_instructions(instructions: &[InstructionParam], request: &ContentRequest) -> String {
    instructions
        .iter()
        .filter_map(|param| param.as_string(request))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ContentType, Length, Tone};

    #[test]
    fn joins_present_instructions_in_order() {
        let request =
            ContentRequest::builder("Budgeting", ContentType::Blog, Tone::Friendly, Length::Short)
                .custom_instructions("Mention spreadsheets")
                .brand_voice("Plainspoken")
                .include_examples(true)
                .industry("fintech")
                .build()
                .expect("valid request");

        assert_eq!(
            get_instructions(&default_instructions(), &request),
            "BRAND VOICE: Plainspoken\n\
             INDUSTRY CONTEXT: Tailor content for the fintech industry.\n\
             Include relevant real-world examples and case studies.\n\
             CUSTOM REQUIREMENTS: Mention spreadsheets"
        );
    }

    #[test]
    fn empty_when_nothing_applies() {
        let request =
            ContentRequest::builder("Budgeting", ContentType::Blog, Tone::Friendly, Length::Short)
                .build()
                .expect("valid request");

        assert_eq!(get_instructions(&default_instructions(), &request), "");
    }
}
