use serde::{Deserialize, Serialize};

/// Name of the single string field each flow expects back from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    GeneratedText,
    Summary,
    ImprovedText,
}

impl OutputField {
    /// JSON key of the field.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::GeneratedText => "generatedText",
            Self::Summary => "summary",
            Self::ImprovedText => "improvedText",
        }
    }

    /// Description advertised to the model in the response schema.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::GeneratedText => "The generated text.",
            Self::Summary => "The summarized text.",
            Self::ImprovedText => "The improved text.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub generated_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationOutput {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementOutput {
    pub improved_text: String,
}
