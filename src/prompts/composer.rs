use crate::types::PromptInstructionFlags;

const GENERATION_HEADER: &str = "Generate text based on the following prompt:";
const SUMMARIZATION_HEADER: &str = "Summarize the following text concisely:";
const IMPROVEMENT_HEADER: &str =
    "Improve the following text. Make it clearer, more concise, and engaging:";

pub const PRESENCE_POSITIVE_CLAUSE: &str =
    "Strive to introduce new and diverse topics or concepts in your response.";
pub const PRESENCE_NEGATIVE_CLAUSE: &str =
    "Focus on elaborating on the topics and concepts already present in the prompt or conversation.";
pub const FREQUENCY_POSITIVE_CLAUSE: &str =
    "Make an effort to avoid repeating the same phrases or words unnecessarily.";
pub const FREQUENCY_NEGATIVE_CLAUSE: &str =
    "You may repeat phrases or words if it enhances emphasis or flows naturally with the context.";

/// A finished prompt plus the template variables it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub text: String,
    /// Instruction flags for generation; `None` for flows without conditional clauses.
    pub variables: Option<PromptInstructionFlags>,
}

/// Render the generation prompt.
///
/// Layout: header, blank line, prompt, blank line, the presence clauses, a
/// separating blank line, then the frequency clauses. Each clause is its own
/// line and is present only when its flag is set.
pub fn compose_generation(prompt: &str, flags: &PromptInstructionFlags) -> ComposedPrompt {
    let mut text = String::with_capacity(GENERATION_HEADER.len() + prompt.len() + 256);
    text.push_str(GENERATION_HEADER);
    text.push_str("\n\n");
    text.push_str(prompt);
    text.push_str("\n\n");

    let presence = [
        (flags.presence_penalty_positive, PRESENCE_POSITIVE_CLAUSE),
        (flags.presence_penalty_negative, PRESENCE_NEGATIVE_CLAUSE),
    ];
    let frequency = [
        (flags.frequency_penalty_positive, FREQUENCY_POSITIVE_CLAUSE),
        (flags.frequency_penalty_negative, FREQUENCY_NEGATIVE_CLAUSE),
    ];

    push_clauses(&mut text, &presence);
    text.push('\n');
    push_clauses(&mut text, &frequency);

    ComposedPrompt {
        text,
        variables: Some(*flags),
    }
}

/// Render the summarization prompt.
pub fn compose_summarization(text: &str) -> ComposedPrompt {
    ComposedPrompt {
        text: format!("{SUMMARIZATION_HEADER}\n\n{text}"),
        variables: None,
    }
}

/// Render the improvement prompt.
pub fn compose_improvement(text: &str) -> ComposedPrompt {
    ComposedPrompt {
        text: format!("{IMPROVEMENT_HEADER}\n\n{text}"),
        variables: None,
    }
}

fn push_clauses(out: &mut String, clauses: &[(bool, &str)]) {
    for (enabled, clause) in clauses {
        if *enabled {
            out.push_str(clause);
            out.push('\n');
        }
    }
}
