use serde::{Deserialize, Serialize};

/// Instruction switches derived from the penalty values of a generation request.
///
/// The model endpoint does not receive the penalties themselves; instead each
/// sign turns on one steering sentence in the composed prompt. Each pair is
/// mutually exclusive and both members are `false` when the penalty is exactly 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptInstructionFlags {
    pub presence_penalty_positive: bool,
    pub presence_penalty_negative: bool,
    pub frequency_penalty_positive: bool,
    pub frequency_penalty_negative: bool,
}

impl PromptInstructionFlags {
    /// Derive the flags with strict sign tests.
    pub fn from_penalties(presence_penalty: f64, frequency_penalty: f64) -> Self {
        Self {
            presence_penalty_positive: presence_penalty > 0.0,
            presence_penalty_negative: presence_penalty < 0.0,
            frequency_penalty_positive: frequency_penalty > 0.0,
            frequency_penalty_negative: frequency_penalty < 0.0,
        }
    }

    /// True when no steering sentence will be rendered.
    pub const fn is_empty(&self) -> bool {
        !(self.presence_penalty_positive
            || self.presence_penalty_negative
            || self.frequency_penalty_positive
            || self.frequency_penalty_negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_penalties_set_no_flags() {
        let flags = PromptInstructionFlags::from_penalties(0.0, 0.0);
        assert!(flags.is_empty());
        assert_eq!(flags, PromptInstructionFlags::default());
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        let flags = PromptInstructionFlags::from_penalties(-0.0, -0.0);
        assert!(flags.is_empty());
    }

    #[test]
    fn each_pair_is_mutually_exclusive() {
        for value in [-2.0, -1.5, -0.01, 0.01, 0.5, 2.0] {
            let flags = PromptInstructionFlags::from_penalties(value, value);
            assert!(flags.presence_penalty_positive ^ flags.presence_penalty_negative);
            assert!(flags.frequency_penalty_positive ^ flags.frequency_penalty_negative);
            assert_eq!(flags.presence_penalty_positive, value > 0.0);
            assert_eq!(flags.frequency_penalty_negative, value < 0.0);
        }
    }

    #[test]
    fn serializes_with_template_variable_names() {
        let flags = PromptInstructionFlags::from_penalties(1.0, -1.0);
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["presencePenaltyPositive"], true);
        assert_eq!(json["frequencyPenaltyNegative"], true);
        assert_eq!(json["presencePenaltyNegative"], false);
    }
}
