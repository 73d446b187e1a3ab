use serde::{Deserialize, Serialize};

/// Sampling configuration forwarded to the model endpoint.
///
/// `seed` is omitted from the serialized form when absent; it is never sent as
/// `null` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl SamplingConfig {
    pub const fn new(temperature: f64, max_output_tokens: u32, top_p: f64) -> Self {
        Self {
            temperature,
            max_output_tokens,
            top_p,
            seed: None,
        }
    }

    pub const fn with_seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_seed_is_not_serialized() {
        let json = serde_json::to_value(SamplingConfig::new(0.7, 250, 0.9)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("seed"));
        assert_eq!(obj["maxOutputTokens"], 250);
        assert_eq!(obj["topP"], 0.9);
    }

    #[test]
    fn present_seed_is_serialized() {
        let config = SamplingConfig::new(0.2, 10, 1.0).with_seed(Some(0));
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["seed"], 0);
    }
}
