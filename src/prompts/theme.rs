use std::str::FromStr;

use crate::error::AssistantError;

/// Selection value meaning "no theme".
pub const NO_THEME: &str = "none";

/// Story genres that can prefix a generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryTheme {
    Horror,
    Funny,
    FolkTale,
    SciFi,
    Fantasy,
    Mystery,
    Romance,
    Adventure,
}

impl StoryTheme {
    pub const ALL: [StoryTheme; 8] = [
        Self::Horror,
        Self::Funny,
        Self::FolkTale,
        Self::SciFi,
        Self::Fantasy,
        Self::Mystery,
        Self::Romance,
        Self::Adventure,
    ];

    /// Selection value.
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Horror => "horror",
            Self::Funny => "funny",
            Self::FolkTale => "folk tale",
            Self::SciFi => "sci-fi",
            Self::Fantasy => "fantasy",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::Adventure => "adventure",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Horror => "Horror",
            Self::Funny => "Funny",
            Self::FolkTale => "Folk Tale",
            Self::SciFi => "Sci-Fi",
            Self::Fantasy => "Fantasy",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::Adventure => "Adventure",
        }
    }

    /// Prefix `prompt` with this theme.
    pub fn apply(&self, prompt: &str) -> String {
        themed(&self.label().to_lowercase(), prompt)
    }
}

impl FromStr for StoryTheme {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.value() == s)
            .ok_or_else(|| AssistantError::validation("theme", format!("unknown theme `{s}`")))
    }
}

/// Apply a theme selection to a prompt.
///
/// `None`, an empty selection or `"none"` leaves the prompt unchanged. A
/// selection that is not a known theme value is used as the genre name itself.
pub fn apply_theme(selection: Option<&str>, prompt: &str) -> String {
    match selection {
        None => prompt.to_string(),
        Some(s) if s.is_empty() || s == NO_THEME => prompt.to_string(),
        Some(s) => match s.parse::<StoryTheme>() {
            Ok(theme) => theme.apply(prompt),
            Err(_) => themed(&s.to_lowercase(), prompt),
        },
    }
}

fn themed(genre: &str, prompt: &str) -> String {
    format!("Generate a {genre} story about: {prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_keeps_prompt() {
        assert_eq!(apply_theme(None, "p"), "p");
        assert_eq!(apply_theme(Some(""), "p"), "p");
        assert_eq!(apply_theme(Some(NO_THEME), "p"), "p");
    }

    #[test]
    fn known_theme_uses_lowercased_label() {
        assert_eq!(
            apply_theme(Some("folk tale"), "a fox"),
            "Generate a folk tale story about: a fox"
        );
        assert_eq!(
            StoryTheme::SciFi.apply("robots"),
            "Generate a sci-fi story about: robots"
        );
    }

    #[test]
    fn unknown_theme_falls_back_to_value() {
        assert_eq!(
            apply_theme(Some("Noir"), "a detective"),
            "Generate a noir story about: a detective"
        );
    }

    #[test]
    fn values_round_trip_through_from_str() {
        for theme in StoryTheme::ALL {
            assert_eq!(theme.value().parse::<StoryTheme>().unwrap(), theme);
        }
        assert!("western".parse::<StoryTheme>().is_err());
    }
}
