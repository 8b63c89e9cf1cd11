use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty filter for a question request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// No filter: the provider mixes all difficulties.
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{input}' (expected Easy, Medium, Hard or All Difficulty)")]
pub struct ParseDifficultyError {
    pub input: String,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Value sent as the `difficulty` query parameter. Empty means unfiltered.
    pub fn query_value(self) -> &'static str {
        match self {
            Difficulty::Any => "",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Any => "All Difficulty",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Matching ignores case and surrounding whitespace, so host values
    /// ("Easy", "All Difficulty") and wire values ("easy") both parse.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "" | "any" | "all difficulty" => Ok(Difficulty::Any),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
