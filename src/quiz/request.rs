use crate::trivia::{Category, Difficulty};

use super::error::QuizError;

/// Largest number of questions the provider hands out per request.
pub const MAX_AMOUNT: u32 = 50;

/// Validated parameters for loading a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub category: Category,
    pub amount: u32,
    pub difficulty: Difficulty,
}

impl LoadRequest {
    /// Validate raw host input. Every parameter is required.
    pub fn parse(
        category: Option<&str>,
        amount: Option<u32>,
        difficulty: Option<&str>,
    ) -> Result<Self, QuizError> {
        let category = category.ok_or_else(|| QuizError::invalid_input("category is required"))?;
        let category = Category::lookup(category)
            .ok_or_else(|| QuizError::invalid_input(format!("unknown category '{category}'")))?;

        let amount = amount.ok_or_else(|| QuizError::invalid_input("question count is required"))?;
        if amount == 0 || amount > MAX_AMOUNT {
            return Err(QuizError::invalid_input(format!(
                "question count must be between 1 and {MAX_AMOUNT}, got {amount}"
            )));
        }

        let difficulty = difficulty
            .ok_or_else(|| QuizError::invalid_input("difficulty is required"))?
            .parse::<Difficulty>()
            .map_err(|e| QuizError::invalid_input(e.to_string()))?;

        Ok(Self {
            category,
            amount,
            difficulty,
        })
    }
}
