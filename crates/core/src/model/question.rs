use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{CategoryId, ProductId};
use crate::model::text::null_default;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {position} has no choices")]
    NoChoices { position: usize },

    #[error("question {position} marks choice {index} correct but has only {choices} choices")]
    CorrectIndexOutOfRange {
        position: usize,
        index: usize,
        choices: usize,
    },
}

/// What a question trains: product facts or the sales conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Skill {
    Sales,
    #[default]
    ProductKnowledge,
}

impl From<String> for Skill {
    fn from(value: String) -> Self {
        if value == "sales" {
            Self::Sales
        } else {
            Self::ProductKnowledge
        }
    }
}

impl Skill {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Skill::Sales => "Sales Technique",
            Skill::ProductKnowledge => "Product Knowledge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub category: CategoryId,
    #[serde(default, deserialize_with = "null_default")]
    pub skill: Skill,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    #[serde(default, deserialize_with = "null_default")]
    pub explanation: String,
    #[serde(default, deserialize_with = "null_default")]
    pub product_refs: Vec<ProductId>,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

/// The `quizzes.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuizBank {
    #[serde(default)]
    pub quizzes: Vec<QuizQuestion>,
}

impl QuizBank {
    /// Check every question can be answered and scored.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found, positions are 1-based.
    pub fn validate(&self) -> Result<(), QuestionError> {
        for (i, question) in self.quizzes.iter().enumerate() {
            let position = i + 1;
            if question.choices.is_empty() {
                return Err(QuestionError::NoChoices { position });
            }
            if question.correct_index >= question.choices.len() {
                return Err(QuestionError::CorrectIndexOutOfRange {
                    position,
                    index: question.correct_index,
                    choices: question.choices.len(),
                });
            }
        }
        Ok(())
    }

    /// Questions of one category, in document order.
    #[must_use]
    pub fn questions_for(&self, category: &CategoryId) -> Vec<QuizQuestion> {
        self.quizzes
            .iter()
            .filter(|q| &q.category == category)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count_for(&self, category: &CategoryId) -> usize {
        self.quizzes.iter().filter(|q| &q.category == category).count()
    }
}
