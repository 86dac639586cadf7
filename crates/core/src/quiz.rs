use thiserror::Error;

use crate::model::{CategoryId, QuizQuestion};
use crate::progress::{Score, percent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("category has no quiz questions")]
    Empty,

    #[error("quiz already completed")]
    Completed,

    #[error("question {index} is already answered")]
    AlreadyAnswered { index: usize },

    #[error("choice {choice} is out of range ({choices} choices)")]
    ChoiceOutOfRange { choice: usize, choices: usize },

    #[error("question {index} is not answered yet")]
    Unanswered { index: usize },

    #[error("already at the last question")]
    AtLastQuestion,

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("{remaining} question(s) still unanswered")]
    Incomplete { remaining: usize },
}

/// Where an attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Answering(usize),
    Completed,
}

/// How a choice button renders once its question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    /// Question not answered yet.
    Open,
    Correct,
    /// The learner's pick, and it was wrong.
    Wrong,
    /// Any other choice after answering.
    Neutral,
}

/// Immediate feedback after `choose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceFeedback {
    pub chosen: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// One attempt at a category quiz.
///
/// Answers are write-once: each slot starts empty and takes exactly one
/// choice. Navigation never clears answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    category: CategoryId,
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    state: QuizState,
}

impl QuizSession {
    /// Start an attempt at question 0 with every answer empty.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` when there are no questions.
    pub fn start(category: CategoryId, questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            category,
            questions,
            answers,
            state: QuizState::Answering(0),
        })
    }

    #[must_use]
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Answering(i) => Some(i),
            QuizState::Completed => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.current_index().and_then(|i| self.answers[i])
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        matches!(self.state, QuizState::Answering(i) if i > 0)
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        match self.state {
            QuizState::Answering(i) => i + 1 < self.len() && self.answers[i].is_some(),
            QuizState::Completed => false,
        }
    }

    #[must_use]
    pub fn can_finish(&self) -> bool {
        !self.is_complete() && self.answers.iter().all(Option::is_some)
    }

    /// Record the learner's pick for the current question.
    ///
    /// # Errors
    ///
    /// Fails when completed, when the question already has an answer, or when
    /// `choice` is not one of the question's choices.
    pub fn choose(&mut self, choice: usize) -> Result<ChoiceFeedback, QuizError> {
        let QuizState::Answering(index) = self.state else {
            return Err(QuizError::Completed);
        };
        if self.answers[index].is_some() {
            return Err(QuizError::AlreadyAnswered { index });
        }
        let question = &self.questions[index];
        if choice >= question.choices.len() {
            return Err(QuizError::ChoiceOutOfRange {
                choice,
                choices: question.choices.len(),
            });
        }
        self.answers[index] = Some(choice);
        Ok(ChoiceFeedback {
            chosen: choice,
            correct_index: question.correct_index,
            is_correct: question.is_correct(choice),
        })
    }

    /// # Errors
    ///
    /// Fails when completed, on the last question, or when the current
    /// question is unanswered.
    pub fn next(&mut self) -> Result<usize, QuizError> {
        let QuizState::Answering(index) = self.state else {
            return Err(QuizError::Completed);
        };
        if self.answers[index].is_none() {
            return Err(QuizError::Unanswered { index });
        }
        if index + 1 >= self.len() {
            return Err(QuizError::AtLastQuestion);
        }
        self.state = QuizState::Answering(index + 1);
        Ok(index + 1)
    }

    /// # Errors
    ///
    /// Fails when completed or on the first question.
    pub fn prev(&mut self) -> Result<usize, QuizError> {
        let QuizState::Answering(index) = self.state else {
            return Err(QuizError::Completed);
        };
        if index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.state = QuizState::Answering(index - 1);
        Ok(index - 1)
    }

    /// Score the attempt and move to `Completed`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while any answer is missing, and
    /// `QuizError::Completed` when called twice.
    pub fn finish(&mut self) -> Result<Score, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        let remaining = self.answers.iter().filter(|a| a.is_none()).count();
        if remaining > 0 {
            return Err(QuizError::Incomplete { remaining });
        }
        self.state = QuizState::Completed;
        Ok(self.score())
    }

    /// Correct answers so far over the question count.
    #[must_use]
    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.is_some_and(|choice| q.is_correct(choice)))
            .count();
        Score {
            correct: u32::try_from(correct).unwrap_or(u32::MAX),
            total: u32::try_from(self.len()).unwrap_or(u32::MAX),
        }
    }

    /// Width of the progress bar: questions passed while answering, full once done.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        match self.state {
            QuizState::Answering(i) => percent(
                u32::try_from(i).unwrap_or(u32::MAX),
                u32::try_from(self.len()).unwrap_or(u32::MAX),
            ),
            QuizState::Completed => 100,
        }
    }

    /// Render state of `choice` on the current question.
    #[must_use]
    pub fn choice_mark(&self, choice: usize) -> ChoiceMark {
        let (Some(question), Some(chosen)) = (self.current_question(), self.current_answer())
        else {
            return ChoiceMark::Open;
        };
        if choice == question.correct_index {
            ChoiceMark::Correct
        } else if choice == chosen {
            ChoiceMark::Wrong
        } else {
            ChoiceMark::Neutral
        }
    }
}
