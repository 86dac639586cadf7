use std::sync::Arc;

use training_core::model::{CategoryId, QuizBank};
use training_core::{Clock, QuizError, QuizSession, Score};

use crate::error::QuizServiceError;
use crate::progress_service::ProgressService;

/// Starts quiz attempts and records completed ones.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    progress: Arc<ProgressService>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<ProgressService>) -> Self {
        Self { clock, progress }
    }

    /// Begin a fresh attempt over the category's questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` when the category has no questions.
    pub fn start(&self, quizzes: &QuizBank, category: &CategoryId) -> Result<QuizSession, QuizError> {
        QuizSession::start(category.clone(), quizzes.questions_for(category))
    }

    /// Complete the attempt and overwrite the category's progress with it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session cannot finish yet, and
    /// `QuizServiceError::Progress` if the store cannot be read or written.
    pub async fn finish(&self, session: &mut QuizSession) -> Result<Score, QuizServiceError> {
        let score = session.finish()?;
        let mut store = self.progress.load().await?;
        store.record_attempt(session.category(), score, self.clock.now());
        self.progress.save(&store).await?;
        tracing::info!(
            category = %session.category(),
            correct = score.correct,
            total = score.total,
            percent = score.percent(),
            "quiz finished"
        );
        Ok(score)
    }
}
