use std::sync::Arc;

use services::{LoadFailure, ProgressService, QuizService, TrainingData};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    /// Documents loaded at boot, or why loading failed.
    ///
    /// # Errors
    ///
    /// Returns the boot-time `LoadFailure`.
    fn data(&self) -> Result<Arc<TrainingData>, LoadFailure>;

    fn progress(&self) -> Arc<ProgressService>;
    fn quiz(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    data: Result<Arc<TrainingData>, LoadFailure>,
    progress: Arc<ProgressService>,
    quiz: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            data: app.data(),
            progress: app.progress(),
            quiz: app.quiz(),
        }
    }

    /// # Errors
    ///
    /// Returns the boot-time `LoadFailure`.
    pub fn data(&self) -> Result<Arc<TrainingData>, LoadFailure> {
        self.data.clone()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
