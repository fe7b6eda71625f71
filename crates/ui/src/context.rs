use std::sync::{Arc, Mutex};

use quiz_core::model::{Entity, Quiz, QuizId};
use services::QuizApi;

pub trait UiApp: Send + Sync {
    fn api(&self) -> Arc<dyn QuizApi>;

    /// Shown in the navbar so the operator can tell which backend is live.
    fn backend_label(&self) -> String;
}

/// Quiz header handed from the list to the details page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHandoff {
    pub quiz_id: QuizId,
    pub name: String,
    pub description: String,
}

impl From<&Quiz> for QuizHandoff {
    fn from(quiz: &Quiz) -> Self {
        Self {
            quiz_id: quiz.id().clone(),
            name: quiz.name().to_owned(),
            description: quiz.description().to_owned(),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn QuizApi>,
    backend_label: String,
    handoff: Arc<Mutex<Option<QuizHandoff>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            api: app.api(),
            backend_label: app.backend_label(),
            handoff: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }

    /// Leave a header for the next details page to pick up.
    pub fn stage_handoff(&self, handoff: QuizHandoff) {
        if let Ok(mut slot) = self.handoff.lock() {
            *slot = Some(handoff);
        }
    }

    /// One-shot: the staged header is consumed whether or not it matches `quiz_id`.
    #[must_use]
    pub fn take_handoff(&self, quiz_id: &QuizId) -> Option<QuizHandoff> {
        let staged = self.handoff.lock().ok()?.take()?;
        (&staged.quiz_id == quiz_id).then_some(staged)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
