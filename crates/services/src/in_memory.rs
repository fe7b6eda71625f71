use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{
    Category, Entity, NewCategory, Patchable, Question, QuestionId, QuestionPatch, Quiz, QuizId,
    QuizPatch, QuizUpload, RecordId, StatisticsSnapshot,
};
use reqwest::StatusCode;
use tokio::sync::Semaphore;

use crate::client::QuizApi;
use crate::error::ApiError;

/// Names each `QuizApi` call, for failure injection and call assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    ListQuizzes,
    QuestionsForQuiz,
    CreateQuiz,
    UpdateQuiz,
    DeleteQuiz,
    UpdateQuestion,
    DeleteQuestion,
    ListCategories,
    AddCategory,
    Statistics,
}

/// How an injected failure presents itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatedFailure {
    Unreachable,
    Status(StatusCode),
}

impl SimulatedFailure {
    fn into_error(self) -> ApiError {
        match self {
            Self::Unreachable => ApiError::Unreachable("simulated network failure".into()),
            Self::Status(status) => ApiError::Backend {
                status,
                body: String::new(),
            },
        }
    }
}

#[derive(Default)]
struct Backend {
    quizzes: Vec<Quiz>,
    questions: HashMap<QuizId, Vec<Question>>,
    categories: Vec<Category>,
    statistics: StatisticsSnapshot,
    uploads: Vec<QuizUpload>,
    failures: HashMap<ApiOperation, SimulatedFailure>,
    held: HashMap<ApiOperation, Arc<Semaphore>>,
    calls: Vec<ApiOperation>,
    next_quiz_id: i64,
}

/// A `QuizApi` backed by process memory.
///
/// Behaves like the real backend for the happy paths and can be told to fail
/// any operation. Used by tests and the offline demo mode of the app.
#[derive(Clone, Default)]
pub struct InMemoryQuizApi {
    inner: Arc<Mutex<Backend>>,
}

impl InMemoryQuizApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quizzes(self, quizzes: Vec<Quiz>) -> Self {
        self.with_state(|state| state.quizzes = quizzes)
    }

    #[must_use]
    pub fn with_questions(self, quiz_id: QuizId, questions: Vec<Question>) -> Self {
        self.with_state(|state| {
            state.questions.insert(quiz_id, questions);
        })
    }

    #[must_use]
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.with_state(|state| state.categories = categories)
    }

    #[must_use]
    pub fn with_statistics(self, statistics: StatisticsSnapshot) -> Self {
        self.with_state(|state| state.statistics = statistics)
    }

    /// Make every subsequent call to `operation` fail until `recover` is called.
    pub fn fail(&self, operation: ApiOperation, failure: SimulatedFailure) {
        self.with_state_ref(|state| {
            state.failures.insert(operation, failure);
        });
    }

    pub fn recover(&self, operation: ApiOperation) {
        self.with_state_ref(|state| {
            state.failures.remove(&operation);
        });
    }

    /// Park every call to `operation` after it is recorded, until `release`.
    pub fn hold(&self, operation: ApiOperation) {
        self.with_state_ref(|state| {
            state
                .held
                .entry(operation)
                .or_insert_with(|| Arc::new(Semaphore::new(0)));
        });
    }

    /// Let parked and future calls to `operation` through.
    pub fn release(&self, operation: ApiOperation) {
        if let Some(gate) = self.with_state_ref(|state| state.held.remove(&operation)) {
            gate.close();
        }
    }

    /// Every operation invoked so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiOperation> {
        self.with_state_ref(|state| state.calls.clone())
    }

    #[must_use]
    pub fn call_count(&self, operation: ApiOperation) -> usize {
        self.with_state_ref(|state| state.calls.iter().filter(|op| **op == operation).count())
    }

    #[must_use]
    pub fn uploads(&self) -> Vec<QuizUpload> {
        self.with_state_ref(|state| state.uploads.clone())
    }

    #[must_use]
    pub fn quizzes(&self) -> Vec<Quiz> {
        self.with_state_ref(|state| state.quizzes.clone())
    }

    #[must_use]
    pub fn questions(&self, quiz_id: &QuizId) -> Vec<Question> {
        self.with_state_ref(|state| state.questions.get(quiz_id).cloned().unwrap_or_default())
    }

    fn with_state(self, apply: impl FnOnce(&mut Backend)) -> Self {
        self.with_state_ref(apply);
        self
    }

    fn with_state_ref<T>(&self, apply: impl FnOnce(&mut Backend) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut guard)
    }

    async fn call<T: Send>(
        &self,
        operation: ApiOperation,
        apply: impl FnOnce(&mut Backend) -> Result<T, ApiError> + Send,
    ) -> Result<T, ApiError> {
        let gate = self.with_state_ref(|state| {
            state.calls.push(operation);
            state.held.get(&operation).cloned()
        });
        if let Some(gate) = gate {
            // Closed on release; the permit is never granted.
            let _ = gate.acquire().await;
        }
        self.with_state_ref(|state| {
            if let Some(failure) = state.failures.get(&operation) {
                return Err(failure.into_error());
            }
            apply(state)
        })
    }
}

fn not_found() -> ApiError {
    ApiError::Backend {
        status: StatusCode::NOT_FOUND,
        body: "not found".into(),
    }
}

#[async_trait]
impl QuizApi for InMemoryQuizApi {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.call(ApiOperation::ListQuizzes, |state| Ok(state.quizzes.clone())).await
    }

    async fn questions_for_quiz(&self, quiz_id: &QuizId) -> Result<Vec<Question>, ApiError> {
        self.call(ApiOperation::QuestionsForQuiz, |state| {
            Ok(state.questions.get(quiz_id).cloned().unwrap_or_default())
        })
        .await
    }

    async fn create_quiz(&self, upload: &QuizUpload) -> Result<(), ApiError> {
        self.call(ApiOperation::CreateQuiz, |state| {
            state.next_quiz_id += 1;
            let id = QuizId::new(RecordId::Text(format!("upload-{}", state.next_quiz_id)));
            state
                .quizzes
                .push(Quiz::new(id, upload.name(), upload.description(), None));
            state.uploads.push(upload.clone());
            Ok(())
        })
        .await
    }

    async fn update_quiz(&self, quiz_id: &QuizId, patch: &QuizPatch) -> Result<(), ApiError> {
        self.call(ApiOperation::UpdateQuiz, |state| {
            let quiz = state
                .quizzes
                .iter_mut()
                .find(|quiz| quiz.id() == quiz_id)
                .ok_or_else(not_found)?;
            quiz.apply_patch(patch);
            Ok(())
        })
        .await
    }

    async fn delete_quiz(&self, quiz_id: &QuizId) -> Result<(), ApiError> {
        self.call(ApiOperation::DeleteQuiz, |state| {
            let before = state.quizzes.len();
            state.quizzes.retain(|quiz| quiz.id() != quiz_id);
            if state.quizzes.len() == before {
                return Err(not_found());
            }
            state.questions.remove(quiz_id);
            Ok(())
        })
        .await
    }

    async fn update_question(
        &self,
        question_id: &QuestionId,
        patch: &QuestionPatch,
    ) -> Result<(), ApiError> {
        self.call(ApiOperation::UpdateQuestion, |state| {
            let question = state
                .questions
                .values_mut()
                .flat_map(|questions| questions.iter_mut())
                .find(|question| question.id() == question_id)
                .ok_or_else(not_found)?;
            question.apply_patch(patch);
            Ok(())
        })
        .await
    }

    async fn delete_question(&self, question_id: &QuestionId) -> Result<(), ApiError> {
        self.call(ApiOperation::DeleteQuestion, |state| {
            let mut removed = false;
            for questions in state.questions.values_mut() {
                let before = questions.len();
                questions.retain(|question| question.id() != question_id);
                removed |= questions.len() != before;
            }
            if removed { Ok(()) } else { Err(not_found()) }
        })
        .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.call(ApiOperation::ListCategories, |state| {
            let mut categories = state.categories.clone();
            categories.sort_by_key(|category| *category.id());
            Ok(categories)
        })
        .await
    }

    async fn add_category(&self, category: &NewCategory) -> Result<Option<Category>, ApiError> {
        self.call(ApiOperation::AddCategory, |state| {
            if state.categories.iter().any(|existing| *existing.id() == category.id()) {
                return Err(ApiError::Backend {
                    status: StatusCode::CONFLICT,
                    body: "category id already exists".into(),
                });
            }
            let created = category.clone().into_category();
            state.categories.push(created.clone());
            Ok(Some(created))
        })
        .await
    }

    async fn statistics(&self) -> Result<StatisticsSnapshot, ApiError> {
        self.call(ApiOperation::Statistics, |state| Ok(state.statistics.clone())).await
    }
}
