use async_trait::async_trait;
use quiz_core::model::{
    Category, NewCategory, Question, QuestionId, QuestionPatch, Quiz, QuizId, QuizPatch,
    QuizUpload, StatisticsSnapshot,
};

use crate::error::ApiError;

/// Every backend capability the CMS uses, one call per operation.
///
/// Implementations hold no state between calls: no caching, no request
/// deduplication, no retries. Mutations report success or failure only; the
/// caller merges what it sent into its own copy.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// All quizzes, in the order the backend returns them.
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError>;

    /// Questions belonging to one quiz, in backend order.
    async fn questions_for_quiz(&self, quiz_id: &QuizId) -> Result<Vec<Question>, ApiError>;

    /// Upload a spreadsheet; the backend parses it into a new quiz.
    async fn create_quiz(&self, upload: &QuizUpload) -> Result<(), ApiError>;

    async fn update_quiz(&self, quiz_id: &QuizId, patch: &QuizPatch) -> Result<(), ApiError>;

    async fn delete_quiz(&self, quiz_id: &QuizId) -> Result<(), ApiError>;

    async fn update_question(
        &self,
        question_id: &QuestionId,
        patch: &QuestionPatch,
    ) -> Result<(), ApiError>;

    async fn delete_question(&self, question_id: &QuestionId) -> Result<(), ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Add a category. Returns the created record when the backend echoes one.
    async fn add_category(&self, category: &NewCategory) -> Result<Option<Category>, ApiError>;

    async fn statistics(&self) -> Result<StatisticsSnapshot, ApiError>;
}
