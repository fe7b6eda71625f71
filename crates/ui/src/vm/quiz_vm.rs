use quiz_core::model::{Entity, Quiz, QuizId};

use crate::vm::time_fmt::format_date;

/// One quiz as shown in the dashboard list and the editor table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub id: QuizId,
    pub name: String,
    pub description: String,
    pub created_on: String,
}

impl From<&Quiz> for QuizRowVm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().clone(),
            name: quiz.name().to_owned(),
            description: quiz.description().to_owned(),
            created_on: format_date(quiz.created_at()),
        }
    }
}

#[must_use]
pub fn map_quiz_rows(quizzes: &[Quiz]) -> Vec<QuizRowVm> {
    quizzes.iter().map(QuizRowVm::from).collect()
}
