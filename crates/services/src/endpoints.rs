use quiz_core::model::{QuestionId, QuizId};
use reqwest::Method;
use url::Url;

use crate::config::ApiConfig;

/// One backend capability: its method and path, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListQuizzes,
    QuestionsForQuiz(&'a QuizId),
    UploadQuiz,
    UpdateQuiz(&'a QuizId),
    DeleteQuiz(&'a QuizId),
    UpdateQuestion(&'a QuestionId),
    DeleteQuestion(&'a QuestionId),
    ListCategories,
    AddCategory,
    Statistics,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::ListQuizzes
            | Self::QuestionsForQuiz(_)
            | Self::ListCategories
            | Self::Statistics => Method::GET,
            Self::UploadQuiz | Self::AddCategory => Method::POST,
            Self::UpdateQuiz(_) | Self::UpdateQuestion(_) => Method::PUT,
            Self::DeleteQuiz(_) | Self::DeleteQuestion(_) => Method::DELETE,
        }
    }

    /// Path segments relative to the backend base URL.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        let fixed = |parts: &[&str]| -> Vec<String> {
            parts.iter().map(|part| (*part).to_owned()).collect()
        };
        match self {
            Self::ListQuizzes => fixed(&["questions", "quizzes"]),
            Self::QuestionsForQuiz(id) => vec!["questions".into(), id.to_string()],
            Self::UploadQuiz => fixed(&["questions", "upload"]),
            Self::UpdateQuiz(id) | Self::DeleteQuiz(id) => {
                vec!["questions".into(), "quizzes".into(), id.to_string()]
            }
            Self::UpdateQuestion(id) | Self::DeleteQuestion(id) => {
                vec!["singlequestion".into(), id.to_string()]
            }
            Self::ListCategories => fixed(&["categories", "list"]),
            Self::AddCategory => fixed(&["categories", "add"]),
            Self::Statistics => fixed(&["api", "statistics"]),
        }
    }
}

/// Resolves endpoints against the configured base URL.
#[derive(Clone, Debug)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base: config.base_url().clone(),
        }
    }

    /// Absolute URL for an endpoint. Identifiers are percent-encoded as path segments.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint<'_>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `ApiConfig` only admits base-capable http(s) URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(endpoint.segments());
        }
        url
    }
}
