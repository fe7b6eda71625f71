use async_trait::async_trait;
use quiz_core::model::{
    Category, NewCategory, Question, QuestionId, QuestionPatch, Quiz, QuizId, QuizPatch,
    QuizUpload, StatisticsSnapshot,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::QuizApi;
use crate::config::ApiConfig;
use crate::endpoints::{Endpoint, Endpoints};
use crate::error::ApiError;

/// `QuizApi` over HTTP. One request per call; no timeout beyond the client's defaults.
#[derive(Clone, Debug)]
pub struct HttpQuizApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpQuizApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            endpoints: Endpoints::new(config),
        }
    }

    fn request(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let method = endpoint.method();
        let url = self.endpoints.url(endpoint);
        debug!(%method, %url, "backend request");
        self.client.request(method, url)
    }

    async fn execute(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(|err| {
            warn!(error = %err, "backend request did not complete");
            ApiError::from(err)
        })?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(%status, %url, "backend rejected request");
            return Err(ApiError::Backend { status, body });
        }

        Ok(body.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let body = Self::execute(self.request(&endpoint)).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.fetch(Endpoint::ListQuizzes).await
    }

    async fn questions_for_quiz(&self, quiz_id: &QuizId) -> Result<Vec<Question>, ApiError> {
        self.fetch(Endpoint::QuestionsForQuiz(quiz_id)).await
    }

    async fn create_quiz(&self, upload: &QuizUpload) -> Result<(), ApiError> {
        let file = Part::bytes(upload.contents().to_vec()).file_name(upload.file_name().to_owned());
        let form = Form::new()
            .part("file", file)
            .text("quiz_name", upload.name().to_owned())
            .text("quiz_description", upload.description().to_owned());

        Self::execute(self.request(&Endpoint::UploadQuiz).multipart(form)).await?;
        Ok(())
    }

    async fn update_quiz(&self, quiz_id: &QuizId, patch: &QuizPatch) -> Result<(), ApiError> {
        Self::execute(self.request(&Endpoint::UpdateQuiz(quiz_id)).json(patch)).await?;
        Ok(())
    }

    async fn delete_quiz(&self, quiz_id: &QuizId) -> Result<(), ApiError> {
        Self::execute(self.request(&Endpoint::DeleteQuiz(quiz_id))).await?;
        Ok(())
    }

    async fn update_question(
        &self,
        question_id: &QuestionId,
        patch: &QuestionPatch,
    ) -> Result<(), ApiError> {
        Self::execute(self.request(&Endpoint::UpdateQuestion(question_id)).json(patch)).await?;
        Ok(())
    }

    async fn delete_question(&self, question_id: &QuestionId) -> Result<(), ApiError> {
        Self::execute(self.request(&Endpoint::DeleteQuestion(question_id))).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch(Endpoint::ListCategories).await
    }

    async fn add_category(&self, category: &NewCategory) -> Result<Option<Category>, ApiError> {
        let body = Self::execute(self.request(&Endpoint::AddCategory).json(category)).await?;
        // Some deployments answer with a status message instead of the record.
        Ok(serde_json::from_slice(&body).ok())
    }

    async fn statistics(&self) -> Result<StatisticsSnapshot, ApiError> {
        self.fetch(Endpoint::Statistics).await
    }
}
