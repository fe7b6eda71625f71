use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuizId;
use crate::model::{Entity, Patchable};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("Both fields are required.")]
    MissingFields,
}

/// A quiz as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(rename = "quiz_id")]
    id: QuizId,
    #[serde(rename = "quiz_name", default)]
    name: String,
    #[serde(rename = "quiz_description", default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    #[must_use]
    pub fn new(
        id: QuizId,
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Entity for Quiz {
    type Id = QuizId;

    fn id(&self) -> &QuizId {
        &self.id
    }
}

/// Partial quiz update. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuizPatch {
    #[serde(rename = "quiz_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "quiz_description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuizPatch {
    /// Build the patch submitted by the quiz edit form.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MissingFields` if either field is blank.
    pub fn from_form(name: &str, description: &str) -> Result<Self, QuizError> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(QuizError::MissingFields);
        }
        Ok(Self {
            name: Some(name.to_owned()),
            description: Some(description.to_owned()),
        })
    }
}

impl Patchable for Quiz {
    type Patch = QuizPatch;

    fn apply_patch(&mut self, patch: &QuizPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
    }
}
