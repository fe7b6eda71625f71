use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Entity;
use crate::model::ids::CategoryId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("Category ID must be a non-empty numeric value.")]
    InvalidId,
    #[error("Category Name cannot be empty.")]
    EmptyName,
}

/// A category as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    id: CategoryId,
    #[serde(rename = "category_name", default)]
    name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// Validated request body for adding a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    category_id: CategoryId,
    category_name: String,
}

impl NewCategory {
    /// Validate the raw form inputs.
    ///
    /// The id is checked first, so a form with both fields wrong reports the id.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::InvalidId` if the id is empty or not a number.
    /// Returns `CategoryError::EmptyName` if the name is empty after trimming.
    pub fn parse(raw_id: &str, raw_name: &str) -> Result<Self, CategoryError> {
        let id = raw_id
            .trim()
            .parse::<u64>()
            .map_err(|_| CategoryError::InvalidId)?;
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self {
            category_id: CategoryId::new(id),
            category_name: name.to_owned(),
        })
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.category_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.category_name
    }

    #[must_use]
    pub fn into_category(self) -> Category {
        Category::new(self.category_id, self.category_name)
    }
}

/// Strip everything but ASCII digits from the id field as the user types.
#[must_use]
pub fn sanitize_category_id_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
