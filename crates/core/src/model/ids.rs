use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Backend-assigned identifier.
///
/// The backend hands out either integers or opaque strings depending on the
/// collection, so both shapes are accepted on the wire. Two ids are equal when
/// they print the same, so `5` and `"5"` name the same record while `"007"`
/// stays distinct from `7`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Text used in paths and for comparison.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(value) => Cow::Owned(value.to_string()),
            Self::Text(value) => Cow::Borrowed(value),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_text().hash(state);
    }
}

/// Route segments are kept verbatim.
impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::Text(raw.to_owned()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Identifier of a quiz
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(RecordId);

impl QuizId {
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_record(&self) -> &RecordId {
        &self.0
    }
}

/// Identifier of a single question, distinct from the owning quiz id
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(RecordId);

impl QuestionId {
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_record(&self) -> &RecordId {
        &self.0
    }
}

/// Client-supplied numeric category identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<i64> for QuizId {
    fn from(value: i64) -> Self {
        Self(RecordId::Number(value))
    }
}

impl From<&str> for QuizId {
    fn from(value: &str) -> Self {
        let Ok(id) = value.parse::<RecordId>();
        Self(id)
    }
}

impl FromStr for QuizId {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(raw))
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self(RecordId::Number(value))
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        let Ok(id) = value.parse::<RecordId>();
        Self(id)
    }
}

// ─── Debug / Display ──────────────────────────────────────────────────────────

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl fmt::Debug for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizId({:?})", self.0)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({:?})", self.0)
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
