use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::{Entity, Patchable};

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("correct option must be between 1 and 4, got {0:?}")]
    InvalidCorrectOption(String),
}

/// One-based position of an answer option (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OptionSlot(u8);

impl OptionSlot {
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidCorrectOption` outside 1..=4.
    pub fn new(position: u8) -> Result<Self, QuestionError> {
        if (1..=OPTION_COUNT as u8).contains(&position) {
            Ok(Self(position))
        } else {
            Err(QuestionError::InvalidCorrectOption(position.to_string()))
        }
    }

    /// Parse a form field. Blank input means "no change".
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidCorrectOption` for non-numeric or out of range input.
    pub fn parse_input(raw: &str) -> Result<Option<Self>, QuestionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<u8>()
            .map_err(|_| QuestionError::InvalidCorrectOption(raw.to_owned()))
            .and_then(Self::new)
            .map(Some)
    }

    #[must_use]
    pub fn position(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=OPTION_COUNT as u8).map(Self)
    }
}

/// A quiz question with four ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    text: String,
    options: [String; OPTION_COUNT],
    correct_option: Option<OptionSlot>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option: Option<OptionSlot>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            options,
            correct_option,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, slot: OptionSlot) -> &str {
        &self.options[slot.index()]
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<OptionSlot> {
        self.correct_option
    }
}

impl Entity for Question {
    type Id = QuestionId;

    fn id(&self) -> &QuestionId {
        &self.id
    }
}

/// Partial question update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "QuestionPatchRecord")]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub options: Option<[String; OPTION_COUNT]>,
    pub correct_option: Option<OptionSlot>,
}

impl QuestionPatch {
    /// Build the patch submitted by the question edit form.
    ///
    /// Question text is only sent when non-empty. Every option slot is sent,
    /// falling back to the stored value where the field was cleared. The
    /// correct option is only sent when one was entered.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidCorrectOption` if the correct option is not 1..=4.
    pub fn from_form(
        existing: &Question,
        text: &str,
        options: &[String; OPTION_COUNT],
        correct_option: &str,
    ) -> Result<Self, QuestionError> {
        let correct_option = OptionSlot::parse_input(correct_option)?;
        let text = (!text.is_empty()).then(|| text.to_owned());
        let options = std::array::from_fn(|index| {
            if options[index].is_empty() {
                existing.options[index].clone()
            } else {
                options[index].clone()
            }
        });

        Ok(Self {
            text,
            options: Some(options),
            correct_option,
        })
    }
}

impl Patchable for Question {
    type Patch = QuestionPatch;

    fn apply_patch(&mut self, patch: &QuestionPatch) {
        if let Some(text) = &patch.text {
            self.text.clone_from(text);
        }
        if let Some(options) = &patch.options {
            self.options.clone_from(options);
        }
        if let Some(slot) = patch.correct_option {
            self.correct_option = Some(slot);
        }
    }
}

// ─── Wire format ──────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Text(String),
}

impl LooseNumber {
    fn into_slot(self) -> Option<OptionSlot> {
        let position = match self {
            Self::Int(value) => u8::try_from(value).ok()?,
            Self::Text(value) => value.trim().parse::<u8>().ok()?,
        };
        OptionSlot::new(position).ok()
    }
}

#[derive(Serialize, Deserialize)]
struct QuestionRecord {
    unique_id: QuestionId,
    #[serde(default)]
    question: String,
    #[serde(default)]
    option_1: String,
    #[serde(default)]
    option_2: String,
    #[serde(default)]
    option_3: String,
    #[serde(default)]
    option_4: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_option: Option<LooseNumber>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.unique_id,
            text: record.question,
            options: [
                record.option_1,
                record.option_2,
                record.option_3,
                record.option_4,
            ],
            correct_option: record.correct_option.and_then(LooseNumber::into_slot),
        }
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        let [option_1, option_2, option_3, option_4] = question.options;
        Self {
            unique_id: question.id,
            question: question.text,
            option_1,
            option_2,
            option_3,
            option_4,
            correct_option: question
                .correct_option
                .map(|slot| LooseNumber::Int(i64::from(slot.position()))),
        }
    }
}

#[derive(Serialize)]
struct QuestionPatchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correct_option: Option<u8>,
}

impl From<QuestionPatch> for QuestionPatchRecord {
    fn from(patch: QuestionPatch) -> Self {
        let [option_1, option_2, option_3, option_4] = match patch.options {
            Some([a, b, c, d]) => [Some(a), Some(b), Some(c), Some(d)],
            None => [None, None, None, None],
        };
        Self {
            question: patch.text,
            option_1,
            option_2,
            option_3,
            option_4,
            correct_option: patch.correct_option.map(OptionSlot::position),
        }
    }
}
