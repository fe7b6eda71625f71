mod category;
mod ids;
mod question;
mod quiz;
mod statistics;
mod upload;

pub use category::{Category, CategoryError, NewCategory, sanitize_category_id_input};
pub use ids::{CategoryId, QuestionId, QuizId, RecordId};
pub use question::{OptionSlot, Question, QuestionError, QuestionPatch, OPTION_COUNT};
pub use quiz::{Quiz, QuizError, QuizPatch};
pub use statistics::StatisticsSnapshot;
pub use upload::{QuizUpload, UploadError, SPREADSHEET_EXTENSIONS};

/// Anything a list view holds and addresses by identifier.
pub trait Entity: Clone + PartialEq {
    type Id: Clone + PartialEq + std::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// An entity that can absorb a partial update in place.
///
/// Only the fields carried by the patch change; everything else is kept as-is.
pub trait Patchable: Entity {
    type Patch: Clone + PartialEq;

    fn apply_patch(&mut self, patch: &Self::Patch);
}
