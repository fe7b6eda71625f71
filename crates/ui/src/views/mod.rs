mod categories;
mod collection;
mod components;
mod create_quiz;
mod dashboard;
mod quiz_details;
mod quiz_editor;
mod state;
mod statistics;

pub use categories::CategoriesView;
pub use collection::{CollectionMode, CollectionVm, LoadTicket};
pub use create_quiz::CreateQuizView;
pub use dashboard::DashboardView;
pub use quiz_details::QuizDetailsView;
pub use quiz_editor::QuizEditorView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use statistics::StatisticsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
