mod category_vm;
mod question_vm;
mod quiz_vm;
mod statistics_vm;
mod time_fmt;

pub use category_vm::{CategoryItemVm, map_category_items};
pub use question_vm::QuestionCardVm;
pub use quiz_vm::{QuizRowVm, map_quiz_rows};
pub use statistics_vm::{StatCardVm, map_statistics_cards};
pub use time_fmt::format_date;
