use quiz_core::model::{OptionSlot, Question};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub text: String,
    /// "1. Paris" style lines, in slot order.
    pub options: Vec<String>,
    pub correct_label: String,
}

impl From<&Question> for QuestionCardVm {
    fn from(question: &Question) -> Self {
        let options = OptionSlot::all()
            .map(|slot| format!("{}. {}", slot.position(), question.option(slot)))
            .collect();
        let correct_label = match question.correct_option() {
            Some(slot) => format!(
                "Correct Answer: Option {} - {}",
                slot.position(),
                question.option(slot)
            ),
            None => "Correct Answer: not set".to_owned(),
        };

        Self {
            text: question.text().to_owned(),
            options,
            correct_label,
        }
    }
}
