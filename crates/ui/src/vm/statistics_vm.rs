use quiz_core::model::StatisticsSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub value: String,
    pub label: &'static str,
}

/// Five cards in display order. Missing figures read as 0 (or N/A for the popular quiz).
#[must_use]
pub fn map_statistics_cards(snapshot: &StatisticsSnapshot) -> Vec<StatCardVm> {
    vec![
        StatCardVm {
            value: snapshot.total_quizzes.unwrap_or(0).to_string(),
            label: "Total Quizzes",
        },
        StatCardVm {
            value: snapshot.total_attempts.unwrap_or(0).to_string(),
            label: "Total Attempts",
        },
        StatCardVm {
            value: format_percent(snapshot.average_score),
            label: "Average Score",
        },
        StatCardVm {
            value: format_percent(snapshot.highest_score),
            label: "Highest Score",
        },
        StatCardVm {
            value: snapshot
                .most_popular_quiz
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or("N/A")
                .to_owned(),
            label: "Most Popular Quiz",
        },
    ]
}

/// The backend's figure as sent, with a percent sign.
fn format_percent(value: Option<f64>) -> String {
    let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    format!("{value}%")
}
