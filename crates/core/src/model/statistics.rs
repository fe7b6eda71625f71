use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate, read-only figures computed by the backend.
///
/// Every field is optional on the wire; missing values read as zero or absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSnapshot {
    #[serde(deserialize_with = "loose_count")]
    pub total_quizzes: Option<u64>,
    #[serde(deserialize_with = "loose_count")]
    pub total_attempts: Option<u64>,
    pub average_score: Option<f64>,
    pub highest_score: Option<f64>,
    pub most_popular_quiz: Option<String>,
}

/// Counts sometimes arrive as `3.0` or `"3"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseCount {
    Int(u64),
    Float(f64),
    Text(String),
}

impl LooseCount {
    fn into_count(self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(value) => integral(value),
            Self::Text(value) => {
                let value = value.trim();
                value
                    .parse::<u64>()
                    .ok()
                    .or_else(|| value.parse::<f64>().ok().and_then(integral))
            }
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn integral(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then(|| value as u64)
}

fn loose_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseCount>::deserialize(deserializer)?.and_then(LooseCount::into_count))
}
