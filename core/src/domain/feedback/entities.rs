use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Assistant area a feedback record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Nutrition,
    Exercise,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Nutrition => "nutrition",
            FeedbackType::Exercise => "exercise",
        }
    }
}

impl FromStr for FeedbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nutrition" => Ok(FeedbackType::Nutrition),
            "exercise" => Ok(FeedbackType::Exercise),
            other => Err(format!("unknown feedback type: {other}")),
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub user_id: i32,
    pub feedback: String,
    pub feedback_type: FeedbackType,
    pub feedback_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Builds a record for a calendar date. The stored `feedback_date` is
    /// always that date at 00:00:00 UTC so all records share day
    /// granularity.
    pub fn new(
        user_id: i32,
        feedback: String,
        feedback_type: FeedbackType,
        feedback_date: NaiveDate,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            feedback,
            feedback_type,
            feedback_date: feedback_date.and_time(NaiveTime::MIN).and_utc(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn feedback_date_is_normalized_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let record =
            FeedbackRecord::new(7, "eat more fiber".to_string(), FeedbackType::Nutrition, date);

        assert_eq!(record.feedback_date.date_naive(), date);
        assert_eq!(record.feedback_date.hour(), 0);
        assert_eq!(record.feedback_date.minute(), 0);
        assert_eq!(record.feedback_date.second(), 0);
    }

    #[test]
    fn records_for_the_same_day_get_distinct_ids() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let a = FeedbackRecord::new(7, "a".to_string(), FeedbackType::Nutrition, date);
        let b = FeedbackRecord::new(7, "b".to_string(), FeedbackType::Nutrition, date);

        assert_ne!(a.id, b.id);
        assert_eq!(a.feedback_date, b.feedback_date);
    }

    #[test]
    fn feedback_type_roundtrip() {
        for ty in [FeedbackType::Nutrition, FeedbackType::Exercise] {
            assert_eq!(ty.as_str().parse::<FeedbackType>(), Ok(ty));
        }
    }
}
