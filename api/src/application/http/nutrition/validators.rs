use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "user_input must be between 1 and 5000 characters"
    ))]
    pub user_input: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FeedbackParams {
    /// Calendar date the feedback covers
    #[schema(example = "2025-06-01")]
    pub feedback_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct FoodRequest {
    #[serde(rename = "foodName")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "foodName must be between 1 and 255 characters"
    ))]
    pub food_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_user_input_fails_validation() {
        let request = ChatRequest {
            user_input: String::new(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn food_request_uses_the_wire_field_name() {
        let request: FoodRequest = serde_json::from_str(r#"{"foodName":"banana"}"#).unwrap();

        assert_eq!(request.food_name, "banana");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn feedback_params_parse_a_calendar_date() {
        let params: FeedbackParams =
            serde_json::from_str(r#"{"feedback_date":"2025-06-01"}"#).unwrap();

        assert_eq!(
            params.feedback_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }
}
