use serde_json::json;

/// JSON schema constraining LLM chat replies to `{"answer": string}`.
pub fn chat_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "answer": { "type": "string" }
        },
        "required": ["answer"]
    })
}

/// JSON schema constraining LLM feedback replies to `{"feedback": string}`.
pub fn daily_feedback_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "feedback": { "type": "string" }
        },
        "required": ["feedback"]
    })
}
