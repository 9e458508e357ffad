#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("form definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("form definition does not match the expected shape: {0}")]
    Shape(String),

    #[error("field values must be a JSON object keyed by field id, got {0}")]
    ValuesNotObject(&'static str),
}
