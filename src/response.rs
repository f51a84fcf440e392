use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a 422 response, pointing at the offending input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Input location followed by the field name, e.g. `["body", "price"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse<T> {
    pub detail: T,
}

impl<T: Serialize> ErrorResponse<T> {
    pub fn new(detail: T) -> Self {
        Self { detail }
    }
}
