use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Field name -> list of problems with that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Body of every non-validation error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a 400 caused by invalid fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub message: String,
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}
