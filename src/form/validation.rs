use super::Draft;
use crate::texts::Texts;
use serde::{Deserialize, Serialize};

pub const INFO_VALUE_PATH: &str = "infoValue";
pub const FIELDS_PATH: &str = "fields";

/// A required-value error on one form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_path: String,
    pub message: String,
}

pub fn field_value_path(index: usize) -> String {
    format!("fields.{}.value", index)
}

/// Checks every required input of `draft`, one error per offending input.
pub fn validate(draft: &Draft, texts: &Texts) -> Vec<FieldError> {
    let message = texts.required_error();
    let mut errors = Vec::new();

    if draft.fields.is_empty() {
        errors.push(FieldError {
            field_path: FIELDS_PATH.to_string(),
            message: message.to_string(),
        });
    }

    for (i, field) in draft.fields.iter().enumerate() {
        if field.value.is_empty() {
            errors.push(FieldError {
                field_path: field_value_path(i),
                message: message.to_string(),
            });
        }
    }

    if draft.info_value.is_empty() {
        errors.push(FieldError {
            field_path: INFO_VALUE_PATH.to_string(),
            message: message.to_string(),
        });
    }

    errors
}
