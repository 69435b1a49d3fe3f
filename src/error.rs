use crate::form::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Document is not signed")]
    NotSigned,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No document form is open")]
    NoOpenForm,

    #[error("Job grade {grade:?} is below the template minimum {min_grade}")]
    InsufficientGrade { grade: Option<u32>, min_grade: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

impl serde::Serialize for DocumentError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
