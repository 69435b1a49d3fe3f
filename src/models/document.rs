use super::Field;
use serde::{Deserialize, Serialize};

/// Identity and job of whoever issued a document, captured at submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerInfo {
    pub firstname: String,
    pub lastname: String,
    pub birth_date: String,
    pub job_name: String,
}

/// A finalized, submittable document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K5Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub document_name: String,
    pub created_at: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub info_name: String,
    pub info_value: String,
    pub is_copy: bool,
    pub issuer: IssuerInfo,
}
