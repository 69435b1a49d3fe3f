use super::{Field, Job};
use serde::{Deserialize, Serialize};

/// Immutable blueprint of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub min_grade: Option<u32>,
    pub document_name: String,
    #[serde(default)]
    pub document_description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub info_name: String,
    #[serde(default)]
    pub info_template: String,
}

impl DocumentTemplate {
    /// Whether an actor holding `job` may create documents from this template.
    ///
    /// Templates without a minimum grade are open to everyone, including
    /// actors without a job.
    pub fn is_available_to(&self, job: Option<&Job>) -> bool {
        match (self.min_grade, job) {
            (None, _) => true,
            (Some(min_grade), Some(job)) => job.grade >= min_grade,
            (Some(_), None) => false,
        }
    }
}
