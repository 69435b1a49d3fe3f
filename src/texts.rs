use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const REQUIRED_ERROR: &str = "requiredError";
pub const ISSUER_FIRSTNAME: &str = "issuerFirstname";
pub const ISSUER_LASTNAME: &str = "issuerLastname";
pub const ISSUER_DOB: &str = "issuerDOB";
pub const ISSUER_JOB: &str = "issuerJob";
pub const TERMS_AND_SIGNING: &str = "termsAndSigning";
pub const CREATE_DOCUMENT_BTN: &str = "createDocumentBtn";
pub const CANCEL: &str = "cancel";

/// Localized user-facing strings, looked up by key.
///
/// Keys missing from the table fall back to the built-in English text, and
/// unknown keys fall back to the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Texts(BTreeMap<String, String>);

impl Texts {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Texts(entries)
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0
            .get(key)
            .map(String::as_str)
            .or_else(|| builtin(key))
            .unwrap_or(key)
    }

    pub fn required_error(&self) -> &str {
        self.get(REQUIRED_ERROR)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl Default for Texts {
    fn default() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Texts(entries)
    }
}

const BUILTIN: &[(&str, &str)] = &[
    (REQUIRED_ERROR, "This field is required"),
    (ISSUER_FIRSTNAME, "Firstname"),
    (ISSUER_LASTNAME, "Lastname"),
    (ISSUER_DOB, "Date of birth"),
    (ISSUER_JOB, "Job"),
    (TERMS_AND_SIGNING, "Terms and signing"),
    (CREATE_DOCUMENT_BTN, "Create document"),
    (CANCEL, "Cancel"),
];

fn builtin(key: &str) -> Option<&'static str> {
    BUILTIN.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
