use crate::error::{DocumentError, Result};
use crate::models::{DocumentTemplate, Field};

/// In-progress form state of a document before submission.
///
/// Field labels and their order are fixed by the template; only values change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) info_name: String,
    pub(crate) info_value: String,
}

impl Draft {
    pub fn from_template(template: &DocumentTemplate) -> Self {
        Draft {
            name: template.document_name.clone(),
            description: template.document_description.clone(),
            fields: template.fields.clone(),
            info_name: template.info_name.clone(),
            info_value: template.info_template.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn info_name(&self) -> &str {
        &self.info_name
    }

    pub fn info_value(&self) -> &str {
        &self.info_value
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_info_value(&mut self, value: impl Into<String>) {
        self.info_value = value.into();
    }

    pub fn set_field_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let len = self.fields.len();
        let field = self.fields.get_mut(index).ok_or_else(|| {
            DocumentError::InvalidArgument(format!(
                "Field index {} out of range ({} fields)",
                index, len
            ))
        })?;
        field.value = value.into();
        Ok(())
    }

    /// Sets the value of the first field labeled `name`, returning its index.
    pub fn set_field_value_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<usize> {
        let index = self
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| DocumentError::InvalidArgument(format!("Unknown field: {}", name)))?;
        self.fields[index].value = value.into();
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> DocumentTemplate {
        DocumentTemplate {
            id: Some("tpl-1".to_string()),
            min_grade: None,
            document_name: "Permit".to_string(),
            document_description: "Vehicle permit".to_string(),
            fields: vec![Field::new("Vehicle", ""), Field::new("Plate", "LS-")],
            info_name: "Notes".to_string(),
            info_template: "Issued for:".to_string(),
        }
    }

    #[test]
    fn test_seeded_from_template_defaults() {
        let draft = Draft::from_template(&template());
        assert_eq!(draft.name(), "Permit");
        assert_eq!(draft.description(), "Vehicle permit");
        assert_eq!(draft.fields()[1], Field::new("Plate", "LS-"));
        assert_eq!(draft.info_name(), "Notes");
        assert_eq!(draft.info_value(), "Issued for:");
    }

    #[test]
    fn test_positional_and_named_edits() {
        let mut draft = Draft::from_template(&template());
        draft.set_field_value(0, "Truck42").unwrap();
        assert_eq!(draft.set_field_value_by_name("Plate", "LS-1234").unwrap(), 1);

        assert_eq!(
            draft.fields(),
            &[Field::new("Vehicle", "Truck42"), Field::new("Plate", "LS-1234")]
        );
    }

    #[test]
    fn test_edits_outside_template_are_rejected() {
        let mut draft = Draft::from_template(&template());
        assert!(matches!(
            draft.set_field_value(2, "x"),
            Err(DocumentError::InvalidArgument(_))
        ));
        assert!(matches!(
            draft.set_field_value_by_name("Color", "red"),
            Err(DocumentError::InvalidArgument(_))
        ));
        assert_eq!(draft, Draft::from_template(&template()));
    }
}
