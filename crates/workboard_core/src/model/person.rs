//! Person record and draft.

use super::{require_text, EntityKind, RecordId, Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Caller-supplied person fields.
///
/// Every field is optional at the type level so a missing required field
/// surfaces as a [`ValidationError`] rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl PersonDraft {
    /// Creates a draft with only the required names set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }
}

impl Validate for PersonDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::Person, "first_name", self.first_name.as_deref())?;
        require_text(EntityKind::Person, "last_name", self.last_name.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Person, PersonDraft};
    use crate::model::{Validate, ValidationError};

    #[test]
    fn draft_requires_both_names() {
        assert!(PersonDraft::new("Ann", "Lee").validate().is_ok());

        let missing_last = PersonDraft {
            first_name: Some("Ann".to_string()),
            ..PersonDraft::default()
        };
        let err = missing_last.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "last_name",
                ..
            }
        ));
    }

    #[test]
    fn serializes_absent_optionals_as_null() {
        let person = Person {
            id: 7,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: None,
            email: None,
            role: None,
            phone: None,
        };

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "first_name": "Ann",
                "last_name": "Lee",
                "age": null,
                "email": null,
                "role": null,
                "phone": null
            })
        );
    }

    #[test]
    fn draft_decodes_partial_payload() {
        let draft: PersonDraft =
            serde_json::from_str(r#"{"first_name":"Ann","last_name":"Lee","age":31}"#).unwrap();
        assert_eq!(draft.age, Some(31));
        assert_eq!(draft.email, None);
    }
}
