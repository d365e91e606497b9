//! Delete confirmation form.

use crate::domain::ContactId;
use serde::Deserialize;

/// Hidden-field payload posted by the delete button.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteInput {
    pub id: Option<String>,
}

impl DeleteInput {
    pub fn for_contact(id: ContactId) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }
}

/// Confirmation token check for admin deletes.
pub struct DeleteForm;

impl DeleteForm {
    /// The token is valid only when present and naming the same record as
    /// the request path.
    pub fn is_valid(input: &DeleteInput, target: ContactId) -> bool {
        input
            .id
            .as_deref()
            .and_then(|raw| raw.parse::<ContactId>().ok())
            .is_some_and(|id| id == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_token_is_valid() {
        let id = ContactId::new(3).unwrap();
        assert!(DeleteForm::is_valid(&DeleteInput::for_contact(id), id));
    }

    #[test]
    fn test_missing_or_mismatched_token_is_invalid() {
        let id = ContactId::new(3).unwrap();
        assert!(!DeleteForm::is_valid(&DeleteInput::default(), id));
        assert!(!DeleteForm::is_valid(
            &DeleteInput {
                id: Some("4".to_string())
            },
            id
        ));
        assert!(!DeleteForm::is_valid(
            &DeleteInput {
                id: Some("three".to_string())
            },
            id
        ));
    }
}
