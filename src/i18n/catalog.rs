use super::{MessageParams, Translator};
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::path::Path;

/// Built-in English messages.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (
        "ContactThanksMessage",
        "Thank you for getting in touch. We will get back to you as soon as possible.",
    ),
    ("ContactNotificationSubject", "New contact form submission"),
    ("ContactConfirmationSubject", "Thank you for contacting us"),
    ("contact.title.blank", "Please select a title."),
    ("contact.title.invalid", "Please select one of the listed titles."),
    ("contact.name.blank", "Please enter your name."),
    ("contact.email.blank", "Please enter your email address."),
    ("contact.email.invalid", "This value is not a valid email address."),
    ("contact.message.blank", "Please enter a message."),
    ("contact.message.too_long", "This message is too long."),
    ("contact.field.blank", "This value should not be blank."),
    ("contact.field.too_long", "This value is too long."),
];

/// In-memory message catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl Catalog {
    /// Built-in messages only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override or add messages.
    pub fn with_messages<I, K, V>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Built-in messages overridden by a JSON object of key → text.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let unreadable = |reason: String| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason,
        };

        let bytes = std::fs::read(path).map_err(|e| unreadable(e.to_string()))?;
        let overrides: HashMap<String, String> =
            serde_json::from_slice(&bytes).map_err(|e| unreadable(e.to_string()))?;

        Ok(Self::default().with_messages(overrides))
    }
}

impl Translator for Catalog {
    fn trans(&self, key: &str, params: &MessageParams) -> String {
        let text = self.messages.get(key).map_or(key, String::as_str);
        substitute(text, params)
    }
}

/// Replace `%name%` placeholders in a single left-to-right pass.
///
/// Substituted values are never scanned again, and placeholders with no
/// matching parameter are left as written.
fn substitute(text: &str, params: &MessageParams) -> String {
    if params.is_empty() {
        return text.to_string();
    }

    let values: HashMap<&str, &str> = params
        .iter()
        .map(|(name, value)| {
            let bare = name
                .strip_prefix('%')
                .and_then(|n| n.strip_suffix('%'))
                .unwrap_or(name.as_str());
            (bare, value.as_str())
        })
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replacement = after
            .find('%')
            .and_then(|end| values.get(&after[..end]).map(|value| (end, *value)));
        match replacement {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> MessageParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_builtin_message() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.trans_plain("ContactConfirmationSubject"),
            "Thank you for contacting us"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Catalog::new().trans_plain("NoSuchKey"), "NoSuchKey");
    }

    #[test]
    fn test_placeholders_with_and_without_percent() {
        let catalog = Catalog::new().with_messages([(
            "ContactNotificationSubject",
            "New message on %site% from %source%",
        )]);

        let text = catalog.trans(
            "ContactNotificationSubject",
            &params(&[("site", "example.org"), ("%source%", "web")]),
        );
        assert_eq!(text, "New message on example.org from web");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let catalog = Catalog::new().with_messages([("Greeting", "%a% and %b%")]);

        let text = catalog.trans("Greeting", &params(&[("a", "%b%"), ("b", "X")]));
        assert_eq!(text, "%b% and X");
    }

    #[test]
    fn test_stray_percent_signs_are_kept() {
        let catalog = Catalog::new().with_messages([("Sale", "50% off at %site%, 100%")]);

        let text = catalog.trans("Sale", &params(&[("site", "example.org")]));
        assert_eq!(text, "50% off at example.org, 100%");
    }

    #[test]
    fn test_unused_params_are_ignored() {
        let text = Catalog::new().trans(
            "ContactConfirmationSubject",
            &params(&[("site", "example.org")]),
        );
        assert_eq!(text, "Thank you for contacting us");
    }

    #[test]
    fn test_from_json_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, r#"{"ContactThanksMessage": "Cheers, %name%!"}"#).unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();
        assert_eq!(
            catalog.trans("ContactThanksMessage", &params(&[("name", "Jane")])),
            "Cheers, Jane!"
        );
        assert_eq!(
            catalog.trans_plain("ContactConfirmationSubject"),
            "Thank you for contacting us"
        );
    }

    #[test]
    fn test_from_json_file_rejects_bad_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            Catalog::from_json_file(&path),
            Err(ConfigError::Unreadable { .. })
        ));
    }
}
