//! Message translation.
//!
//! Maps message keys plus named parameters to user-facing text: email
//! subjects, the thanks message and validation messages.

mod catalog;

pub use catalog::Catalog;

use std::collections::BTreeMap;

/// Named parameters substituted into a message.
pub type MessageParams = BTreeMap<String, String>;

/// Key → text lookup with parameter substitution.
pub trait Translator: Send + Sync {
    /// Translate `key`, substituting `%name%` placeholders from `params`.
    ///
    /// Unknown keys translate to the key itself.
    fn trans(&self, key: &str, params: &MessageParams) -> String;

    /// Translate a key that takes no parameters.
    fn trans_plain(&self, key: &str) -> String {
        self.trans(key, &MessageParams::new())
    }
}
