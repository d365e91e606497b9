//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for stored contact identifiers.
///
/// Identifiers are assigned by the repository on insert and never change
/// afterwards. Zero is reserved and never handed out.
///
/// # Example
///
/// ```
/// use contact_desk::domain::ContactId;
///
/// let id: ContactId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u64);

impl ContactId {
    /// Create a new ContactId, rejecting the reserved zero value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if `id` is zero.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// The first identifier a fresh store hands out.
    pub fn first() -> Self {
        Self(1)
    }

    /// Get the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, `None` once the id space is used up.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    /// Parse an identifier from a URL path segment or form field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(value)
    }
}

// Serde support - serialize as number
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from number with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        ContactId::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new(7).unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(id.next().map(ContactId::get), Some(8));
    }

    #[test]
    fn test_contact_id_next_at_max() {
        let last = ContactId::new(u64::MAX).unwrap();
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_contact_id_rejects_zero() {
        assert_eq!(
            ContactId::new(0),
            Err(ValidationError::InvalidId("0".to_string()))
        );
    }

    #[test]
    fn test_contact_id_parse() {
        assert_eq!("12".parse::<ContactId>().unwrap().get(), 12);
        assert!("abc".parse::<ContactId>().is_err());
        assert!("-1".parse::<ContactId>().is_err());
        assert!("0".parse::<ContactId>().is_err());
        assert!("".parse::<ContactId>().is_err());
    }

    #[test]
    fn test_contact_id_display() {
        let id = ContactId::new(123).unwrap();
        assert_eq!(format!("{}", id), "123");
    }

    #[test]
    fn test_contact_id_serde() {
        let id = ContactId::new(5).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        let back: ContactId = serde_json::from_str("5").unwrap();
        assert_eq!(back, id);

        let zero: Result<ContactId, _> = serde_json::from_str("0");
        assert!(zero.is_err());
    }
}
