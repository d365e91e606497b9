//! Domain value objects and types.
//!
//! Type-safe wrappers for contact identifiers, email addresses and titles.
//! These value objects validate at construction time and keep invalid data
//! out of stored records.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod title;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use title::Title;
