//! Form binding and validation.
//!
//! Raw request fields are bound onto plain input structs, then validated into
//! domain types. The same contact form backs the public page and the admin
//! screen.

pub mod contact_form;
pub mod delete_form;

pub use contact_form::{ContactForm, ContactInput, FormErrors};
pub use delete_form::{DeleteForm, DeleteInput};
