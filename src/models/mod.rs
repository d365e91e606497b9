//! Data models for stored contact submissions.

pub mod contact;

pub use contact::{Contact, ContactDetails};
