//! HTML rendering for pages and email bodies.
//!
//! Email bodies are looked up by key in a [`TemplateRegistry`] built once at
//! startup, so configuration can pick which template a notification uses
//! without resolving anything per request. Pages are plain askama templates.

mod emails;
mod pages;
mod registry;

pub use emails::{ConfirmationEmail, NotificationEmail};
pub use pages::{
    AdminEditPage, AdminIndexPage, AdminNewPage, AdminShowPage, ContactFormPage,
    ContactFormView, ContactView, FieldView, TitleOption,
};
pub use registry::{RenderFn, TemplateRegistry, TemplateRenderer};
