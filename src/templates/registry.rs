use super::emails::{ConfirmationEmail, NotificationEmail};
use super::pages::ContactView;
use crate::error::{RenderError, RenderResult};
use crate::models::Contact;
use askama::Template;
use std::collections::HashMap;

/// Renders a contact into an HTML email body.
pub type RenderFn = fn(&Contact) -> RenderResult<String>;

/// Renders named templates with a contact as context.
pub trait TemplateRenderer: Send + Sync {
    /// Render the template registered under `key`.
    fn render(&self, key: &str, contact: &Contact) -> RenderResult<String>;

    /// Whether `key` names a known template.
    fn has_template(&self, key: &str) -> bool;
}

/// Key → render function table.
#[derive(Clone)]
pub struct TemplateRegistry {
    renderers: HashMap<String, RenderFn>,
}

impl TemplateRegistry {
    /// Key of the built-in operator notification.
    pub const NOTIFICATION: &'static str = "email/notification.html";

    /// Key of the built-in submitter confirmation.
    pub const CONFIRMATION: &'static str = "email/confirmation.html";

    /// Registry with no templates.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the built-in email templates.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Self::NOTIFICATION, render_notification);
        registry.register(Self::CONFIRMATION, render_confirmation);
        registry
    }

    /// Add or replace the renderer for `key`.
    pub fn register(&mut self, key: impl Into<String>, render: RenderFn) -> &mut Self {
        self.renderers.insert(key.into(), render);
        self
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRenderer for TemplateRegistry {
    fn render(&self, key: &str, contact: &Contact) -> RenderResult<String> {
        let render = self
            .renderers
            .get(key)
            .ok_or_else(|| RenderError::UnknownTemplate(key.to_string()))?;
        render(contact)
    }

    fn has_template(&self, key: &str) -> bool {
        self.renderers.contains_key(key)
    }
}

fn render_notification(contact: &Contact) -> RenderResult<String> {
    let body = NotificationEmail {
        contact: ContactView::from_contact(contact),
    };
    Ok(body.render()?)
}

fn render_confirmation(contact: &Contact) -> RenderResult<String> {
    let body = ConfirmationEmail {
        contact: ContactView::from_contact(contact),
    };
    Ok(body.render()?)
}
