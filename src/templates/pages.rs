use crate::domain::Title;
use crate::forms::{ContactInput, FormErrors};
use crate::i18n::Translator;
use crate::models::Contact;
use askama::Template;

/// Display strings for one stored contact.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub id: String,
    pub title: &'static str,
    pub name: String,
    /// Title and name as used in salutations
    pub display_name: String,
    pub company: String,
    pub telephone: String,
    pub email: String,
    pub message: String,
}

impl ContactView {
    pub fn from_contact(contact: &Contact) -> Self {
        let details = &contact.details;
        Self {
            id: contact.id.to_string(),
            title: details.title.label(),
            name: details.name.clone(),
            display_name: contact.display_name(),
            company: details.company.clone().unwrap_or_default(),
            telephone: details.telephone.clone().unwrap_or_default(),
            email: details.email.to_string(),
            message: details.message.clone(),
        }
    }
}

/// Current value and translated errors of one form field.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub errors: Vec<String>,
}

/// One entry of the title drop-down.
#[derive(Debug, Clone)]
pub struct TitleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The contact form as rendered: submitted values plus field errors.
#[derive(Debug, Clone)]
pub struct ContactFormView {
    pub title_options: Vec<TitleOption>,
    pub title: FieldView,
    pub name: FieldView,
    pub company: FieldView,
    pub telephone: FieldView,
    pub email: FieldView,
    pub message: FieldView,
}

impl ContactFormView {
    /// Build the view, translating error keys. `errors` is `None` for a form
    /// that has not been submitted yet.
    pub fn new(
        input: &ContactInput,
        errors: Option<&FormErrors>,
        translator: &dyn Translator,
    ) -> Self {
        let field = |name: &str, value: &str| FieldView {
            value: value.to_string(),
            errors: errors
                .map(|errors| {
                    errors
                        .for_field(name)
                        .iter()
                        .map(|key| translator.trans_plain(key))
                        .collect()
                })
                .unwrap_or_default(),
        };

        let selected = input.title.trim();
        Self {
            title_options: Title::ALL
                .into_iter()
                .map(|title| TitleOption {
                    value: title.key(),
                    label: title.label(),
                    selected: title.key() == selected,
                })
                .collect(),
            title: field("title", &input.title),
            name: field("name", &input.name),
            company: field("company", &input.company),
            telephone: field("telephone", &input.telephone),
            email: field("email", &input.email),
            message: field("message", &input.message),
        }
    }
}

/// Public contact page.
#[derive(Template)]
#[template(path = "contact/form.html")]
pub struct ContactFormPage {
    pub form: ContactFormView,
    /// Confirmation text after a successful submission, empty otherwise
    pub thanks: String,
}

/// Admin list of all stored contacts.
#[derive(Template)]
#[template(path = "admin/index.html")]
pub struct AdminIndexPage {
    pub contacts: Vec<ContactView>,
}

/// Admin view of one contact.
#[derive(Template)]
#[template(path = "admin/show.html")]
pub struct AdminShowPage {
    pub contact_id: String,
    pub contact: ContactView,
}

impl AdminShowPage {
    pub fn new(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id.to_string(),
            contact: ContactView::from_contact(contact),
        }
    }
}

/// Admin form for a new contact.
#[derive(Template)]
#[template(path = "admin/new.html")]
pub struct AdminNewPage {
    pub form: ContactFormView,
}

/// Admin form for an existing contact.
#[derive(Template)]
#[template(path = "admin/edit.html")]
pub struct AdminEditPage {
    pub contact_id: String,
    pub form: ContactFormView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ContactForm;
    use crate::i18n::Catalog;

    #[test]
    fn test_form_view_marks_selected_title() {
        let input = ContactInput {
            title: "ms".to_string(),
            ..Default::default()
        };
        let view = ContactFormView::new(&input, None, &Catalog::new());

        let selected: Vec<_> = view
            .title_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["ms"]);
        assert!(view.email.errors.is_empty());
    }

    #[test]
    fn test_form_view_translates_errors() {
        let input = ContactInput {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        let errors = ContactForm::bind(&input).unwrap_err();
        let view = ContactFormView::new(&input, Some(&errors), &Catalog::new());

        assert_eq!(view.email.value, "not-an-email");
        assert_eq!(
            view.email.errors,
            vec!["This value is not a valid email address.".to_string()]
        );
        assert!(view.company.errors.is_empty());
    }

    #[test]
    fn test_form_page_renders_thanks_and_values() {
        let input = ContactInput {
            name: "Jane \"JD\" Doe".to_string(),
            ..Default::default()
        };
        let page = ContactFormPage {
            form: ContactFormView::new(&input, None, &Catalog::new()),
            thanks: "Thanks!".to_string(),
        };
        let html = page.render().unwrap();

        assert!(html.contains("Thanks!"));
        assert!(html.contains("action=\"/contact/submit\""));
        assert!(html.contains("Jane &quot;JD&quot; Doe") || html.contains("Jane &#34;JD&#34; Doe"));
    }

    #[test]
    fn test_index_page_lists_contacts() {
        let page = AdminIndexPage {
            contacts: vec![ContactView {
                id: "7".to_string(),
                title: "Dr",
                name: "Who".to_string(),
                display_name: "Dr Who".to_string(),
                company: String::new(),
                telephone: String::new(),
                email: "who@example.com".to_string(),
                message: "Hi".to_string(),
            }],
        };
        let html = page.render().unwrap();
        assert!(html.contains("/admin/contact/7/show"));
        assert!(html.contains("who@example.com"));
    }
}
