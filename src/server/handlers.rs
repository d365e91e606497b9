use super::extract::RequestOverrides;
use super::response::{render_page, HttpError};
use super::AppState;
use crate::forms::{ContactInput, DeleteInput};
use crate::services::{DeleteOutcome, FormOutcome, SubmitOutcome};
use crate::templates::{
    AdminEditPage, AdminIndexPage, AdminNewPage, AdminShowPage, ContactFormPage,
    ContactFormView, ContactView,
};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{debug, warn};

const SENT_STATUS: &str = "sent";
const ADMIN_INDEX: &str = "/admin/contact/";

type HandlerResult<T> = Result<T, HttpError>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ContactPageQuery {
    status: Option<String>,
}

pub(super) async fn contact_form(
    State(state): State<AppState>,
    RequestOverrides(overrides): RequestOverrides,
    Query(query): Query<ContactPageQuery>,
) -> HandlerResult<Html<String>> {
    let thanks = if query.status.as_deref() == Some(SENT_STATUS) {
        state.contact_form.thanks_message(&overrides)
    } else {
        String::new()
    };

    let input = state.contact_form.display_form();
    render_page(&ContactFormPage {
        form: ContactFormView::new(&input, None, state.translator.as_ref()),
        thanks,
    })
}

pub(super) async fn contact_submit(
    State(state): State<AppState>,
    RequestOverrides(overrides): RequestOverrides,
    Form(input): Form<ContactInput>,
) -> HandlerResult<Response> {
    match state.contact_form.submit(input, &overrides).await? {
        SubmitOutcome::Invalid { input, errors } => {
            let page = ContactFormPage {
                form: ContactFormView::new(&input, Some(&errors), state.translator.as_ref()),
                thanks: String::new(),
            };
            Ok(render_page(&page)?.into_response())
        }
        SubmitOutcome::Accepted(submission) => {
            if !submission.delivery.is_complete() {
                warn!(
                    contact_id = %submission.contact.id,
                    "Submission stored with undelivered email"
                );
            }
            Ok(Redirect::to(&format!("/contact?status={}", SENT_STATUS)).into_response())
        }
    }
}

pub(super) async fn admin_index(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    let contacts = state.admin.list().await?;
    debug!("Listing {} contacts", contacts.len());

    render_page(&AdminIndexPage {
        contacts: contacts.iter().map(ContactView::from_contact).collect(),
    })
}

pub(super) async fn admin_show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Html<String>> {
    let contact = state.admin.show(&id).await?;
    render_page(&AdminShowPage::new(&contact))
}

pub(super) async fn admin_new(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    let input = state.admin.new_form();
    render_page(&AdminNewPage {
        form: ContactFormView::new(&input, None, state.translator.as_ref()),
    })
}

pub(super) async fn admin_create(
    State(state): State<AppState>,
    Form(input): Form<ContactInput>,
) -> HandlerResult<Response> {
    match state.admin.create(input).await? {
        FormOutcome::Saved(contact) => {
            Ok(Redirect::to(&format!("/admin/contact/{}/show", contact.id)).into_response())
        }
        FormOutcome::Invalid { input, errors } => {
            let page = AdminNewPage {
                form: ContactFormView::new(&input, Some(&errors), state.translator.as_ref()),
            };
            Ok(render_page(&page)?.into_response())
        }
    }
}

pub(super) async fn admin_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Html<String>> {
    let (contact, input) = state.admin.edit(&id).await?;
    render_page(&AdminEditPage {
        contact_id: contact.id.to_string(),
        form: ContactFormView::new(&input, None, state.translator.as_ref()),
    })
}

pub(super) async fn admin_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<ContactInput>,
) -> HandlerResult<Response> {
    match state.admin.update(&id, input).await? {
        FormOutcome::Saved(contact) => {
            Ok(Redirect::to(&format!("/admin/contact/{}/edit", contact.id)).into_response())
        }
        FormOutcome::Invalid { input, errors } => {
            // The service only reports invalid input for an existing record.
            let page = AdminEditPage {
                contact_id: id.trim().to_string(),
                form: ContactFormView::new(&input, Some(&errors), state.translator.as_ref()),
            };
            Ok(render_page(&page)?.into_response())
        }
    }
}

pub(super) async fn admin_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(token): Form<DeleteInput>,
) -> HandlerResult<Redirect> {
    if state.admin.delete(&id, &token).await? == DeleteOutcome::Rejected {
        debug!("Delete of contact {} ignored", id);
    }
    Ok(Redirect::to(ADMIN_INDEX))
}
