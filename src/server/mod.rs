//! HTTP surface: the public contact page and the admin screen.
//!
//! Handlers are thin: they extract the request, call a service and render an
//! askama page or redirect. All behaviour lives in [`crate::services`].

mod extract;
mod handlers;
mod response;

pub use extract::RequestOverrides;
pub use response::HttpError;

use crate::i18n::Translator;
use crate::services::{ContactAdminService, ContactFormService};
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub contact_form: Arc<dyn ContactFormService>,
    pub admin: Arc<dyn ContactAdminService>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(
        contact_form: Arc<dyn ContactFormService>,
        admin: Arc<dyn ContactAdminService>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            contact_form,
            admin,
            translator,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/contact", get(handlers::contact_form))
        .route("/contact/submit", post(handlers::contact_submit))
        .route("/admin/contact", get(handlers::admin_index))
        .route("/admin/contact/", get(handlers::admin_index))
        .route("/admin/contact/new", get(handlers::admin_new))
        .route("/admin/contact/create", post(handlers::admin_create))
        .route("/admin/contact/{id}/show", get(handlers::admin_show))
        .route("/admin/contact/{id}/edit", get(handlers::admin_edit))
        .route("/admin/contact/{id}/update", post(handlers::admin_update))
        .route("/admin/contact/{id}/delete", post(handlers::admin_delete))
        .with_state(state)
}

/// Serve the router on `addr` until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
