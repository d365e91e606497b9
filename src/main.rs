//! Contact Desk - Main entry point
//!
//! Serves the public contact form and the admin screen over HTTP.

use anyhow::Result;
use contact_desk::i18n::{Catalog, Translator};
use contact_desk::mail::{LogMailer, Mailer, SmtpMailer};
use contact_desk::repositories::{
    ContactRepository, FileContactRepository, InMemoryContactRepository,
};
use contact_desk::services::{
    ContactAdminService, ContactAdminServiceImpl, ContactFormService, ContactFormServiceImpl,
    NotificationService, NotificationServiceImpl,
};
use contact_desk::templates::{TemplateRegistry, TemplateRenderer};
use contact_desk::{AppState, Config, Metrics};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Config loads .env first, so RUST_LOG and LOG_LEVEL from it apply here
    let config = Config::from_env();
    let log_level = config.as_ref().map_or("info", |cfg| cfg.log_level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let catalog = match &config.translations_path {
        Some(path) => {
            info!("Loading translations from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => Catalog::new(),
    };
    let translator = Arc::new(catalog) as Arc<dyn Translator>;

    // Unknown template keys fail here rather than on the first submission
    let registry = TemplateRegistry::builtin();
    config.contact.validate_templates(&registry)?;
    let renderer = Arc::new(registry) as Arc<dyn TemplateRenderer>;

    let contact_repo = match &config.store_path {
        Some(path) => {
            info!("Using contact store at {}", path.display());
            Arc::new(FileContactRepository::open(path.clone()).await?) as Arc<dyn ContactRepository>
        }
        None => {
            warn!("CONTACT_STORE_PATH not set; submissions are kept in memory only");
            Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>
        }
    };

    let mailer = match &config.smtp {
        Some(smtp) => {
            info!("Sending mail through {}:{}", smtp.host, smtp.port);
            Arc::new(SmtpMailer::new(smtp)?) as Arc<dyn Mailer>
        }
        None => {
            warn!("SMTP_HOST not set; outgoing mail is logged only");
            Arc::new(LogMailer) as Arc<dyn Mailer>
        }
    };

    let metrics = Metrics::new();
    let settings = Arc::new(config.contact.clone());

    let notifications = Arc::new(NotificationServiceImpl::new(
        renderer,
        translator.clone(),
        mailer,
    )) as Arc<dyn NotificationService>;
    let contact_form = Arc::new(ContactFormServiceImpl::new(
        contact_repo.clone(),
        notifications,
        translator.clone(),
        settings,
        metrics.clone(),
    )) as Arc<dyn ContactFormService>;
    let admin = Arc::new(ContactAdminServiceImpl::new(contact_repo, metrics.clone()))
        as Arc<dyn ContactAdminService>;

    let state = AppState::new(contact_form, admin, translator);

    info!("Starting contact desk on {}", config.bind_addr);
    contact_desk::run_server(config.bind_addr, state).await?;

    info!("Shutdown complete: {:?}", metrics.summary());
    Ok(())
}
