//! Configuration management for the contact desk.
//!
//! Settings are read once at startup from environment variables (with an
//! optional `.env` file) and shared read-only afterwards. Per-request
//! overrides are layered on top with [`ContactSettings::resolve`].

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use crate::i18n::MessageParams;
use crate::mail::{SmtpSettings, SmtpTls};
use crate::templates::{TemplateRegistry, TemplateRenderer};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Contact form behaviour: who gets notified, with which templates and
/// subject parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Operators notified about each submission (at least one)
    pub notification_addresses: Vec<EmailAddress>,

    /// Sender of the confirmation sent back to the submitter
    pub confirmation_from_address: EmailAddress,

    /// Template key of the notification body
    pub notification_template: String,

    /// Template key of the confirmation body
    pub confirmation_template: String,

    /// Parameters for the translated notification subject
    pub notification_subject: MessageParams,

    /// Parameters for the translated confirmation subject
    pub confirmation_subject: MessageParams,

    /// Parameters for the translated thanks message
    pub contact_thanks_message: MessageParams,
}

impl ContactSettings {
    /// Settings with the built-in templates and no message parameters.
    pub fn new(
        notification_addresses: Vec<EmailAddress>,
        confirmation_from_address: EmailAddress,
    ) -> Self {
        Self {
            notification_addresses,
            confirmation_from_address,
            notification_template: TemplateRegistry::NOTIFICATION.to_string(),
            confirmation_template: TemplateRegistry::CONFIRMATION.to_string(),
            notification_subject: MessageParams::new(),
            confirmation_subject: MessageParams::new(),
            contact_thanks_message: MessageParams::new(),
        }
    }

    /// Effective settings for one request: every override that is set wins,
    /// everything else falls back to these process-wide settings.
    pub fn resolve(&self, overrides: &SettingsOverrides) -> ContactSettings {
        ContactSettings {
            notification_addresses: overrides
                .notification_addresses
                .clone()
                .filter(|addresses| !addresses.is_empty())
                .unwrap_or_else(|| self.notification_addresses.clone()),
            confirmation_from_address: overrides
                .confirmation_from_address
                .clone()
                .unwrap_or_else(|| self.confirmation_from_address.clone()),
            notification_template: overrides
                .notification_template
                .clone()
                .unwrap_or_else(|| self.notification_template.clone()),
            confirmation_template: overrides
                .confirmation_template
                .clone()
                .unwrap_or_else(|| self.confirmation_template.clone()),
            notification_subject: overrides
                .notification_subject
                .clone()
                .unwrap_or_else(|| self.notification_subject.clone()),
            confirmation_subject: overrides
                .confirmation_subject
                .clone()
                .unwrap_or_else(|| self.confirmation_subject.clone()),
            contact_thanks_message: overrides
                .contact_thanks_message
                .clone()
                .unwrap_or_else(|| self.contact_thanks_message.clone()),
        }
    }

    /// Check both template keys against the registry.
    pub fn validate_templates(&self, renderer: &dyn TemplateRenderer) -> ConfigResult<()> {
        let checks = [
            ("CONTACT_NOTIFICATION_TEMPLATE", &self.notification_template),
            ("CONTACT_CONFIRMATION_TEMPLATE", &self.confirmation_template),
        ];
        for (var, key) in checks {
            if !renderer.has_template(key) {
                return Err(ConfigError::InvalidValue {
                    var: var.to_string(),
                    reason: format!("No template registered as {}", key),
                });
            }
        }
        Ok(())
    }
}

/// Request-scoped replacements for [`ContactSettings`] fields.
///
/// An embedding application inserts these into request extensions (for
/// example from its own session middleware); unset fields fall back to the
/// process-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub notification_addresses: Option<Vec<EmailAddress>>,
    pub confirmation_from_address: Option<EmailAddress>,
    pub notification_template: Option<String>,
    pub confirmation_template: Option<String>,
    pub notification_subject: Option<MessageParams>,
    pub confirmation_subject: Option<MessageParams>,
    pub contact_thanks_message: Option<MessageParams>,
}

/// Configuration for the contact desk server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Contact form behaviour
    pub contact: ContactSettings,

    /// SMTP relay; `None` logs emails instead of sending them
    pub smtp: Option<SmtpSettings>,

    /// JSON file backing the store; `None` keeps records in memory
    pub store_path: Option<PathBuf>,

    /// JSON file overriding built-in messages
    pub translations_path: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_NOTIFICATION_ADDRESSES`: comma-separated operator addresses
    /// - `CONTACT_CONFIRMATION_FROM_ADDRESS`: sender of confirmations
    ///
    /// Optional environment variables:
    /// - `CONTACT_NOTIFICATION_TEMPLATE` / `CONTACT_CONFIRMATION_TEMPLATE`: template keys
    /// - `CONTACT_NOTIFICATION_SUBJECT` / `CONTACT_CONFIRMATION_SUBJECT` /
    ///   `CONTACT_THANKS_MESSAGE`: `name=value,...` message parameters
    /// - `CONTACT_BIND_ADDR`: listen address (default: 127.0.0.1:8080)
    /// - `CONTACT_STORE_PATH`: JSON store file (default: in-memory)
    /// - `CONTACT_TRANSLATIONS_PATH`: message overrides
    /// - `SMTP_HOST`, `SMTP_PORT` (587), `SMTP_USER`, `SMTP_PASSWORD`, `SMTP_TLS` (starttls)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let raw_addresses = env::var("CONTACT_NOTIFICATION_ADDRESSES").map_err(|_| {
            ConfigError::MissingVar("CONTACT_NOTIFICATION_ADDRESSES".to_string())
        })?;
        let notification_addresses =
            Self::parse_address_list("CONTACT_NOTIFICATION_ADDRESSES", &raw_addresses)?;

        let raw_from = env::var("CONTACT_CONFIRMATION_FROM_ADDRESS").map_err(|_| {
            ConfigError::MissingVar("CONTACT_CONFIRMATION_FROM_ADDRESS".to_string())
        })?;
        let confirmation_from_address =
            Self::parse_address("CONTACT_CONFIRMATION_FROM_ADDRESS", raw_from.trim())?;

        let mut contact = ContactSettings::new(notification_addresses, confirmation_from_address);
        if let Some(key) = Self::non_empty_var("CONTACT_NOTIFICATION_TEMPLATE") {
            contact.notification_template = key;
        }
        if let Some(key) = Self::non_empty_var("CONTACT_CONFIRMATION_TEMPLATE") {
            contact.confirmation_template = key;
        }
        contact.notification_subject = Self::parse_env_params("CONTACT_NOTIFICATION_SUBJECT")?;
        contact.confirmation_subject = Self::parse_env_params("CONTACT_CONFIRMATION_SUBJECT")?;
        contact.contact_thanks_message = Self::parse_env_params("CONTACT_THANKS_MESSAGE")?;

        let bind_addr = match Self::non_empty_var("CONTACT_BIND_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CONTACT_BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:8080, got: {}", raw),
            })?,
            None => Self::default_bind_addr(),
        };

        let smtp = Self::smtp_from_env()?;
        let store_path = Self::non_empty_var("CONTACT_STORE_PATH").map(PathBuf::from);
        let translations_path = Self::non_empty_var("CONTACT_TRANSLATIONS_PATH").map(PathBuf::from);
        let log_level = Self::non_empty_var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            bind_addr,
            contact,
            smtp,
            store_path,
            translations_path,
            log_level,
        })
    }

    fn default_bind_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 8080))
    }

    fn smtp_from_env() -> ConfigResult<Option<SmtpSettings>> {
        let Some(host) = Self::non_empty_var("SMTP_HOST") else {
            return Ok(None);
        };

        let port = Self::parse_env_u16("SMTP_PORT", 587)?;

        let tls = match Self::non_empty_var("SMTP_TLS") {
            Some(raw) => raw
                .parse::<SmtpTls>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SMTP_TLS".to_string(),
                    reason,
                })?,
            None => SmtpTls::default(),
        };

        let credentials = match (
            Self::non_empty_var("SMTP_USER"),
            Self::non_empty_var("SMTP_PASSWORD"),
        ) {
            (Some(user), Some(password)) => Some((user, password)),
            (None, None) => None,
            _ => {
                return Err(ConfigError::InvalidValue {
                    var: "SMTP_USER".to_string(),
                    reason: "SMTP_USER and SMTP_PASSWORD must be set together".to_string(),
                })
            }
        };

        Ok(Some(SmtpSettings {
            host,
            port,
            credentials,
            tls,
        }))
    }

    /// Read a variable, treating blank values as unset.
    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_address(var_name: &str, raw: &str) -> ConfigResult<EmailAddress> {
        EmailAddress::new(raw).map_err(|e| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a comma-separated address list holding at least one address.
    fn parse_address_list(var_name: &str, raw: &str) -> ConfigResult<Vec<EmailAddress>> {
        let addresses = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self::parse_address(var_name, s))
            .collect::<ConfigResult<Vec<_>>>()?;

        if addresses.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "At least one address is required".to_string(),
            });
        }
        Ok(addresses)
    }

    /// Parse `name=value,name=value` message parameters; unset means none.
    fn parse_env_params(var_name: &str) -> ConfigResult<MessageParams> {
        let Some(raw) = Self::non_empty_var(var_name) else {
            return Ok(MessageParams::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                let (name, value) = item.split_once('=').ok_or_else(|| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Expected name=value, got: {}", item),
                })?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Empty parameter name in: {}", item),
                    });
                }
                Ok((name.to_string(), value.trim().to_string()))
            })
            .collect()
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}
