use crate::config::SettingsOverrides;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Settings overrides placed in the request extensions by outer middleware.
///
/// Absent extensions yield empty overrides, so the process-wide settings
/// apply unchanged.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides(pub SettingsOverrides);

impl<S> FromRequestParts<S> for RequestOverrides
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<SettingsOverrides>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
