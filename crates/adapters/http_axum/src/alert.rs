//! Alert headers attached to mutation responses and client errors.
//!
//! Header names are derived from the application name:
//! `x-{app}-alert`, `x-{app}-error` and `x-{app}-params`.

use axum::http::header::InvalidHeaderName;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use restricted_domain::error::ValidationError;
use restricted_domain::id::RestrictedEntityId;

/// Entity name reported in alert messages.
pub const ENTITY_NAME: &str = "restrictedMicroserviceRestrictedEntity";

/// Builds alert headers for one application name.
#[derive(Debug, Clone)]
pub struct Alerts {
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl Alerts {
    /// Prepare header names for `application_name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderName`] when the name contains characters that
    /// are not allowed in an HTTP header name.
    pub fn new(application_name: &str) -> Result<Self, InvalidHeaderName> {
        let prefix = format!("x-{}", application_name.to_ascii_lowercase());
        Ok(Self {
            alert: HeaderName::try_from(format!("{prefix}-alert"))?,
            error: HeaderName::try_from(format!("{prefix}-error"))?,
            params: HeaderName::try_from(format!("{prefix}-params"))?,
        })
    }

    #[must_use]
    pub fn created(&self, id: RestrictedEntityId) -> HeaderMap {
        self.build(
            &self.alert,
            format!("A new {ENTITY_NAME} is created with identifier {id}"),
            id.to_string(),
        )
    }

    #[must_use]
    pub fn updated(&self, id: RestrictedEntityId) -> HeaderMap {
        self.build(
            &self.alert,
            format!("A {ENTITY_NAME} is updated with identifier {id}"),
            id.to_string(),
        )
    }

    #[must_use]
    pub fn deleted(&self, id: RestrictedEntityId) -> HeaderMap {
        self.build(
            &self.alert,
            format!("A {ENTITY_NAME} is deleted with identifier {id}"),
            id.to_string(),
        )
    }

    /// Headers for a rejected request, keyed by the validation error code.
    #[must_use]
    pub fn failure(&self, err: &ValidationError) -> HeaderMap {
        self.build(
            &self.error,
            format!("error.{}", err.error_key()),
            ENTITY_NAME.to_string(),
        )
    }

    fn build(&self, name: &HeaderName, message: String, params: String) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::try_from(message) {
            headers.insert(name.clone(), value);
        }
        if let Ok(value) = HeaderValue::try_from(params) {
            headers.insert(self.params.clone(), value);
        }
        headers
    }
}
