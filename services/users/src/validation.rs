//! Input validation utilities

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// Reject empty and whitespace-only values
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}

/// Validate email: a local part, an `@`, and a domain containing a dot
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ValidationError::new("email").with_message("invalid email format".into()));
    }

    Ok(())
}

/// JSON body extractor that runs the payload's validation rules
///
/// Every failure, including a missing or undecodable body, is rejected
/// with `400 Bad Request` before the handler runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}
