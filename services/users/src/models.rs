//! API models for request and response payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::ApiError,
    validation::{validate_email_format, validate_not_blank},
};

pub mod user;

pub use user::{User, UserChange};

/// Request for user registration
///
/// Absent fields deserialize as empty strings so they fail validation
/// instead of the JSON decoding step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserRegistrationData {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,
}

impl UserRegistrationData {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

/// Request for user modification. The email cannot be changed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserModificationData {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

impl UserModificationData {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl From<UserModificationData> for UserChange {
    fn from(data: UserModificationData) -> Self {
        UserChange::credentials(data.name, data.password)
    }
}

/// Response for user operations
///
/// Only saved users can be rendered, so `id` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl TryFrom<&User> for UserResponse {
    type Error = ApiError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let id = user.id().ok_or_else(|| {
            ApiError::InternalServerError(format!("user {} has not been saved", user.name()))
        })?;

        Ok(Self {
            id,
            name: user.name().to_string(),
            email: user.email().to_string(),
        })
    }
}

impl TryFrom<User> for UserResponse {
    type Error = ApiError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Self::try_from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_accepts_valid_payload() {
        let data = UserRegistrationData::new("Hyuk", "!234", "pjh0819@naver.com");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_registration_rejects_missing_name() {
        let data: UserRegistrationData =
            serde_json::from_str(r#"{"password":"!234","email":"pjh0819@naver.com"}"#).unwrap();

        let errors = data.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_registration_rejects_blank_password() {
        let data = UserRegistrationData::new("Hyuk", "   ", "pjh0819@naver.com");

        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_registration_rejects_malformed_email() {
        for email in ["pjh0819", "pjh0819@naver", "@naver.com", ""] {
            let data = UserRegistrationData::new("Hyuk", "!234", email);
            let errors = data.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("email"),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_modification_requires_name_and_password() {
        assert!(UserModificationData::new("Update Hyuk", "123$").validate().is_ok());

        let errors = UserModificationData::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_modification_ignores_email_field() {
        let data: UserModificationData = serde_json::from_str(
            r#"{"name":"Update Hyuk","password":"123$","email":"other@naver.com"}"#,
        )
        .unwrap();

        assert_eq!(UserChange::from(data), UserChange::credentials("Update Hyuk", "123$"));
    }

    #[test]
    fn test_response_omits_password() {
        let user = User::create("Hyuk", "!234", "pjh0819@naver.com").with_id(1);

        let json = serde_json::to_value(UserResponse::try_from(&user).unwrap()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Hyuk");
        assert_eq!(json["email"], "pjh0819@naver.com");
        assert!(json.get("password").is_none());
        assert!(json.get("deleted").is_none());
    }

    #[test]
    fn test_response_requires_saved_user() {
        let user = User::create("Hyuk", "!234", "pjh0819@naver.com");

        let result = UserResponse::try_from(user);

        assert!(matches!(result, Err(ApiError::InternalServerError(_))));
    }
}
