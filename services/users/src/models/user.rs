//! User entity and its state transitions

use sqlx::FromRow;

/// User entity
///
/// A user is never removed from storage. Deleting it sets the `deleted`
/// flag, after which repositories no longer return it from lookups.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    id: Option<i64>,
    name: String,
    password: String,
    email: String,
    deleted: bool,
}

/// Fields to overwrite on an existing user
///
/// `name` and `password` are always replaced, `email` only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChange {
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

impl UserChange {
    /// Change of name and password, leaving the email as it is
    pub fn credentials(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            email: None,
        }
    }

    /// Change of name, password and email
    pub fn profile(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            email: Some(email.into()),
        }
    }
}

impl User {
    /// Create a user that has not been persisted yet
    pub fn create(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            password: password.into(),
            email: email.into(),
            deleted: false,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Apply a change set in place. The deleted flag is left untouched.
    pub fn change(&mut self, change: UserChange) {
        self.name = change.name;
        self.password = change.password;
        if let Some(email) = change.email {
            self.email = email;
        }
    }

    /// Flag the user as deleted. There is no way back.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Attach the identifier assigned by the store on first save
    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
