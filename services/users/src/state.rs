//! Application state shared across handlers

use crate::{repositories::UserRepository, service::UserService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(repository: impl UserRepository + 'static) -> Self {
        Self {
            user_service: UserService::new(repository),
        }
    }
}
