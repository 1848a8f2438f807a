//! User management service
//!
//! Create, update and soft-delete user records over HTTP. Deleted users stay
//! in storage but are invisible to every lookup.
//!
//! ```rust,no_run
//! use users::{repositories::InMemoryUserRepository, routes, state::AppState};
//!
//! let app = routes::create_router(AppState::new(InMemoryUserRepository::new()));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;
