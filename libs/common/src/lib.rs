//! Common library for the user service
//!
//! This crate provides the PostgreSQL plumbing shared by the services:
//! connection configuration, pool initialization, health checks and the
//! database error type.

pub mod database;
pub mod error;

pub use error::{DatabaseError, DatabaseResult};
