//! Repositories for user persistence
//!
//! Reads never return users whose `deleted` flag is set. Implementations
//! enforce this themselves so callers cannot forget to filter.

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::User;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

/// Persistence capability used by the user service
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user that has not been deleted
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>>;

    /// Insert a new user, returning it with its assigned id
    async fn insert(&self, user: User) -> DatabaseResult<User>;

    /// Write back a saved user, returning the stored state
    ///
    /// Only live rows are written. Returns `None` when the user has no id,
    /// no stored row, or a stored row that is already deleted.
    async fn save(&self, user: User) -> DatabaseResult<Option<User>>;
}
