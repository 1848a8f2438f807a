//! User service: orchestrates lookups, mutation and soft delete

use std::sync::Arc;
use tracing::info;

use crate::{
    error::{UserError, UserResult},
    models::{User, UserModificationData, UserRegistrationData},
    repositories::UserRepository,
};

/// Service layer for user business logic
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: impl UserRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user from an already validated registration
    pub async fn create_user(&self, data: UserRegistrationData) -> UserResult<User> {
        let user = User::create(data.name, data.password, data.email);
        let user = self.repository.insert(user).await?;

        info!(user_id = ?user.id(), "Created user");
        Ok(user)
    }

    /// Overwrite name and password of a live user
    pub async fn update_user(&self, id: i64, data: UserModificationData) -> UserResult<User> {
        let mut user = self.find_live_user(id).await?;

        user.change(data.into());
        let user = self.write_live_user(id, user).await?;

        info!(user_id = id, "Updated user");
        Ok(user)
    }

    /// Soft-delete a live user and return it as it was deleted
    pub async fn delete_user(&self, id: i64) -> UserResult<User> {
        let mut user = self.find_live_user(id).await?;

        user.mark_deleted();
        let user = self.write_live_user(id, user).await?;

        info!(user_id = id, "Deleted user");
        Ok(user)
    }

    async fn find_live_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// The user may have been deleted since it was read; that is a NotFound too.
    async fn write_live_user(&self, id: i64, user: User) -> UserResult<User> {
        self.repository
            .save(user)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::UserChange, repositories::InMemoryUserRepository};
    use async_trait::async_trait;
    use common::error::DatabaseResult;

    /// Hands out a live copy of the user, then deletes it before the caller writes back
    struct DeletedAfterRead {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for DeletedAfterRead {
        async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
            let user = self.inner.find_by_id(id).await?;
            if let Some(user) = &user {
                let mut deleted = user.clone();
                deleted.mark_deleted();
                self.inner.save(deleted).await?;
            }
            Ok(user)
        }

        async fn insert(&self, user: User) -> DatabaseResult<User> {
            self.inner.insert(user).await
        }

        async fn save(&self, user: User) -> DatabaseResult<Option<User>> {
            self.inner.save(user).await
        }
    }

    fn registration() -> UserRegistrationData {
        UserRegistrationData::new("Hyuk", "!234", "pjh0819@naver.com")
    }

    fn service() -> (UserService, InMemoryUserRepository) {
        let repository = InMemoryUserRepository::new();
        (UserService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_create_user_persists_and_assigns_id() {
        let (service, repository) = service();

        let user = service.create_user(registration()).await.unwrap();

        assert_eq!(user.id(), Some(1));
        assert_eq!(user.name(), "Hyuk");
        assert_eq!(user.email(), "pjh0819@naver.com");
        assert!(!user.is_deleted());
        assert_eq!(repository.stored_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_user_changes_credentials_only() {
        let (service, repository) = service();
        let created = service.create_user(registration()).await.unwrap();
        let id = created.id().unwrap();

        let updated = service
            .update_user(id, UserModificationData::new("Update Hyuk", "123$"))
            .await
            .unwrap();

        assert_eq!(updated.name(), "Update Hyuk");
        assert_eq!(updated.password(), "123$");
        assert_eq!(updated.email(), "pjh0819@naver.com");

        let stored = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let (service, _) = service();

        let result = service
            .update_user(42, UserModificationData::new("Update Hyuk", "123$"))
            .await;

        assert!(matches!(result, Err(UserError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_user_hides_but_keeps_record() {
        let (service, repository) = service();
        let id = service.create_user(registration()).await.unwrap().id().unwrap();

        let deleted = service.delete_user(id).await.unwrap();

        assert!(deleted.is_deleted());
        assert_eq!(deleted.name(), "Hyuk");
        assert!(repository.find_by_id(id).await.unwrap().is_none());
        assert_eq!(repository.stored_count().await, 1);
    }

    #[tokio::test]
    async fn test_deleted_user_cannot_be_updated_or_deleted_again() {
        let (service, _) = service();
        let id = service.create_user(registration()).await.unwrap().id().unwrap();
        service.delete_user(id).await.unwrap();

        let update = service
            .update_user(id, UserModificationData::new("Update Hyuk", "123$"))
            .await;
        let delete = service.delete_user(id).await;

        assert!(matches!(update, Err(UserError::NotFound(found)) if found == id));
        assert!(matches!(delete, Err(UserError::NotFound(found)) if found == id));
    }

    #[tokio::test]
    async fn test_delete_unknown_user_carries_id() {
        let (service, _) = service();

        let result = service.delete_user(i64::MAX).await;

        match result {
            Err(UserError::NotFound(id)) => assert_eq!(id, i64::MAX),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_copy_does_not_revive_deleted_user() {
        let (service, repository) = service();
        let id = service.create_user(registration()).await.unwrap().id().unwrap();
        let mut stale = repository.find_by_id(id).await.unwrap().unwrap();

        service.delete_user(id).await.unwrap();
        stale.change(UserChange::credentials("Update Hyuk", "123$"));

        assert!(repository.save(stale).await.unwrap().is_none());
        assert!(repository.find_by_id(id).await.unwrap().is_none());
        assert_eq!(repository.stored_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_after_concurrent_delete_is_not_found() {
        let inner = InMemoryUserRepository::new();
        let id = inner
            .insert(User::create("Hyuk", "!234", "pjh0819@naver.com"))
            .await
            .unwrap()
            .id()
            .unwrap();
        let service = UserService::new(DeletedAfterRead {
            inner: inner.clone(),
        });

        let result = service
            .update_user(id, UserModificationData::new("Update Hyuk", "123$"))
            .await;

        assert!(matches!(result, Err(UserError::NotFound(found)) if found == id));
        assert!(inner.find_by_id(id).await.unwrap().is_none());
        assert_eq!(inner.stored_count().await, 1);
    }
}
