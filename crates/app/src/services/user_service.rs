//! User service: use-cases for managing users.

use spothub_domain::error::SpotHubError;
use spothub_domain::id::UserId;
use spothub_domain::record::Keyed;
use spothub_domain::user::{User, UserPatch};

use crate::ports::{UserMap, UserRepository};

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every user keyed by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<UserMap, SpotHubError> {
        self.repo.get_all().await
    }

    /// Look up a user by id. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, SpotHubError> {
        self.repo.get_by_id(id).await
    }

    /// Store a new user and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_user(&self, user: User) -> Result<Keyed<UserId, User>, SpotHubError> {
        let created = self.repo.create(user).await?;
        tracing::info!(user_id = %created.id, is_firm = created.value.is_firm, "user created");
        Ok(created)
    }

    /// Apply a partial update to an existing user.
    ///
    /// Returns `Ok(None)` when the user does not exist; nothing is created.
    /// A patch with nothing to apply only reads the user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_user(
        &self,
        id: &UserId,
        patch: UserPatch,
    ) -> Result<Option<User>, SpotHubError> {
        let updated = if patch.is_empty() {
            self.repo.get_by_id(id).await?
        } else {
            self.repo.patch(id, patch).await?
        };
        if updated.is_some() {
            tracing::info!(user_id = %id, "user updated");
        } else {
            tracing::debug!(user_id = %id, "update requested for unknown user");
        }
        Ok(updated)
    }

    /// Delete a user, returning the removed record if it existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_user(&self, id: &UserId) -> Result<Option<User>, SpotHubError> {
        let removed = self.repo.delete(id).await?;
        if removed.is_some() {
            tracing::info!(user_id = %id, "user deleted");
        } else {
            tracing::debug!(user_id = %id, "delete requested for unknown user");
        }
        Ok(removed)
    }
}
