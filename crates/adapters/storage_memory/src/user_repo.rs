//! In-memory implementation of [`UserRepository`].

use spothub_app::ports::{UserMap, UserRepository};
use spothub_domain::error::SpotHubError;
use spothub_domain::id::UserId;
use spothub_domain::record::Keyed;
use spothub_domain::user::{User, UserPatch};

use crate::table::Table;

/// User table held in process memory.
#[derive(Default)]
pub struct MemoryUserRepository {
    table: Table<UserId, User>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: User) -> Result<Keyed<UserId, User>, SpotHubError> {
        Ok(self.table.insert(user).await)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, SpotHubError> {
        Ok(self.table.get(id).await)
    }

    async fn get_all(&self) -> Result<UserMap, SpotHubError> {
        Ok(self.table.all().await)
    }

    async fn patch(&self, id: &UserId, patch: UserPatch) -> Result<Option<User>, SpotHubError> {
        Ok(self.table.modify(id, |user| patch.apply(user)).await)
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, SpotHubError> {
        Ok(self.table.remove(id).await)
    }
}
