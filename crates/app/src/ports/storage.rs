//! Storage port: repository traits for record tables.
//!
//! A repository owns one table: a mapping from a store-assigned id to a
//! record. Ids are generated by the repository on `create` and are never
//! supplied by callers.

use std::collections::BTreeMap;
use std::future::Future;

use spothub_domain::error::SpotHubError;
use spothub_domain::id::{SpotId, UserId};
use spothub_domain::record::Keyed;
use spothub_domain::spot::Spot;
use spothub_domain::user::{User, UserPatch};

/// Full contents of the spot table, ordered by id.
pub type SpotMap = BTreeMap<SpotId, Spot>;

/// Full contents of the user table, ordered by id.
pub type UserMap = BTreeMap<UserId, User>;

/// Persistence operations for [`Spot`] records.
pub trait SpotRepository {
    /// Store a new spot under a freshly generated id.
    fn create(
        &self,
        spot: Spot,
    ) -> impl Future<Output = Result<Keyed<SpotId, Spot>, SpotHubError>> + Send;

    fn get_by_id(
        &self,
        id: &SpotId,
    ) -> impl Future<Output = Result<Option<Spot>, SpotHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<SpotMap, SpotHubError>> + Send;

    /// Every spot whose zipcode equals `zipcode` exactly, ordered by id.
    fn find_by_zipcode(
        &self,
        zipcode: &str,
    ) -> impl Future<Output = Result<Vec<(SpotId, Spot)>, SpotHubError>> + Send;

    /// Remove a spot, returning it if it existed.
    fn delete(
        &self,
        id: &SpotId,
    ) -> impl Future<Output = Result<Option<Spot>, SpotHubError>> + Send;
}

/// Persistence operations for [`User`] records.
pub trait UserRepository {
    /// Store a new user under a freshly generated id.
    fn create(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Keyed<UserId, User>, SpotHubError>> + Send;

    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, SpotHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<UserMap, SpotHubError>> + Send;

    /// Apply `patch` to an existing user in a single step and return the
    /// result. Returns `None` without inserting when `id` is not present.
    fn patch(
        &self,
        id: &UserId,
        patch: UserPatch,
    ) -> impl Future<Output = Result<Option<User>, SpotHubError>> + Send;

    /// Remove a user, returning it if it existed.
    fn delete(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, SpotHubError>> + Send;
}
