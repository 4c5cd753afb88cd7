//! Shared application state for axum handlers.

use std::sync::Arc;

use spothub_app::ports::{SpotRepository, UserRepository};
use spothub_app::services::spot_service::SpotService;
use spothub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR, UR> {
    /// Spot service.
    pub spot_service: Arc<SpotService<SR>>,
    /// User service.
    pub user_service: Arc<UserService<UR>>,
}

impl<SR, UR> Clone for AppState<SR, UR> {
    fn clone(&self) -> Self {
        Self {
            spot_service: Arc::clone(&self.spot_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<SR, UR> AppState<SR, UR>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(spot_service: SpotService<SR>, user_service: UserService<UR>) -> Self {
        Self {
            spot_service: Arc::new(spot_service),
            user_service: Arc::new(user_service),
        }
    }
}
