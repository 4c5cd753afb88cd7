//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod spots;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use spothub_app::ports::{SpotRepository, UserRepository};

use crate::state::AppState;

/// Build the spot and user sub-router.
pub fn routes<SR, UR>() -> Router<AppState<SR, UR>>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Spots
        .route(
            "/spots",
            get(spots::list::<SR, UR>).post(spots::create::<SR, UR>),
        )
        .route(
            "/spots/{id}",
            get(spots::get::<SR, UR>).delete(spots::delete::<SR, UR>),
        )
        .route(
            "/spots/location/{zipcode}",
            get(spots::by_zipcode::<SR, UR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, UR>).post(users::create::<SR, UR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<SR, UR>)
                .patch(users::update::<SR, UR>)
                .delete(users::delete::<SR, UR>),
        )
}
