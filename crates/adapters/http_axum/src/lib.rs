//! # spothub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for spots and users
//!   (`/spots`, `/spots/{id}`, `/spots/location/{zipcode}`, `/users`, `/users/{id}`)
//! - Decode form-urlencoded request bodies and parse typed fields at the boundary
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into status codes and (Norwegian) response messages
//!
//! ## Dependency rule
//! Depends on `spothub-app` (for port traits and services) and `spothub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod messages;
pub mod router;
pub mod state;
