//! # spothub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SpotRepository`: list, get, create, delete and zipcode lookup for spots
//!   - `UserRepository`: list, get, create, update and delete for users
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SpotService`: list, get, create, delete, filter by zipcode
//!   - `UserService`: list, get, create, update, delete
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `spothub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
