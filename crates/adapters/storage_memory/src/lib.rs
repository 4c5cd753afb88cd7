//! # spothub-adapter-storage-memory
//!
//! In-memory persistence adapter. Nothing survives a restart.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `spothub-app::ports::storage`
//! - Own one table per record type, each behind its own async lock
//! - Generate deterministic ids from a per-table sequence
//! - Seed demo data for local runs
//!
//! ## Dependency rule
//! Depends on `spothub-app` (for port traits) and `spothub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod table;

pub mod fixtures;
pub mod spot_repo;
pub mod user_repo;

pub use spot_repo::MemorySpotRepository;
pub use user_repo::MemoryUserRepository;
