//! # spothub-domain
//!
//! Pure domain model for the spothub parking marketplace.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Spots** (parking places offered by an owner, priced per hour and per day)
//! - Define **Users** (private persons or firms that own spots)
//! - Define the **keyed record** shape returned when a record is created
//! - Parse loosely-typed form values into typed fields at the boundary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;

pub mod spot;
pub mod user;
