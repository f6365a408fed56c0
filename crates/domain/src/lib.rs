//! # restricted-domain
//!
//! Pure domain model for the restricted-entity service.
//!
//! ## Responsibilities
//! - Foundational types: the typed surrogate identifier and error conventions
//! - Define the **`RestrictedEntity`** record (optional id, optional name)
//! - Define identity-based equality (a missing id never compares equal)
//! - Define the **sort order** a listing may request
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod restricted_entity;
pub mod sort;
