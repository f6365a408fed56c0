//! # restricted-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters must implement:
//!   - `CrudRepository`: generic save / find-all / find-by-id / delete-by-id
//!   - `RestrictedEntityRepository`: the port bound to `RestrictedEntity`
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `RestrictedEntityService`: save, find all, find one, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `restricted-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
