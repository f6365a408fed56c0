//! # restricted-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/restricted-entities`
//! - Enforce the two request-shape rules (no id on create, id on update)
//!   before any storage call
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, including the
//!   `Location` header and the `x-{app}-alert` / `x-{app}-error` headers
//!
//! ## Dependency rule
//! Depends on `restricted-app` (for port traits and services) and
//! `restricted-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod alert;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
