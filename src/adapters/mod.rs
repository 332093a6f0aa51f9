//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - session validation against the hosted auth service
//! - `http` - REST API exposure per feature
//! - `postgres` - sqlx repository implementations

pub mod auth;
pub mod http;
pub mod postgres;
