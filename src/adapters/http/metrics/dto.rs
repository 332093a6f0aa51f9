//! HTTP DTOs for the team metrics endpoint.
//!
//! The domain snapshot is already designed for serialization, so it is
//! re-exported directly.

pub use crate::domain::metrics::TeamMetrics as TeamMetricsResponse;
