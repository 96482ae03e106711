//! HTTP handler modules for the reasons API.
//!
//! Handlers parse requests, delegate to [`ReasonService`](crate::service::ReasonService),
//! and return JSON responses. No business logic lives in handlers.

pub mod pages;
pub mod reasons;
