//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization and utoipa
//! derives for the published OpenAPI document.

pub mod reasons;
