//! Reason request/response types.
//!
//! `visited` is carried as text (`"true"` / `"false"`) exactly as stored.
//! Neither create nor update checks its value.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored reason as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "66f1c0a2e4b0a1b2c3d4e5f6",
    "reason": "Eu te Amo Demais",
    "visited": "false"
}))]
pub struct Reason {
    /// Store-assigned identifier.
    pub id: String,
    pub reason: String,
    /// `"true"` or `"false"`.
    pub visited: String,
}

/// Request to create a new reason.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"reason": "Eu te Amo Demais", "visited": "false"}))]
pub struct CreateReasonRequest {
    pub reason: String,
    pub visited: String,
}

/// Partial update of a reason. Absent or `null` fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"visited": "true"}))]
pub struct UpdateReasonRequest {
    #[serde(default)]
    pub visited: Option<String>,
}
