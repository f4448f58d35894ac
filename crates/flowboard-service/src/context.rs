//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flowboard_auth::Identity;
use flowboard_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the API layer from the bearer identity and passed into
/// management operations so every call knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the identity provider, if present.
    pub email: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `identity` at `request_time`.
    pub fn new(identity: Identity, request_time: DateTime<Utc>) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
            request_time,
        }
    }
}
