//! User data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable user identifier assigned by storage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` and `created_at` are assigned by storage at creation and never
///   change afterwards.
/// - `name` is unique across all stored users.
/// - `updated_at` is `None` until the first update, then reflects the most
///   recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    /// Unique display name.
    #[schema(example = "alice")]
    pub name: String,
    /// Free-form text attached to the user.
    #[schema(example = "likes rust")]
    pub other: String,
    /// Creation timestamp, set once at insert.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent update, absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire-shaped user input accepted by create and update requests.
///
/// Missing body fields decode to empty strings; the service rejects an
/// empty `name`, so a bare `{}` body fails validation rather than decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserDraft {
    /// Requested display name.
    #[schema(example = "alice")]
    pub name: String,
    /// Free-form text attached to the user.
    #[schema(example = "likes rust")]
    pub other: String,
}

impl UserDraft {
    /// Build a draft from borrowed parts.
    pub fn new(name: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            other: other.into(),
        }
    }
}

/// Envelope returned by the list operation.
///
/// `count` is the length of the returned page, not a total row count, so
/// it always equals `users.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    /// Returned page of users, ordered by ascending creation time.
    pub users: Vec<User>,
    /// Number of users in this page.
    pub count: usize,
}

impl From<Vec<User>> for UsersResponse {
    fn from(users: Vec<User>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}
