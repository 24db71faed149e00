use chrono::{DateTime, Utc};
use model::{Role, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod summary;
pub use summary::*;

mod update;
pub use update::*;

/// Full profile page data.
///
/// Assembled by the query side from account fields and the user's
/// content counters. The counters are aggregates over authored posts
/// and replies, recomputed by the query side; this type never changes
/// them. No field validation happens here because the values come
/// from already trusted internal state.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_expertise: Vec<String>,
}
