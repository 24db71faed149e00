use model::{Role, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimal user info for listings, search results and author bylines.
///
/// A read only view built per response. There is no stored row behind
/// it and nothing mutates it in place.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserSummary {
    /// Full construction, used when the display name is already known.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        username: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        full_name: String,
        avatar_url: Option<String>,
        role: Option<Role>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            full_name,
            avatar_url,
            role,
        }
    }

    /// Construction from account identity fields. The display name is
    /// derived from the name parts.
    pub fn from_identity(
        id: UserId,
        username: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let full_name = derive_full_name(first_name.as_deref(), last_name.as_deref());
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            full_name,
            avatar_url: None,
            role: None,
        }
    }
}

/// Display name derived from the name parts.
///
/// The separating space is kept even when a part is missing. Existing
/// API clients receive exactly this spacing, so it is part of the wire
/// contract.
pub fn derive_full_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_from_both_parts() {
        assert_eq!(derive_full_name(Some("Jane"), Some("Doe")), "Jane Doe");
    }

    #[test]
    fn missing_first_name_keeps_leading_space() {
        assert_eq!(derive_full_name(None, Some("Doe")), " Doe");
    }

    #[test]
    fn missing_last_name_keeps_trailing_space() {
        assert_eq!(derive_full_name(Some("Jane"), None), "Jane ");
    }

    #[test]
    fn both_parts_missing_gives_single_space() {
        assert_eq!(derive_full_name(None, None), " ");
    }

    #[test]
    fn identity_construction_derives_the_display_name() {
        let summary = UserSummary::from_identity(
            UserId::new(3),
            "jdoe".to_string(),
            "jane@example.com".to_string(),
            Some("Jane".to_string()),
            Some("Doe".to_string()),
        );
        assert_eq!(summary.full_name, "Jane Doe");
        assert_eq!(summary.avatar_url, None);
        assert_eq!(summary.role, None);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let summary = UserSummary::from_identity(
            UserId::new(3),
            "jdoe".to_string(),
            "jane@example.com".to_string(),
            None,
            Some("Doe".to_string()),
        );
        let json = serde_json::to_value(&summary).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("fullName"));
        assert!(object.contains_key("lastName"));
        assert!(object.contains_key("username"));
        assert!(!object.contains_key("firstName"));
        assert_eq!(json["fullName"], " Doe");
    }

    #[test]
    fn json_round_trip() {
        let summary = UserSummary::new(
            UserId::new(8),
            "jdoe".to_string(),
            "jane@example.com".to_string(),
            Some("Jane".to_string()),
            Some("Doe".to_string()),
            "Jane Doe".to_string(),
            Some("https://cdn.example.com/a.png".to_string()),
            Some(Role::User),
        );
        let json = serde_json::to_string(&summary).unwrap();
        let back: UserSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
