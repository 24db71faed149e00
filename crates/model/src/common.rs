use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::EnumParsingError;

/// Numeric user ID from the account database.
#[derive(
    Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> &i64 {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role. The account service assigns this, profile related
/// code only displays it.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Lawyer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Lawyer => "LAWYER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = EnumParsingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Self::User),
            "LAWYER" => Ok(Self::Lawyer),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(EnumParsingError::ParsingError(value.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serializes_as_plain_number() {
        let id = UserId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn role_wire_format_is_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Lawyer).unwrap(), "\"LAWYER\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn role_parsing_rejects_unknown_value() {
        assert!(Role::from_str("MODERATOR").is_err());
        assert_eq!(Role::from_str("USER").unwrap(), Role::User);
    }
}
