use serde::{Deserialize, Deserializer, Serialize, de::Error};
use utoipa::ToSchema;

/// One violated field constraint.
///
/// The message strings are part of the API contract and must stay
/// stable across locales.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All constraints one validation pass found violated.
///
/// Guaranteed non-empty. Serializes as a JSON array of
/// `{field, message}` objects so the request layer can return it
/// to the client as is.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(transparent)]
#[schema(value_type = Vec<ValidationError>)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns None if the list is empty.
    pub fn new(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let errors = Vec::<ValidationError>::deserialize(deserializer)?;
        Self::new(errors).ok_or_else(|| Error::custom("ValidationErrors cannot be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_list_is_not_an_error() {
        assert!(ValidationErrors::new(vec![]).is_none());
    }

    #[test]
    fn errors_serialize_as_field_message_objects() {
        let errors = ValidationErrors::new(vec![ValidationError::new(
            "bio",
            "Bio cannot exceed 2000 characters",
        )])
        .unwrap();
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            "[{\"field\":\"bio\",\"message\":\"Bio cannot exceed 2000 characters\"}]",
        );
    }

    #[test]
    fn deserialize_failure_empty_list() {
        let result: Result<ValidationErrors, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_success() {
        let json = "[{\"field\":\"bio\",\"message\":\"Bio cannot exceed 2000 characters\"}]";
        let errors: ValidationErrors = serde_json::from_str(json).unwrap();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field, "bio");
    }

    #[test]
    fn display_joins_all_violations() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ])
        .unwrap();
        assert_eq!(errors.to_string(), "a: first; b: second");
    }
}
