use model::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserProfile;

/// Profile info update.
///
/// Every field is optional. An absent field keeps the current stored
/// value, so an empty update is valid and changes nothing. A present
/// but empty `legal_expertise` list clears the stored tags.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_expertise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Check the update against the profile field constraints.
    ///
    /// Every constraint is evaluated, so one failed pass reports all
    /// violated fields at once. Lengths are counted in characters.
    pub fn validate(self) -> Result<ProfileUpdateValidated, ValidationErrors> {
        let mut errors = Vec::new();

        if let Some(name) = &self.full_name {
            let length = name.chars().count();
            if length < 2 || length > 100 {
                errors.push(ValidationError::new(
                    "fullName",
                    "Full name must be between 2 and 100 characters",
                ));
            }
        }

        if let Some(bio) = &self.bio {
            if bio.chars().count() > 2000 {
                errors.push(ValidationError::new(
                    "bio",
                    "Bio cannot exceed 2000 characters",
                ));
            }
        }

        if let Some(number) = &self.phone_number {
            if number.chars().count() > 20 {
                errors.push(ValidationError::new(
                    "phoneNumber",
                    "Phone number must not exceed 20 characters",
                ));
            }
        }

        match ValidationErrors::new(errors) {
            Some(errors) => Err(errors),
            None => Ok(ProfileUpdateValidated {
                full_name: self.full_name,
                bio: self.bio,
                legal_expertise: self.legal_expertise,
                phone_number: self.phone_number,
                avatar: self.avatar,
            }),
        }
    }
}

/// Profile update which has passed contract validation.
///
/// Only this type reaches the update collaborator, so unvalidated
/// field values cannot end up in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateValidated {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub legal_expertise: Option<Vec<String>>,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdateValidated {
    /// Merge the update into an existing profile.
    ///
    /// Produces a new profile value. Present fields replace the
    /// stored ones, absent fields are kept as is. Counters, role and
    /// join time are never touched by an update.
    pub fn apply_to(&self, profile: &UserProfile) -> UserProfile {
        UserProfile {
            id: profile.id,
            email: profile.email.clone(),
            full_name: self.full_name.clone().or_else(|| profile.full_name.clone()),
            avatar: self.avatar.clone().or_else(|| profile.avatar.clone()),
            role: profile.role,
            post_count: profile.post_count,
            reply_count: profile.reply_count,
            joined_at: profile.joined_at,
            phone_number: self
                .phone_number
                .clone()
                .or_else(|| profile.phone_number.clone()),
            bio: self.bio.clone().or_else(|| profile.bio.clone()),
            legal_expertise: self
                .legal_expertise
                .clone()
                .unwrap_or_else(|| profile.legal_expertise.clone()),
        }
    }
}
