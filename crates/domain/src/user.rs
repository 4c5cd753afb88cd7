//! User: a private person or a firm that lists parking spots.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A registered user.
///
/// Text fields are stored as submitted. `is_firm` is the only typed field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "isFirm", default)]
    pub is_firm: bool,
}

/// Parse a form-submitted boolean.
///
/// Accepts exactly `"true"` and `"false"`; anything else is rejected rather
/// than read as `false`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBoolean`] for any other input.
pub fn parse_flag(field: &'static str, raw: &str) -> Result<bool, ValidationError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ValidationError::InvalidBoolean {
            field,
            value: other.to_owned(),
        }),
    }
}

/// Partial update of a [`User`]'s name and contact fields.
///
/// Empty strings count as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Whether applying the patch would leave any user unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.firstname, &self.lastname, &self.email]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }

    /// Overwrite the provided fields on `user`.
    pub fn apply(self, user: &mut User) {
        fn set(target: &mut Option<String>, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *target = Some(value);
            }
        }

        set(&mut user.firstname, self.firstname);
        set(&mut user.lastname, self.lastname);
        set(&mut user.email, self.email);
    }
}
