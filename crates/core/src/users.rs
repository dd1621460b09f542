//! User input accepted by the create and update endpoints.
//!
//! Request bodies deserialize into [`UserInput`], where every field is
//! optional so that a missing field surfaces as a validation error naming
//! the field rather than as an opaque deserialization failure.
//! [`UserInput::into_valid`] runs the checks once and yields a
//! [`ValidUserInput`] with every field present.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Raw create/update payload: `{name, email, password, role}`.
#[derive(Deserialize, Validate, Default)]
pub struct UserInput {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 255, message = "name must be between 1 and 255 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "role is required"),
        length(min = 1, message = "role must not be empty")
    )]
    pub role: Option<String>,
}

/// A fully validated user payload.
pub struct ValidUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: DbId,
}

impl UserInput {
    /// Validate every field and convert into a [`ValidUserInput`].
    ///
    /// `name`, `email` and `role` are trimmed first, so a whitespace-only
    /// value counts as empty. The password is kept verbatim.
    ///
    /// The resulting error message lists each failing field. It never
    /// contains the submitted password.
    pub fn into_valid(mut self) -> Result<ValidUserInput, CoreError> {
        for field in [&mut self.name, &mut self.email, &mut self.role] {
            if let Some(value) = field {
                *value = value.trim().to_string();
            }
        }

        self.validate()
            .map_err(|errors| CoreError::Validation(validation_message(&errors)))?;

        let (Some(name), Some(email), Some(password), Some(role)) =
            (self.name, self.email, self.password, self.role)
        else {
            return Err(CoreError::Validation(
                "name, email, password and role are required".to_string(),
            ));
        };

        let role_id = role
            .parse::<DbId>()
            .map_err(|_| CoreError::Validation("role must be a valid id".to_string()))?;

        Ok(ValidUserInput {
            name,
            email,
            password,
            role_id,
        })
    }
}

// Hand-written so the plaintext password never reaches a log line.
impl fmt::Debug for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for ValidUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidUserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role_id", &self.role_id)
            .finish()
    }
}

/// Flatten `validator` errors into a single message, ordered by field name.
///
/// Only the configured messages (or the error code when no message is set)
/// are used; the rejected values are never included.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
