//! User input validation
//!
//! These checks guard the HTTP boundary. The account service itself only
//! checks that required values are present.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user input validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be between 3 and 255 characters")]
    UsernameLength,

    #[error("Username must contain only alphanumeric characters and underscores")]
    InvalidUsernameCharacter,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Email exceeds maximum length of 255 characters")]
    EmailTooLong,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("{0}")]
    EmptyPassword(&'static str),
}

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 255;
pub const MAX_EMAIL_LENGTH: usize = 255;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Validate a username
///
/// Rules:
/// - Cannot be blank
/// - Between 3 and 255 characters
/// - Only ASCII alphanumeric characters and underscores
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.trim().is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    let len = username.chars().count();

    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(UserValidationError::UsernameLength);
    }

    if !USERNAME_RE.is_match(username) {
        return Err(UserValidationError::InvalidUsernameCharacter);
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate that a password field is not blank
///
/// `message` is reported as-is so each request can name its own field.
pub fn validate_password(password: &str, message: &'static str) -> Result<(), UserValidationError> {
    if password.trim().is_empty() {
        return Err(UserValidationError::EmptyPassword(message));
    }

    Ok(())
}
