//! User domain
//!
//! This module provides domain types and traits for forum accounts,
//! including the user entity, input validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserProfile};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_username, UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
