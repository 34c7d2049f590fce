//! User infrastructure module
//!
//! This module provides implementations for forum account management,
//! including password hashing with Argon2, in-memory and PostgreSQL
//! repositories, the account service, and development seeding.

mod password;
mod postgres_repository;
mod repository;
mod seed;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use seed::{seed_demo_users, SeedReport, DEMO_USERNAMES};
pub use service::{
    AccountDeleted, AccountService, ChangeEmailRequest, ChangePasswordRequest,
    ChangeUsernameRequest, DeleteAccountRequest, EmailChanged, PasswordChanged, RegisterRequest,
    UsernameChanged,
};
