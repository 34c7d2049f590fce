//! Account service for registration and credential management

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::user::{NewUser, User, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const INCORRECT_PASSWORD: &str = "Current password is incorrect";

/// Request for registering a new account
///
/// Fields are optional so the service can report exactly which one is missing.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request for changing a username
#[derive(Debug, Clone)]
pub struct ChangeUsernameRequest {
    pub new_username: String,
}

/// Request for changing a password
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Request for changing an email address
#[derive(Debug, Clone)]
pub struct ChangeEmailRequest {
    pub current_password: String,
    pub new_email: String,
}

/// Request for deleting an account
#[derive(Debug, Clone)]
pub struct DeleteAccountRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameChanged {
    pub user_id: UserId,
    pub old_username: String,
    pub new_username: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChanged {
    pub user_id: UserId,
    pub updated_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailChanged {
    pub user_id: UserId,
    pub old_email: String,
    pub new_email: String,
    pub updated_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeleted {
    pub user_id: UserId,
    pub deleted_at: DateTime<Utc>,
    pub message: String,
}

/// Account service
///
/// Every mutation runs its checks in the same order: the user must exist,
/// credentials must verify, the change must not be a no-op, the new value
/// must be free, and the write must touch exactly one row.
#[derive(Debug)]
pub struct AccountService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> AccountService<R, H> {
    /// Create a new account service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Get a user's public profile
    pub async fn get_by_id(&self, id: Option<UserId>) -> Result<UserProfile, DomainError> {
        let id = id.ok_or_else(|| DomainError::invalid_input("User ID is required"))?;

        Ok(self.load(id).await?.profile())
    }

    /// Register a new account
    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile, DomainError> {
        let username = required(request.username, "Username is required")?;
        let email = required(request.email, "Email is required")?;
        let password = required(request.password, "Password is required")?;

        if self.repository.exists_by_username(&username).await? {
            debug!(username = %username, "Registration rejected: username taken");
            return Err(DomainError::conflict("Username already exists"));
        }

        if self.repository.exists_by_email(&email).await? {
            debug!("Registration rejected: email taken");
            return Err(DomainError::conflict("Email already exists"));
        }

        let password_hash = self.hasher.hash(&password)?;
        let user = self
            .repository
            .save(NewUser::new(username, password_hash, email))
            .await?;

        info!(user_id = %user.id(), username = %user.username(), "Registered user");

        Ok(user.profile())
    }

    /// Change a user's username
    pub async fn change_username(
        &self,
        id: UserId,
        request: ChangeUsernameRequest,
    ) -> Result<UsernameChanged, DomainError> {
        let user = self.load(id).await?;

        if user.username() == request.new_username {
            return Err(DomainError::invalid_state(
                "New username must be different from current username",
            ));
        }

        if self.repository.exists_by_username(&request.new_username).await? {
            return Err(DomainError::conflict("Username already exists"));
        }

        let rows = self
            .repository
            .update_username(id, &request.new_username)
            .await?;
        ensure_one_row(rows, id, "Failed to update username")?;

        info!(user_id = %id, old = %user.username(), new = %request.new_username, "Changed username");

        Ok(UsernameChanged {
            user_id: id,
            old_username: user.username().to_string(),
            new_username: request.new_username,
            updated_at: Utc::now(),
        })
    }

    /// Change a user's password
    pub async fn change_password(
        &self,
        id: UserId,
        request: ChangePasswordRequest,
    ) -> Result<PasswordChanged, DomainError> {
        let user = self.load(id).await?;

        self.verify_current(&user, &request.current_password)?;

        // Compared through the hasher so that any input matching the stored hash counts as unchanged
        if self.hasher.verify(&request.new_password, user.password_hash()) {
            return Err(DomainError::invalid_state(
                "New password must be different from current password",
            ));
        }

        let password_hash = self.hasher.hash(&request.new_password)?;
        let rows = self.repository.update_password(id, &password_hash).await?;
        ensure_one_row(rows, id, "Failed to update password")?;

        info!(user_id = %id, "Changed password");

        Ok(PasswordChanged {
            user_id: id,
            updated_at: Utc::now(),
            message: "Password changed successfully".to_string(),
        })
    }

    /// Change a user's email address
    pub async fn change_email(
        &self,
        id: UserId,
        request: ChangeEmailRequest,
    ) -> Result<EmailChanged, DomainError> {
        let user = self.load(id).await?;

        self.verify_current(&user, &request.current_password)?;

        if user.email() == request.new_email {
            return Err(DomainError::invalid_state(
                "New email must be different from current email",
            ));
        }

        if self.repository.exists_by_email(&request.new_email).await? {
            return Err(DomainError::conflict("Email already exists"));
        }

        let rows = self.repository.update_email(id, &request.new_email).await?;
        ensure_one_row(rows, id, "Failed to update email")?;

        info!(user_id = %id, "Changed email");

        Ok(EmailChanged {
            user_id: id,
            old_email: user.email().to_string(),
            new_email: request.new_email,
            updated_at: Utc::now(),
            message: "Email changed successfully".to_string(),
        })
    }

    /// Delete an account after re-verifying its password
    pub async fn delete_account(
        &self,
        id: UserId,
        request: DeleteAccountRequest,
    ) -> Result<AccountDeleted, DomainError> {
        let user = self.load(id).await?;

        self.verify_current(&user, &request.password)?;

        let rows = self.repository.delete_by_id(id).await?;
        ensure_one_row(rows, id, "Failed to delete account")?;

        info!(user_id = %id, username = %user.username(), "Deleted account");

        Ok(AccountDeleted {
            user_id: id,
            deleted_at: Utc::now(),
            message: "Account deleted successfully".to_string(),
        })
    }

    /// Count stored users
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    async fn load(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    fn verify_current(&self, user: &User, password: &str) -> Result<(), DomainError> {
        if self.hasher.verify(password, user.password_hash()) {
            Ok(())
        } else {
            warn!(user_id = %user.id(), "Password verification failed");
            Err(DomainError::invalid_input(INCORRECT_PASSWORD))
        }
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::invalid_input(message)),
    }
}

fn ensure_one_row(rows: u64, id: UserId, message: &str) -> Result<(), DomainError> {
    if rows == 0 {
        warn!(user_id = %id, "Write affected no rows");
        return Err(DomainError::fatal(message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordConfig;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn cheap_hasher() -> Argon2Hasher {
        Argon2Hasher::from_config(&PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            output_len: 32,
        })
        .unwrap()
    }

    fn create_service() -> AccountService<InMemoryUserRepository, Argon2Hasher> {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(cheap_hasher());
        AccountService::new(repository, hasher)
    }

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Hasher whose verify ignores case, so distinct plaintexts can match one hash
    #[derive(Debug)]
    struct CaseInsensitiveHasher;

    impl PasswordHasher for CaseInsensitiveHasher {
        fn hash(&self, password: &str) -> Result<String, DomainError> {
            Ok(format!("ci:{}", password.to_lowercase()))
        }

        fn verify(&self, password: &str, hash: &str) -> bool {
            hash == format!("ci:{}", password.to_lowercase())
        }
    }

    fn stored_user(id: i64) -> User {
        User::from_parts(
            UserId::new(id),
            "alice",
            "ci:secret1",
            "alice@example.com",
            Utc::now(),
        )
    }

    fn mock_service(
        repository: MockUserRepository,
    ) -> AccountService<MockUserRepository, CaseInsensitiveHasher> {
        AccountService::new(Arc::new(repository), Arc::new(CaseInsensitiveHasher))
    }

    #[tokio::test]
    async fn test_register_and_get() {
        let service = create_service();

        let profile = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(profile.user_id, UserId::new(1));
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "a@x.com");

        let fetched = service.get_by_id(Some(profile.user_id)).await.unwrap();
        assert_eq!(fetched, profile);
    }

    #[tokio::test]
    async fn test_get_requires_id() {
        let service = create_service();

        let err = service.get_by_id(None).await.unwrap_err();
        assert_eq!(err, DomainError::invalid_input("User ID is required"));
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let service = create_service();

        let err = service.get_by_id(Some(UserId::new(404))).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_register_missing_fields_in_order() {
        let service = create_service();

        let err = service.register(RegisterRequest::default()).await.unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Username is required"));

        let err = service
            .register(RegisterRequest {
                username: Some("alice".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Email is required"));

        let err = service
            .register(RegisterRequest {
                username: Some("alice".to_string()),
                email: Some("a@x.com".to_string()),
                password: Some("   ".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Password is required"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let err = service
            .register(register_request("bob", "a@x.com", "secret2"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("Email already exists"));
    }

    #[tokio::test]
    async fn test_register_username_conflict_skips_email_check() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_exists_by_username()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(true));
        repository.expect_exists_by_email().never();
        repository.expect_save().never();

        let err = mock_service(repository)
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("Username already exists"));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let service = create_service();

        service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let user = service
            .repository
            .find_by_username("alice")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(user.password_hash(), "secret1");
        assert!(service.hasher.verify("secret1", user.password_hash()));
    }

    #[tokio::test]
    async fn test_change_username() {
        let service = create_service();
        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;

        let changed = service
            .change_username(
                id,
                ChangeUsernameRequest {
                    new_username: "alicia".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(changed.old_username, "alice");
        assert_eq!(changed.new_username, "alicia");
        assert_eq!(service.get_by_id(Some(id)).await.unwrap().username, "alicia");
    }

    #[tokio::test]
    async fn test_change_username_same_value_skips_uniqueness_check() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_exists_by_username().never();
        repository.expect_update_username().never();

        let err = mock_service(repository)
            .change_username(
                UserId::new(1),
                ChangeUsernameRequest {
                    new_username: "alice".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_state("New username must be different from current username")
        );
    }

    #[tokio::test]
    async fn test_change_username_taken() {
        let service = create_service();
        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;
        service
            .register(register_request("bob", "b@x.com", "secret1"))
            .await
            .unwrap();

        let err = service
            .change_username(
                id,
                ChangeUsernameRequest {
                    new_username: "bob".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("Username already exists"));
    }

    #[tokio::test]
    async fn test_change_username_zero_rows_is_fatal() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_exists_by_username().returning(|_| Ok(false));
        repository.expect_update_username().returning(|_, _| Ok(0));

        let err = mock_service(repository)
            .change_username(
                UserId::new(1),
                ChangeUsernameRequest {
                    new_username: "alicia".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::fatal("Failed to update username"));
    }

    #[tokio::test]
    async fn test_change_password() {
        let service = create_service();
        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;

        let changed = service
            .change_password(
                id,
                ChangePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(changed.message, "Password changed successfully");

        let user = service.repository.find_by_id(id).await.unwrap().unwrap();
        assert!(service.hasher.verify("secret2", user.password_hash()));
        assert!(!service.hasher.verify("secret1", user.password_hash()));
    }

    #[tokio::test]
    async fn test_change_password_wrong_current_never_writes() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_update_password().never();

        let err = mock_service(repository)
            .change_password(
                UserId::new(1),
                ChangePasswordRequest {
                    current_password: "wrong".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Current password is incorrect"));
    }

    #[tokio::test]
    async fn test_change_password_compares_by_hash() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_update_password().never();

        // Differs as a string but verifies against the stored hash
        let err = mock_service(repository)
            .change_password(
                UserId::new(1),
                ChangePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "SECRET1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_state("New password must be different from current password")
        );
    }

    #[tokio::test]
    async fn test_change_password_zero_rows_is_fatal() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_update_password().returning(|_, _| Ok(0));

        let err = mock_service(repository)
            .change_password(
                UserId::new(1),
                ChangePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::fatal("Failed to update password"));
    }

    #[tokio::test]
    async fn test_change_password_missing_user() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update_password().never();

        let err = mock_service(repository)
            .change_password(
                UserId::new(9),
                ChangePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_change_email_missing_user() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_exists_by_email().never();
        repository.expect_update_email().never();

        let err = mock_service(repository)
            .change_email(
                UserId::new(9),
                ChangeEmailRequest {
                    current_password: "secret1".to_string(),
                    new_email: "new@x.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_change_email() {
        let service = create_service();
        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;

        let changed = service
            .change_email(
                id,
                ChangeEmailRequest {
                    current_password: "secret1".to_string(),
                    new_email: "alice@x.com".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(changed.old_email, "a@x.com");
        assert_eq!(changed.new_email, "alice@x.com");
        assert_eq!(changed.message, "Email changed successfully");
        assert_eq!(service.get_by_id(Some(id)).await.unwrap().email, "alice@x.com");
    }

    #[tokio::test]
    async fn test_change_email_checks_password_before_no_op() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_exists_by_email().never();

        let err = mock_service(repository)
            .change_email(
                UserId::new(1),
                ChangeEmailRequest {
                    current_password: "wrong".to_string(),
                    new_email: "alice@example.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Current password is incorrect"));
    }

    #[tokio::test]
    async fn test_change_email_taken() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository
            .expect_exists_by_email()
            .withf(|email| email == "bob@example.com")
            .returning(|_| Ok(true));
        repository.expect_update_email().never();

        let err = mock_service(repository)
            .change_email(
                UserId::new(1),
                ChangeEmailRequest {
                    current_password: "secret1".to_string(),
                    new_email: "bob@example.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("Email already exists"));
    }

    #[tokio::test]
    async fn test_change_email_zero_rows_is_fatal() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_exists_by_email().returning(|_| Ok(false));
        repository.expect_update_email().returning(|_, _| Ok(0));

        let err = mock_service(repository)
            .change_email(
                UserId::new(1),
                ChangeEmailRequest {
                    current_password: "secret1".to_string(),
                    new_email: "new@example.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::fatal("Failed to update email"));
    }

    #[tokio::test]
    async fn test_delete_account() {
        let service = create_service();
        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;

        let deleted = service
            .delete_account(
                id,
                DeleteAccountRequest {
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(deleted.user_id, id);
        assert_eq!(deleted.message, "Account deleted successfully");

        let err = service.get_by_id(Some(id)).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_delete_missing_account() {
        let service = create_service();

        let err = service
            .delete_account(
                UserId::new(12),
                DeleteAccountRequest {
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_fatal() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id.value()))));
        repository.expect_delete_by_id().returning(|_| Ok(0));

        let err = mock_service(repository)
            .delete_account(
                UserId::new(1),
                DeleteAccountRequest {
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::fatal("Failed to delete account"));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(DomainError::storage("connection refused")));

        let err = mock_service(repository)
            .get_by_id(Some(UserId::new(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_account_lifecycle_scenario() {
        let service = create_service();

        let id = service
            .register(register_request("alice", "a@x.com", "secret1"))
            .await
            .unwrap()
            .user_id;
        assert_eq!(id, UserId::new(1));

        let err = service
            .register(register_request("alice", "b@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("Username already exists"));

        let err = service
            .change_email(
                id,
                ChangeEmailRequest {
                    current_password: "secret1".to_string(),
                    new_email: "a@x.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));

        let err = service
            .change_password(
                id,
                ChangePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));

        let err = service
            .delete_account(
                id,
                DeleteAccountRequest {
                    password: "wrong".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Current password is incorrect"));

        let profile = service.get_by_id(Some(id)).await.unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
