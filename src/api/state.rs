//! Application state for shared services

use std::sync::Arc;

use crate::config::CorsConfig;
use crate::domain::user::{UserId, UserProfile, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{
    AccountDeleted, AccountService, ChangeEmailRequest, ChangePasswordRequest,
    ChangeUsernameRequest, DeleteAccountRequest, EmailChanged, PasswordChanged, PasswordHasher,
    RegisterRequest, UsernameChanged,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub cors: CorsConfig,
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn get_by_id(&self, id: Option<UserId>) -> Result<UserProfile, DomainError>;
    async fn register(&self, request: RegisterRequest) -> Result<UserProfile, DomainError>;
    async fn change_username(
        &self,
        id: UserId,
        request: ChangeUsernameRequest,
    ) -> Result<UsernameChanged, DomainError>;
    async fn change_password(
        &self,
        id: UserId,
        request: ChangePasswordRequest,
    ) -> Result<PasswordChanged, DomainError>;
    async fn change_email(
        &self,
        id: UserId,
        request: ChangeEmailRequest,
    ) -> Result<EmailChanged, DomainError>;
    async fn delete_account(
        &self,
        id: UserId,
        request: DeleteAccountRequest,
    ) -> Result<AccountDeleted, DomainError>;
    /// Count stored users (readiness probe)
    async fn count(&self) -> Result<u64, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> AccountServiceTrait for AccountService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn get_by_id(&self, id: Option<UserId>) -> Result<UserProfile, DomainError> {
        AccountService::get_by_id(self, id).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<UserProfile, DomainError> {
        AccountService::register(self, request).await
    }

    async fn change_username(
        &self,
        id: UserId,
        request: ChangeUsernameRequest,
    ) -> Result<UsernameChanged, DomainError> {
        AccountService::change_username(self, id, request).await
    }

    async fn change_password(
        &self,
        id: UserId,
        request: ChangePasswordRequest,
    ) -> Result<PasswordChanged, DomainError> {
        AccountService::change_password(self, id, request).await
    }

    async fn change_email(
        &self,
        id: UserId,
        request: ChangeEmailRequest,
    ) -> Result<EmailChanged, DomainError> {
        AccountService::change_email(self, id, request).await
    }

    async fn delete_account(
        &self,
        id: UserId,
        request: DeleteAccountRequest,
    ) -> Result<AccountDeleted, DomainError> {
        AccountService::delete_account(self, id, request).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        AccountService::count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(account_service: Arc<dyn AccountServiceTrait>, cors: CorsConfig) -> Self {
        Self {
            account_service,
            cors,
        }
    }
}
