//! Account endpoints under `/api/users`

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{
    validate_email, validate_password, validate_username, UserId, UserProfile,
};
use crate::infrastructure::user::{
    AccountDeleted, ChangeEmailRequest, ChangePasswordRequest, ChangeUsernameRequest,
    DeleteAccountRequest, EmailChanged, PasswordChanged, RegisterRequest, UsernameChanged,
};

/// POST /api/users
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PUT /api/users/{user_id}/username
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUsernameBody {
    pub new_username: Option<String>,
}

/// PUT /api/users/{user_id}/password
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// PUT /api/users/{user_id}/email
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailBody {
    pub current_password: Option<String>,
    pub new_email: Option<String>,
}

/// DELETE /api/users/{user_id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountBody {
    pub password: Option<String>,
}

/// Create the account router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register_user))
        .route("/api/users/{user_id}", get(get_user).delete(delete_account))
        .route("/api/users/{user_id}/username", put(change_username))
        .route("/api/users/{user_id}/password", put(change_password))
        .route("/api/users/{user_id}/email", put(change_email))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Fetching user");

    let profile = state
        .account_service
        .get_by_id(Some(id))
        .await
        .map_err(|e| ApiError::from_domain(e, "fetching the user"))?;

    Ok(Json(profile))
}

/// POST /api/users
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let username = body.username.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    validate_username(&username).map_err(|e| ApiError::validation(e, "username"))?;
    validate_email(&email).map_err(|e| ApiError::validation(e, "email"))?;
    validate_password(&password, "Password is required")
        .map_err(|e| ApiError::validation(e, "password"))?;

    debug!(username = %username, "Registering user");

    let profile = state
        .account_service
        .register(RegisterRequest {
            username: Some(username),
            email: Some(email),
            password: Some(password),
        })
        .await
        .map_err(|e| ApiError::from_domain(e, "creating the user"))?;

    let location = format!("/api/users/{}", profile.user_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(profile),
    ))
}

/// PUT /api/users/{user_id}/username
pub async fn change_username(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ChangeUsernameBody>,
) -> Result<Json<UsernameChanged>, ApiError> {
    let id = parse_user_id(&user_id)?;
    let new_username = body.new_username.unwrap_or_default();

    validate_username(&new_username).map_err(|e| ApiError::validation(e, "newUsername"))?;

    debug!(user_id = %id, "Changing username");

    let changed = state
        .account_service
        .change_username(id, ChangeUsernameRequest { new_username })
        .await
        .map_err(|e| ApiError::from_domain(e, "changing the username"))?;

    Ok(Json(changed))
}

/// PUT /api/users/{user_id}/password
pub async fn change_password(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ChangePasswordBody>,
) -> Result<Json<PasswordChanged>, ApiError> {
    let id = parse_user_id(&user_id)?;
    let current_password = body.current_password.unwrap_or_default();
    let new_password = body.new_password.unwrap_or_default();

    validate_password(&current_password, "Current password is required")
        .map_err(|e| ApiError::validation(e, "currentPassword"))?;
    validate_password(&new_password, "New password is required")
        .map_err(|e| ApiError::validation(e, "newPassword"))?;

    debug!(user_id = %id, "Changing password");

    let changed = state
        .account_service
        .change_password(
            id,
            ChangePasswordRequest {
                current_password,
                new_password,
            },
        )
        .await
        .map_err(|e| ApiError::from_domain(e, "changing password"))?;

    Ok(Json(changed))
}

/// PUT /api/users/{user_id}/email
pub async fn change_email(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ChangeEmailBody>,
) -> Result<Json<EmailChanged>, ApiError> {
    let id = parse_user_id(&user_id)?;
    let current_password = body.current_password.unwrap_or_default();
    let new_email = body.new_email.unwrap_or_default();

    validate_password(&current_password, "Current password is required")
        .map_err(|e| ApiError::validation(e, "currentPassword"))?;
    validate_email(&new_email).map_err(|e| ApiError::validation(e, "newEmail"))?;

    debug!(user_id = %id, "Changing email");

    let changed = state
        .account_service
        .change_email(
            id,
            ChangeEmailRequest {
                current_password,
                new_email,
            },
        )
        .await
        .map_err(|e| ApiError::from_domain(e, "changing email"))?;

    Ok(Json(changed))
}

/// DELETE /api/users/{user_id}
pub async fn delete_account(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<DeleteAccountBody>,
) -> Result<Json<AccountDeleted>, ApiError> {
    let id = parse_user_id(&user_id)?;
    let password = body.password.unwrap_or_default();

    validate_password(&password, "Password is required for account deletion")
        .map_err(|e| ApiError::validation(e, "password"))?;

    debug!(user_id = %id, "Deleting account");

    let deleted = state
        .account_service
        .delete_account(id, DeleteAccountRequest { password })
        .await
        .map_err(|e| ApiError::from_domain(e, "deleting the account"))?;

    Ok(Json(deleted))
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<i64>()
        .map(UserId::new)
        .map_err(|_| ApiError::bad_request("Invalid user ID").with_param("userId"))
}
