//! Authentication Handlers
//!
//! Handles login, logout, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, RoleRepository};
use crate::utils::AppError;

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.clone();

    let employee_repo = EmployeeRepository::new(state.get_db());
    let employee = employee_repo
        .find_by_username(&username)
        .await
        .map_err(AppError::from)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent
    // username enumeration
    let employee = match employee {
        Some(e) => {
            if !e.is_active {
                return Err(AppError::new(shared::ErrorCode::AccountDisabled));
            }

            let password_valid = e
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(target: "audit", event = "login_failed", username = %username, reason = "invalid_credentials");
                return Err(AppError::invalid_credentials());
            }

            e
        }
        None => {
            tracing::warn!(target: "audit", event = "login_failed", username = %username, reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    // Fetch role information
    let role_repo = RoleRepository::new(state.get_db());
    let role = role_repo
        .find_by_id(&employee.role)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(shared::ErrorCode::RoleNotFound))?;

    if !role.is_active {
        return Err(AppError::new(shared::ErrorCode::RoleDisabled));
    }

    // Generate JWT token
    let user_id = employee
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(
            &user_id,
            &employee.username,
            &employee.display_name,
            &role.name,
            &role.permissions,
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        target: "audit",
        event = "login_success",
        user_id = %user_id,
        username = %employee.username,
        role = %role.name,
    );

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            username: employee.username,
            display_name: employee.display_name,
            role: role.name,
            permissions: role.permissions,
        },
    };

    Ok(Json(response))
}

/// Get current user info
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role,
        permissions: user.permissions,
    })
}

/// Logout handler
///
/// Stateless JWT: the token is discarded client-side, this only leaves an
/// audit trail line.
pub async fn logout(Extension(user): Extension<CurrentUser>) -> Json<()> {
    tracing::info!(
        target: "audit",
        event = "logout",
        user_id = %user.id,
        username = %user.username,
    );

    Json(())
}
