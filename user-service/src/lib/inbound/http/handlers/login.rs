use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Parse and validate the email; an unparseable one cannot belong to any
    // account, so it gets the same response as a wrong password
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    // Get user from database
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    // Verify password and issue a token with the email as subject. Argon2
    // verification is CPU-bound, so it runs on the blocking pool.
    let authenticator = Arc::clone(&state.authenticator);
    let password = body.password;
    let stored_hash = user.password_hash;
    let subject = user.email.as_str().to_string();

    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_hash, &subject)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(format!("Verification task failed: {}", e)))?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid credentials".to_string())
        }
        auth::AuthenticationError::PasswordError(err) => {
            ApiError::InternalServerError(format!("Password verification failed: {}", err))
        }
        auth::AuthenticationError::TokenError(err) => {
            ApiError::InternalServerError(format!("Token issuance failed: {}", err))
        }
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: result.access_token,
            token_type: "bearer".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
