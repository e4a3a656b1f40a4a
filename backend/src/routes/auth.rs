//! Account routes
//!
//! Sign-up and login. Both failure modes report 400; clients key off
//! the status and the message text.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use meal_tracker_shared::types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

/// Create account routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
}

/// POST /signup - Create an account
async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    UserService::sign_up(state.db(), req).await?;
    Ok(Json(MessageResponse {
        message: "Account created successfully!".to_string(),
    }))
}

/// POST /login - Exact name/password match
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = UserService::login(state.db(), &req.name, &req.password).await?;
    Ok(Json(user))
}
