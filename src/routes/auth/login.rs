use crate::config::JwtConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{normalize_email, RUserLogin, UserLoginRes};
use crate::utils::{
    password::verify_password,
    token::generate_token,
    webutils::{payload, Payload},
};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::{debug, info};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    jwt: web::Data<JwtConfig>,
    body: Payload<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let body = payload(body);
    let email = normalize_email(&body.email);

    // Unknown email and wrong password answer identically.
    let user = match db.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            debug!("Login attempt for unknown email");
            return Err(AppError::unauthorized());
        }
        Err(e) => return Err(e),
    };

    let is_match = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored hash unreadable for {}: {e}", user.id)))?;

    if !is_match {
        debug!("Wrong password for user {}", user.id);
        return Err(AppError::unauthorized());
    }

    let token = generate_token(&user, &jwt)?;
    info!("User {} logged in", user.id);

    Ok(ApiResponse::ok(UserLoginRes {
        message: "Login successful".to_string(),
        token,
    }))
}
