use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserRegisterRes};
use crate::utils::{password::hash_password, webutils::{payload, Payload}};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: Payload<RUserRegister>,
) -> ApiResult<UserRegisterRes> {
    let body = payload(body).validated()?;

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
            role: body.role.unwrap_or_default(),
        })
        .await?;

    info!("Registered user {}", user.id);

    Ok(ApiResponse::created(UserRegisterRes {
        message: "User created successfully".to_string(),
        user: user.into(),
    }))
}
