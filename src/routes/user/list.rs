use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserListRes;
use crate::utils::token::Claims;
use actix_web::{get, web};
use std::sync::Arc;
use tracing::debug;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    caller: web::ReqData<Claims>,
) -> ApiResult<UserListRes> {
    debug!("User {} listing users", caller.sub);

    let users = db.list_users().await?;

    if users.is_empty() {
        return Err(AppError::NotFound("User not found".into()));
    }

    Ok(ApiResponse::ok(UserListRes {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
