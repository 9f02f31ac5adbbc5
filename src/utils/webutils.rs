use actix_web::{
    dev::ServiceRequest,
    error::{JsonPayloadError, UrlencodedError},
    web::{self, Form, Json},
    Either, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::{debug, error};

use crate::{
    config::{is_public_route, JwtConfig},
    types::error::AppError,
    utils::token::decode_token,
};

/// Request bodies may arrive as JSON or urlencoded forms.
pub type Payload<T> = Either<Json<T>, Form<T>>;

pub fn payload<T>(body: Payload<T>) -> T {
    match body {
        Either::Left(Json(inner)) => inner,
        Either::Right(Form(inner)) => inner,
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Global gate. Allow-listed routes pass untouched, everything else needs a valid bearer token.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if is_public_route(req.method(), req.path()) {
        return Ok(req);
    }

    let Some(credentials) = credentials else {
        debug!("No bearer token on {} {}", req.method(), req.path());
        return Err((AppError::Unauthorized("Missing bearer token".into()).into(), req));
    };

    let jwt = req.app_data::<web::Data<JwtConfig>>().cloned();
    let Some(jwt) = jwt else {
        error!("JwtConfig missing from app data");
        return Err((AppError::Internal("auth not configured".into()).into(), req));
    };

    match decode_token(credentials.token(), &jwt) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(err) => Err((err.into(), req)),
    }
}
