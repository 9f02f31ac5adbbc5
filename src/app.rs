use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};
use actix_web_httpauth::middleware::HttpAuthentication;
use std::sync::Arc;

use crate::{
    config::JwtConfig,
    db::postgres_service::PostgresService,
    routes::configure_routes,
    utils::webutils::validate_token,
};

/// The full application: logging, CORS, the auth gate, then routes.
pub fn create_app(
    postgres_service: Arc<PostgresService>,
    jwt: JwtConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        // wrap order is inside-out; the gate sits closest to the routes
        .wrap(HttpAuthentication::with_fn(validate_token))
        .wrap(Cors::permissive())
        .wrap(Logger::default())
        .app_data(web::Data::new(postgres_service))
        .app_data(web::Data::new(jwt))
        .configure(configure_routes)
}
