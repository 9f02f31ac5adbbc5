use crate::utils::webutils::{form_error_handler, json_error_handler};
use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler));

    cfg.service(health::health);
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .service(auth::register::register)
                    .service(auth::login::login)
            )
            .service(
                web::scope("/users")
                    .service(user::list::list)
            )
    );
}
