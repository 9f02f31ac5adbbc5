use actix_web::{get, HttpResponse};

pub const HEALTH_MESSAGE: &str = "Bug and Feature Tracking System API is running";

#[get("/")]
async fn health(
    _req: actix_web::HttpRequest
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HEALTH_MESSAGE)
}
