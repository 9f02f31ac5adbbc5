use std::sync::Arc;
use tracker_api::{
    config::JwtConfig,
    db::postgres_service::PostgresService,
    types::{error::AppError, user::DBUserCreate},
    utils::{password::hash_password, token::generate_token},
};
use entity::user::{Model as UserModel, Role};

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub jwt: JwtConfig,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db, jwt: super::get_test_jwt_config() }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        tracker_api::app::create_app(Arc::clone(&self.db), self.jwt.clone())
    }

    /// Inserts a user straight into the database and returns it with a signed token.
    pub async fn create_test_user(&self, email: &str, password: &str) -> Result<(UserModel, String), AppError> {
        let password_hash = hash_password(password).expect("Failed to hash password");

        let user = self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::Developer,
        }).await?;

        let token = generate_token(&user, &self.jwt)?;

        Ok((user, token))
    }

    pub fn token_for(&self, user: &UserModel) -> String {
        generate_token(user, &self.jwt).expect("Failed to sign token")
    }
}
