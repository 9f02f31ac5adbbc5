use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tracker_api::config::JwtConfig;
use tracker_api::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        expires_in: 3600,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub const PASSWORD: &str = "correct horse battery";

    pub fn sample_user() -> Value {
        sample_user_with_email("test@example.com")
    }

    pub fn sample_user_with_email(email: &str) -> Value {
        json!({
            "name": "Test User",
            "email": email,
            "password": PASSWORD,
            "role": "tester",
        })
    }

    pub fn credentials(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
