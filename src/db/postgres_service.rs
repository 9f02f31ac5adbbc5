use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        database_connection.ping().await?;
        info!("Connected to PostgreSQL.");

        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Migrations finished.");

        Ok(Self { database_connection })
    }

    /// Wrap an existing connection as-is. No migrations are run.
    pub fn from_connection(database_connection: DatabaseConnection) -> Self {
        Self { database_connection }
    }
}
