use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::DatastoreConfig;

/// Opens the connection pool.
///
/// Never fails: a missing URL or an unreachable server yields
/// `DatabaseConnection::Disconnected` and the API serves static content.
pub async fn connect(config: &DatastoreConfig) -> DatabaseConnection {
    let Some(url) = config.url.as_ref() else {
        warn!("DATABASE_URL is not set, serving static content only");
        return DatabaseConnection::Disconnected;
    };

    let mut opt = ConnectOptions::new(url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(std::time::Duration::from_secs(300))
        .max_lifetime(std::time::Duration::from_secs(1800))
        .connect_lazy(true)
        .sqlx_logging(false);

    match Database::connect(opt).await {
        Ok(conn) => {
            info!("Datastore pool created");
            conn
        }
        Err(e) => {
            warn!("Datastore connection failed: {}", e);
            DatabaseConnection::Disconnected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn missing_url_yields_disconnected_handle() {
        let config = DatastoreConfig {
            url: None,
            max_connections: 10,
            connect_timeout: Duration::from_secs(3),
            run_migrations: true,
            seed_demo_data: true,
        };

        let conn = connect(&config).await;

        assert!(matches!(conn, DatabaseConnection::Disconnected));
    }
}
