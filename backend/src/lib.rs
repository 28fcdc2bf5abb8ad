pub mod api;
pub mod config;
pub mod models;
pub mod schema;
pub mod store;

pub async fn db_connection(
    database_url: &str,
) -> Result<diesel_async::AsyncPgConnection, diesel::ConnectionError> {
    use diesel_async::AsyncConnection;

    diesel_async::AsyncPgConnection::establish(database_url)
        .await
        .inspect_err(|e| tracing::error!("Connecting to database: {:?}", e))
}
