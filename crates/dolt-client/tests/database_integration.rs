//! Integration tests for database management
//!
//! These tests require a running Dolt SQL server.
//! They are ignored by default and can be run with:
//! ```
//! cargo test --package dolt-client --test database_integration -- --ignored
//! ```
//!
//! To set up a local Dolt server for testing:
//! ```
//! dolt sql-server --host 127.0.0.1 --port 3306 --user root
//! ```

use dolt_client::Dolt;
use mysql_async::prelude::*;
use mysql_async::{Conn, Opts, OptsBuilder};
use uuid::Uuid;

/// Initialize logging for tests if not already initialized
fn initialize_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("dolt_client=debug".parse().unwrap()),
            )
            .with_test_writer()
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Helper to open a test connection from the environment
async fn connect() -> Conn {
    initialize_logging();

    let host = std::env::var("DOLT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("DOLT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3306);
    let user = std::env::var("DOLT_USER").unwrap_or_else(|_| "root".to_string());

    let mut opts = OptsBuilder::from_opts(Opts::default())
        .ip_or_hostname(host)
        .tcp_port(port)
        .user(Some(user));
    if let Ok(password) = std::env::var("DOLT_PASSWORD") {
        opts = opts.pass(Some(password));
    }

    Conn::new(opts)
        .await
        .expect("Failed to connect to Dolt server")
}

fn unique_database_name() -> String {
    format!("it_{}", Uuid::new_v4().simple())
}

/// Test that creating a database twice succeeds and lists it exactly once
#[tokio::test]
#[ignore = "requires running Dolt SQL server"]
async fn test_create_database_is_idempotent() {
    let mut conn = connect().await;
    let mut dolt = Dolt::new(&mut conn);
    let name = unique_database_name();

    assert!(
        dolt.create_database(&name)
            .await
            .expect("Failed to create database")
    );
    assert!(
        dolt.create_database(&name)
            .await
            .expect("Failed to re-create database")
    );

    let databases = dolt
        .list_databases()
        .await
        .expect("Failed to list databases");
    assert_eq!(
        databases.iter().filter(|db| **db == name).count(),
        1,
        "Expected exactly one listing for {name}"
    );

    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to drop database")
    );
}

/// Test that dropping a missing database is a no-op success
#[tokio::test]
#[ignore = "requires running Dolt SQL server"]
async fn test_drop_database_is_idempotent() {
    let mut conn = connect().await;
    let mut dolt = Dolt::new(&mut conn);
    let name = unique_database_name();

    assert!(
        dolt.create_database(&name)
            .await
            .expect("Failed to create database")
    );
    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to drop database")
    );
    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to drop missing database")
    );

    let databases = dolt
        .list_databases()
        .await
        .expect("Failed to list databases");
    assert!(
        !databases.contains(&name),
        "Dropped database still listed: {name}"
    );
}

/// Test that undrop restores a dropped database
#[tokio::test]
#[ignore = "requires running Dolt SQL server"]
async fn test_undrop_restores_dropped_database() {
    let mut conn = connect().await;
    let mut dolt = Dolt::new(&mut conn);
    let name = unique_database_name();

    assert!(
        dolt.create_database(&name)
            .await
            .expect("Failed to create database")
    );
    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to drop database")
    );
    assert!(
        dolt.undrop_database(&name)
            .await
            .expect("Failed to undrop database")
    );

    let databases = dolt
        .list_databases()
        .await
        .expect("Failed to list databases");
    assert!(
        databases.contains(&name),
        "Undropped database not listed: {name}"
    );

    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to clean up database")
    );
}

/// Test that USE scopes subsequent statements to the selected database
#[tokio::test]
#[ignore = "requires running Dolt SQL server"]
async fn test_use_database_selects_scope() {
    let mut conn = connect().await;
    let mut dolt = Dolt::new(&mut conn);
    let name = unique_database_name();

    assert!(
        dolt.create_database(&name)
            .await
            .expect("Failed to create database")
    );
    dolt.use_database(&name)
        .await
        .expect("Failed to select database");

    let row: Option<(Option<String>,)> = dolt
        .connection()
        .query_first("SELECT DATABASE()")
        .await
        .expect("Failed to query DATABASE()");
    assert_eq!(row.and_then(|(db,)| db).as_deref(), Some(name.as_str()));

    dolt.connection()
        .query_drop("CREATE TABLE scoped (id INT PRIMARY KEY)")
        .await
        .expect("Failed to create table in selected database");

    assert!(
        dolt.drop_database(&name)
            .await
            .expect("Failed to clean up database")
    );
}
