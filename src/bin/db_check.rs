//! Database connectivity check.
//!
//! Verifies the configured database is reachable and reports row counts for
//! the application tables.

use inovacademico::config::DatabaseConfig;
use tokio_postgres::NoTls;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DatabaseConfig::from_env()?;
    let (client, connection) = config
        .url()
        .parse::<tokio_postgres::Config>()?
        .connect(NoTls)
        .await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {}", e);
        }
    });

    let version: String = client.query_one("SELECT version()", &[]).await?.get(0);
    println!("Connected: {version}");

    for table in ["users", "projects", "tasks", "prompt_logs"] {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        match client.query_one(sql.as_str(), &[]).await {
            Ok(row) => println!("  {:12} {:>6} rows", table, row.get::<_, i64>(0)),
            Err(_) => println!("  {table:12} missing (run the migrate binary first)"),
        }
    }

    Ok(())
}
