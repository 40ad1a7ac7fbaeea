//! Applies pending schema migrations.

use inovacademico::config::DatabaseConfig;
use inovacademico::promptlog::Store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DatabaseConfig::from_env()?;
    let store = Store::new(&config).await?;
    let report = store.run_migrations().await?;

    if report.applied_migrations().is_empty() {
        println!("Schema is up to date");
    } else {
        for migration in report.applied_migrations() {
            println!("Applied {migration}");
        }
    }

    Ok(())
}
