//! Inserts bootstrap rows into `users` and `projects` when they are empty.
//!
//! Safe to run repeatedly; a non-empty table is left untouched.

use inovacademico::config::DatabaseConfig;
use tokio_postgres::NoTls;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

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

    let users: i64 = client
        .query_one("SELECT COUNT(*) FROM users", &[])
        .await?
        .get(0);
    if users == 0 {
        client
            .execute(
                "INSERT INTO users (id, email, name) VALUES ($1, $2, $3)",
                &[&Uuid::new_v4(), &"admin@inovacademico.com", &"Administrator"],
            )
            .await?;
        println!("Seeded users");
    } else {
        println!("Users table already has {users} rows, skipping");
    }

    let projects: i64 = client
        .query_one("SELECT COUNT(*) FROM projects", &[])
        .await?
        .get(0);
    if projects == 0 {
        let owner: Uuid = client
            .query_one("SELECT id FROM users ORDER BY created_at LIMIT 1", &[])
            .await?
            .get(0);
        client
            .execute(
                "INSERT INTO projects (id, title, owner_id) VALUES ($1, $2, $3)",
                &[&Uuid::new_v4(), &"Bibliography corrections", &owner],
            )
            .await?;
        println!("Seeded projects");
    } else {
        println!("Projects table already has {projects} rows, skipping");
    }

    Ok(())
}
