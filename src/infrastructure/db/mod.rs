use sqlx::{Pool, Postgres};
use tokio::time::{Duration, sleep};

pub type PgPool = Pool<Postgres>;

/// Connects with a bounded retry loop so a database that is still coming up
/// (e.g. alongside this service in a compose stack) does not kill the process
/// on the first refused connection. Exhausting the attempts is fatal.
pub async fn connect_pool(database_url: &str, attempts: u32) -> anyhow::Result<PgPool> {
    let attempts = attempts.max(1);
    let mut last_err = None;
    for attempt in 1..=attempts {
        match sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                tracing::warn!(attempt, attempts, error = %e, "database connection failed");
                last_err = Some(e);
                if attempt < attempts {
                    sleep(Duration::from_secs(5)).await;
                }
            }
        }
    }
    Err(anyhow::anyhow!(
        "could not connect to database after {attempts} attempts: {}",
        last_err.expect("at least one attempt")
    ))
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
