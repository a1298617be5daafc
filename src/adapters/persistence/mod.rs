use sqlx::{PgPool, postgres::PgPoolOptions};

pub mod waitlist;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| {
                anyhow::anyhow!("Postgres connection failed (check DATABASE_URL/password): {e}")
            })?;

        tracing::info!("Connected to database");
        Ok(PostgresPersistence::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
