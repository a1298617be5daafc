use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    use_cases::signup::WaitlistRepo,
};

// Postgres unique-violation SQLSTATE, raised by the unique index on email.
const UNIQUE_VIOLATION: &str = "23505";

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, email: &str) -> AppResult<()> {
        let result = sqlx::query("INSERT INTO waitlist (id, email) VALUES ($1, $2)")
            .bind(Uuid::new_v4())
            .bind(email)
            .execute(self.pool())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(AppError::AlreadyRegistered)
            }
            Err(err) => Err(AppError::Database(err.to_string())),
        }
    }
}
