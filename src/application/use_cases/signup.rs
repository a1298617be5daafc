use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::validators::is_plausible_email;

/// Minimum gap between two successful signups from the same client.
pub const RATE_LIMIT_MS: i64 = 60 * 1000;

/// Key under which the last successful submission time is persisted.
pub const LAST_SUBMIT_KEY: &str = "welco_waitlist_last_submit";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a new waitlist entry. `AppError::AlreadyRegistered` signals the
    /// store's unique-email constraint; every other error is treated as a
    /// uniform transport/unknown failure.
    async fn insert(&self, email: &str) -> AppResult<()>;
}

/// Millisecond clock, injectable so tests can simulate elapsed time.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Client-local persistence for the submission cooldown window.
pub trait SubmitStateStore: Send + Sync {
    fn last_submit_ms(&self) -> Option<i64>;
    fn set_last_submit_ms(&self, ts: i64);
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error(
        "You can add another email in about {wait_secs} second(s). We limit signups to once per minute."
    )]
    RateLimited { wait_secs: u64 },

    #[error("This email is already on our waitlist.")]
    AlreadyRegistered,

    #[error("Another signup is still in progress.")]
    InFlight,

    #[error("Something went wrong. Please try again in a moment.")]
    Failed,
}

pub struct SignupUseCases {
    repo: Arc<dyn WaitlistRepo>,
    clock: Arc<dyn Clock>,
    state: Arc<dyn SubmitStateStore>,
    in_flight: AtomicBool,
}

impl SignupUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        clock: Arc<dyn Clock>,
        state: Arc<dyn SubmitStateStore>,
    ) -> Self {
        Self {
            repo,
            clock,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Validate, rate-limit and insert one waitlist signup.
    ///
    /// The syntactic check and the cooldown check both fail before any store
    /// call is issued; only a confirmed insert moves the cooldown window.
    #[instrument(skip(self))]
    pub async fn submit(&self, email: &str) -> Result<(), SignupError> {
        let _guard = self.begin()?;

        if !is_plausible_email(email) {
            return Err(SignupError::InvalidEmail);
        }

        if let Some(last) = self.state.last_submit_ms() {
            let elapsed = self.clock.now_ms() - last;
            if elapsed < RATE_LIMIT_MS {
                let wait_secs = ((RATE_LIMIT_MS - elapsed) as u64).div_ceil(1000);
                return Err(SignupError::RateLimited { wait_secs });
            }
        }

        match self.repo.insert(email).await {
            Ok(()) => {
                self.state.set_last_submit_ms(self.clock.now_ms());
                Ok(())
            }
            Err(AppError::AlreadyRegistered) => Err(SignupError::AlreadyRegistered),
            Err(err) => {
                tracing::error!(error = ?err, "Waitlist signup failed");
                Err(SignupError::Failed)
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, SignupError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SignupError::InFlight);
        }
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }
}

/// Clears the in-flight flag when an attempt resolves, success or failure.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
