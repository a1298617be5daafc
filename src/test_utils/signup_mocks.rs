use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::signup::{Clock, SubmitStateStore, WaitlistRepo},
};

/// In-memory waitlist store with the same unique-email behavior as the
/// real relation.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    emails: Mutex<Vec<String>>,
    attempts: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-registered addresses.
    pub fn with_emails(emails: Vec<String>) -> Self {
        Self {
            emails: Mutex::new(emails),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn registered(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }

    /// Number of insert calls that reached the store, duplicates included.
    pub fn insert_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &str) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let mut emails = self.emails.lock().unwrap();
        if emails.iter().any(|existing| existing == email) {
            return Err(AppError::AlreadyRegistered);
        }
        emails.push(email.to_string());
        Ok(())
    }
}

/// Waitlist store that always reports a transport-level failure.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &str) -> AppResult<()> {
        Err(AppError::Database("connection reset".to_string()))
    }
}

/// Clock advanced by hand, so tests simulate elapsed time without waiting.
pub struct ManualClock {
    now_ms: Mutex<i64>,
}

impl ManualClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: Mutex::new(now_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        *self.now_ms.lock().unwrap() += ms;
    }

    pub fn set(&self, now_ms: i64) {
        *self.now_ms.lock().unwrap() = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        *self.now_ms.lock().unwrap()
    }
}

/// Submit-state store held in memory.
#[derive(Default)]
pub struct InMemorySubmitState {
    last: Mutex<Option<i64>>,
}

impl InMemorySubmitState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmitStateStore for InMemorySubmitState {
    fn last_submit_ms(&self) -> Option<i64> {
        *self.last.lock().unwrap()
    }

    fn set_last_submit_ms(&self, ts: i64) {
        *self.last.lock().unwrap() = Some(ts);
    }
}
