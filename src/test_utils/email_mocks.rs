use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::confirmation::{ConfirmationEmailSender, EmailReceipt},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that accepts everything and records what it was given.
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationEmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<EmailReceipt> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(EmailReceipt {
            id: format!("test-email-{}", sent.len()),
        })
    }
}

/// Email sender that refuses every request with a provider-style error body.
pub struct RejectingEmailSender {
    details: serde_json::Value,
}

impl RejectingEmailSender {
    pub fn new(details: serde_json::Value) -> Self {
        Self { details }
    }
}

#[async_trait]
impl ConfirmationEmailSender for RejectingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<EmailReceipt> {
        Err(AppError::EmailProvider {
            details: Some(self.details.clone()),
        })
    }
}
