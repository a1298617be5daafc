use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::email_templates;
use crate::validators::is_plausible_email;

/// Row-level change kinds delivered by the store's trigger mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One change notification, as POSTed by the database webhook.
#[derive(Debug, Deserialize)]
pub struct WebhookNotification {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub table: String,
    pub schema: String,
    #[serde(default)]
    pub record: Option<ChangedRecord>,
    #[serde(default)]
    pub old_record: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangedRecord {
    #[serde(default)]
    pub email: Option<String>,
}

pub struct EmailReceipt {
    /// Message identifier assigned by the provider.
    pub id: String,
}

#[async_trait]
pub trait ConfirmationEmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<EmailReceipt>;
}

/// What the notifier did with one notification.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Sent { id: String },
    Ignored,
}

pub struct ConfirmationUseCases {
    email: Arc<dyn ConfirmationEmailSender>,
}

impl ConfirmationUseCases {
    pub fn new(email: Arc<dyn ConfirmationEmailSender>) -> Self {
        Self { email }
    }

    /// Decide whether a notification is a new waitlist signup and, if so,
    /// send exactly one confirmation email.
    ///
    /// There is no redelivery dedup here: the same INSERT delivered twice
    /// sends two emails. Callers needing idempotency must layer a
    /// delivery-id ledger on top.
    #[instrument(skip(self, notification))]
    pub async fn handle(
        &self,
        notification: WebhookNotification,
    ) -> AppResult<ConfirmationOutcome> {
        if notification.kind != ChangeKind::Insert {
            return Ok(ConfirmationOutcome::Ignored);
        }
        if !targets_waitlist(&notification) {
            return Ok(ConfirmationOutcome::Ignored);
        }

        let email = notification
            .record
            .as_ref()
            .and_then(|record| record.email.as_deref())
            .filter(|email| is_plausible_email(email))
            .ok_or_else(|| AppError::InvalidInput("Missing or invalid email in payload".into()))?;

        let (subject, html) = email_templates::waitlist_confirmation();
        let receipt = self.email.send(email, &subject, &html).await?;

        tracing::info!(id = %receipt.id, "Waitlist confirmation sent");
        Ok(ConfirmationOutcome::Sent { id: receipt.id })
    }
}

fn targets_waitlist(notification: &WebhookNotification) -> bool {
    notification.table == "waitlist" && notification.schema == "public"
}
