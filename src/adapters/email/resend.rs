use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    app_error::{AppError, AppResult},
    use_cases::confirmation::{ConfirmationEmailSender, EmailReceipt},
};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct ResendRes {
    id: String,
}

#[async_trait]
impl ConfirmationEmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<EmailReceipt> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Resend request failed");
                AppError::EmailProvider { details: None }
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.json::<serde_json::Value>().await.ok();
            tracing::error!(status = %status, details = ?details, "Resend API error");
            return Err(AppError::EmailProvider { details });
        }

        let parsed: ResendRes = response.json().await.map_err(|err| {
            tracing::error!(error = %err, "Resend response body was not valid JSON");
            AppError::EmailProvider { details: None }
        })?;

        Ok(EmailReceipt { id: parsed.id })
    }
}
