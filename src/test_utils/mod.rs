//! In-memory implementations of the trait seams, for tests.

mod email_mocks;
mod signup_mocks;

pub use email_mocks::{RecordingEmailSender, RejectingEmailSender, SentEmail};
pub use signup_mocks::{
    FailingWaitlistRepo, InMemorySubmitState, InMemoryWaitlistRepo, ManualClock,
};

use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::{AppConfig, DEFAULT_FROM_EMAIL},
    use_cases::confirmation::{ConfirmationEmailSender, ConfirmationUseCases},
};

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:3001".parse().unwrap(),
        resend_api_key: Some(SecretString::new("re_test_key".into())),
        email_from: DEFAULT_FROM_EMAIL.to_string(),
    }
}

/// App state wired to the given email sender, credential present.
pub fn app_state_with_sender(sender: Arc<dyn ConfirmationEmailSender>) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        confirmation: Some(Arc::new(ConfirmationUseCases::new(sender))),
    }
}

/// App state as started without RESEND_API_KEY.
pub fn app_state_without_credential() -> AppState {
    let config = AppConfig {
        resend_api_key: None,
        ..test_config()
    };
    AppState {
        config: Arc::new(config),
        confirmation: None,
    }
}
