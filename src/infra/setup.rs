use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    infra::config::AppConfig,
    use_cases::confirmation::ConfirmationUseCases,
};

pub fn init_app_state() -> AppState {
    let config = AppConfig::from_env();

    let confirmation = match config.resend_api_key.clone() {
        Some(api_key) => {
            let email = Arc::new(ResendEmailSender::new(api_key, config.email_from.clone()));
            Some(Arc::new(ConfirmationUseCases::new(email)))
        }
        None => {
            tracing::error!("RESEND_API_KEY is not set; confirmation emails cannot be sent");
            None
        }
    };

    AppState {
        config: Arc::new(config),
        confirmation,
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "welco_waitlist=debug,tower_http=debug".into());

    let console_layer = fmt::layer().with_target(false).with_level(true).pretty();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .ok();
}
