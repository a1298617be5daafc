use std::env;
use std::net::SocketAddr;

use secrecy::SecretString;

/// Sender used when NOTIFICATIONS_FROM_EMAIL is not set.
pub const DEFAULT_FROM_EMAIL: &str = "Welco <no-reply@welco.ai>";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Resend credential. Absence is surfaced per-request as a
    /// configuration error, not as a startup panic.
    pub resend_api_key: Option<SecretString>,
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::new(key.into()));

        let email_from =
            env::var("NOTIFICATIONS_FROM_EMAIL").unwrap_or(DEFAULT_FROM_EMAIL.to_string());

        Self {
            bind_addr,
            resend_api_key,
            email_from,
        }
    }
}
