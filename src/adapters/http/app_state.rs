use std::sync::Arc;

use crate::{infra::config::AppConfig, use_cases::confirmation::ConfirmationUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Present only when the email-provider credential is configured.
    pub confirmation: Option<Arc<ConfirmationUseCases>>,
}
