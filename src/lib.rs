pub mod config;
pub mod modules;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::notifier::{NotificationGate, TelegramNotifier};
use services::poller::PollEngine;
use services::practicum::PracticumClient;

/// Wire the production clients from configuration.
pub fn create_engine(config: &Config) -> PollEngine {
    let api = Arc::new(PracticumClient::new(
        config.endpoint.clone(),
        config.credentials.practicum_token.clone(),
        config.http_timeout(),
    ));
    let notifier = Arc::new(TelegramNotifier::new(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
        config.http_timeout(),
    ));
    let gate = NotificationGate::new(notifier, config.credentials.telegram_chat_id.clone());

    PollEngine::new(api, gate, config.retry_period())
}
