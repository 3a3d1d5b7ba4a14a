//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ScheduleService, UppercaseResponder, WebhookService,
    ports::{MessageSenderPort, ResponseGenerator},
};
use infrastructure::{AppConfig, CsvScheduleAdapter, DisabledSender, WhatsAppSenderAdapter};
use integration_whatsapp::WebhookVerifier;
use tracing::{info, warn};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Inbound event to outbound reply pipeline
    pub webhook_service: Arc<WebhookService>,
    /// Class schedule lookups
    pub schedule_service: Arc<ScheduleService>,
    /// Subscription handshake and payload signatures
    pub verifier: Arc<WebhookVerifier>,
}

impl AppState {
    pub fn new(
        webhook_service: WebhookService,
        schedule_service: ScheduleService,
        verifier: WebhookVerifier,
    ) -> Self {
        Self {
            webhook_service: Arc::new(webhook_service),
            schedule_service: Arc::new(schedule_service),
            verifier: Arc::new(verifier),
        }
    }

    /// Wire adapters and services from configuration
    ///
    /// Missing WhatsApp credentials leave the webhook running with a
    /// [`DisabledSender`]; a missing schedule file yields an empty schedule.
    pub fn from_config(config: &AppConfig) -> Self {
        let sender = build_sender(config);
        let generator: Arc<dyn ResponseGenerator> = Arc::new(UppercaseResponder);
        let webhook_service = WebhookService::new(sender, generator)
            .with_provider_style(config.whatsapp.provider_style);

        let schedule_service =
            ScheduleService::load(&CsvScheduleAdapter::new(&config.schedule.csv_path));

        let verifier = WebhookVerifier::new(config.whatsapp.webhook_config());
        if !verifier.is_configured() {
            warn!("No webhook verify token configured, subscription handshake will be refused");
        }

        Self::new(webhook_service, schedule_service, verifier)
    }
}

fn build_sender(config: &AppConfig) -> Arc<dyn MessageSenderPort> {
    let Some(client_config) = config.whatsapp.client_config() else {
        warn!("WhatsApp access token or phone number id missing, sending is disabled");
        return Arc::new(DisabledSender);
    };

    match WhatsAppSenderAdapter::new(client_config) {
        Ok(adapter) => {
            info!(url = %adapter.client().messages_url(), "WhatsApp sender ready");
            Arc::new(adapter)
        },
        Err(e) => {
            warn!(error = %e, "Failed to create WhatsApp client, sending is disabled");
            Arc::new(DisabledSender)
        },
    }
}
