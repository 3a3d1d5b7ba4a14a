//! Application services - Use case implementations

mod reply_formatter;
mod schedule_service;
mod uppercase_responder;
mod webhook_service;

pub use reply_formatter::to_provider_style;
pub use schedule_service::ScheduleService;
pub use uppercase_responder::UppercaseResponder;
pub use webhook_service::{DeliveryOutcome, WebhookService};
