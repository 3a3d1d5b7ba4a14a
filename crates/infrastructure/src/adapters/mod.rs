//! Adapters implementing application ports

mod csv_schedule_adapter;
mod whatsapp_sender_adapter;

pub use csv_schedule_adapter::{CsvScheduleAdapter, parse_availability};
pub use whatsapp_sender_adapter::{DisabledSender, SENDER_NOT_CONFIGURED, WhatsAppSenderAdapter};
