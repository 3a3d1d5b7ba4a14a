//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - WhatsApp sender adapter against a mocked Graph API
//! - CSV schedule adapter feeding the schedule service

use std::{io::Write, time::Duration};

use application::{
    ScheduleService,
    ports::{MessageSenderPort, SendError},
};
use domain::WaId;
use infrastructure::{AppConfig, CsvScheduleAdapter, WhatsAppSenderAdapter};
use integration_whatsapp::WhatsAppClientConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn client_config(base_url: &str) -> WhatsAppClientConfig {
    WhatsAppClientConfig {
        access_token: "test_access_token".to_string(),
        phone_number_id: "123456789".to_string(),
        api_version: "v18.0".to_string(),
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(2),
    }
}

fn recipient() -> WaId {
    WaId::new("15551234").unwrap()
}

// ============================================================================
// WhatsApp Sender Adapter Tests
// ============================================================================

mod whatsapp_sender_tests {
    use super::*;

    #[tokio::test]
    async fn successful_send_returns_receipt() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v18.0/123456789/messages"))
            .and(header("authorization", "Bearer test_access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "messaging_product": "whatsapp",
                "messages": [{"id": "wamid.out"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = WhatsAppSenderAdapter::new(client_config(&server.uri())).unwrap();
        let receipt = adapter.send_text(&recipient(), "HELLO").await.unwrap();

        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.content_type.as_deref(), Some("application/json"));
        assert!(receipt.body.contains("wamid.out"));
    }

    #[tokio::test]
    async fn provider_rejection_is_request_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 100, "message": "Invalid parameter"}
            })))
            .mount(&server)
            .await;

        let adapter = WhatsAppSenderAdapter::new(client_config(&server.uri())).unwrap();
        let result = adapter.send_text(&recipient(), "HELLO").await;

        assert_eq!(
            result,
            Err(SendError::request_failed("status 400: Invalid parameter"))
        );
    }

    #[tokio::test]
    async fn slow_provider_is_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = WhatsAppClientConfig {
            timeout: Duration::from_millis(50),
            ..client_config(&server.uri())
        };
        let adapter = WhatsAppSenderAdapter::new(config).unwrap();
        let result = adapter.send_text(&recipient(), "HELLO").await;

        assert_eq!(result, Err(SendError::Timeout));
    }

    #[tokio::test]
    async fn adapter_built_from_app_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v19.0/555/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig::from_toml(&format!(
            r#"
            [whatsapp]
            access_token = "token"
            phone_number_id = "555"
            api_version = "v19.0"
            base_url = "{}"
            "#,
            server.uri()
        ))
        .unwrap();

        let client_config = config.whatsapp.client_config().unwrap();
        let adapter = WhatsAppSenderAdapter::new(client_config).unwrap();
        assert!(adapter.send_text(&recipient(), "HI").await.is_ok());
    }
}

// ============================================================================
// CSV Schedule Tests
// ============================================================================

mod schedule_tests {
    use super::*;

    #[test]
    fn schedule_service_answers_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "class_type,date,time,availability").unwrap();
        writeln!(file, "Yoga,2023-12-25,10:00,true").unwrap();
        writeln!(file, "Yoga,2023-12-25,12:00,false").unwrap();
        file.flush().unwrap();

        let service = ScheduleService::load(&CsvScheduleAdapter::new(file.path()));

        assert_eq!(service.len(), 2);
        assert!(service.check_availability("Yoga", "2023-12-25", "10:00"));
        assert!(!service.check_availability("Yoga", "2023-12-25", "12:00"));
    }

    #[test]
    fn missing_csv_degrades_to_empty_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let service = ScheduleService::load(&CsvScheduleAdapter::new(dir.path().join("none.csv")));

        assert!(service.is_empty());
        assert!(!service.check_availability("Yoga", "2023-12-25", "10:00"));
    }

    #[test]
    fn malformed_csv_degrades_to_empty_schedule() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "class_type,date,time,availability").unwrap();
        writeln!(file, "Yoga,2023-12-25,10:00,true").unwrap();
        writeln!(file, "Yoga,2023-12-25,11:00,perhaps").unwrap();
        file.flush().unwrap();

        let service = ScheduleService::load(&CsvScheduleAdapter::new(file.path()));
        assert!(service.is_empty());
    }
}
