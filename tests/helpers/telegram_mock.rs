//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use super::test_bot_token;

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot talking to this server instead of Telegram
    pub fn bot(&self) -> Bot {
        let url = self.server.uri().parse().expect("mock server url");
        Bot::new(test_bot_token()).set_api_url(url)
    }

    /// Request path for a method, named as teloxide sends it (`SendMessage`)
    fn method_path(api_method: &str) -> String {
        format!("/bot{}/{}", test_bot_token(), api_method)
    }

    /// Setup a successful sendMessage endpoint
    pub async fn mock_send_message(&self) {
        Mock::given(method("POST"))
            .and(path(Self::method_path("SendMessage")))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_response()))
            .mount(&self.server)
            .await;
    }

    /// Setup a successful sendPhoto endpoint
    pub async fn mock_send_photo(&self) {
        let mut body = message_response();
        if let Some(result) = body["result"].as_object_mut() {
            result.remove("text");
            result.insert("photo".to_string(), json!([{
                "file_id": "photo_file_id",
                "file_unique_id": "photo_unique_id",
                "width": 300,
                "height": 520,
                "file_size": 1024
            }]));
        }

        Mock::given(method("POST"))
            .and(path(Self::method_path("SendPhoto")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup a successful answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self) {
        Mock::given(method("POST"))
            .and(path(Self::method_path("AnswerCallbackQuery")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Setup an endpoint to fail with the given description
    pub async fn mock_failure(&self, api_method: &str, description: &str) {
        Mock::given(method("POST"))
            .and(path(Self::method_path(api_method)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": description
            })))
            .mount(&self.server)
            .await;
    }

    /// Methods of all received requests, in arrival order
    pub async fn method_log(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.url.path().rsplit('/').next().map(str::to_string))
            .collect()
    }

    /// Number of requests the server received for an API method
    pub async fn calls(&self, api_method: &str) -> usize {
        self.bodies(api_method).await.len()
    }

    /// Request bodies received for an API method
    pub async fn bodies(&self, api_method: &str) -> Vec<String> {
        let expected = Self::method_path(api_method);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == expected)
            .map(|request| String::from_utf8_lossy(&request.body).to_string())
            .collect()
    }
}

fn message_response() -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 123,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "TarotBot",
                "username": "tarot_bot"
            },
            "chat": {
                "id": 42,
                "first_name": "Test",
                "type": "private"
            },
            "date": 1640995200,
            "text": "Test message"
        }
    })
}
