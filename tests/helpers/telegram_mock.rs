//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// API base URL for the bot client. The client appends
    /// `bot<token>/<Method>` itself, so this is the bare server root.
    pub fn get_api_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Create a bot instance wired to this mock server
    pub fn create_bot(&self) -> teloxide::Bot {
        teloxide::Bot::new(test_bot_token())
            .set_api_url(self.get_api_url().parse().expect("mock server URL is valid"))
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 123,
                        "from": {
                            "id": 12345,
                            "is_bot": true,
                            "first_name": "TestBot",
                            "username": "test_bot"
                        },
                        "chat": {
                            "id": -1001234567890_i64,
                            "title": "Test Group",
                            "type": "supergroup"
                        },
                        "date": 1640995200,
                        "text": "Test message"
                    }
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: message text is empty"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        // teloxide requests PascalCase method segments: /bot<token>/SendMessage
        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/SendMessage"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for getMe endpoint
    pub async fn mock_get_me(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "TestBot",
                        "username": "test_bot",
                        "can_join_groups": true,
                        "can_read_all_group_messages": false,
                        "supports_inline_queries": false
                    }
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 401,
                    "description": "Unauthorized"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 401 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/GetMe"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_get_me(config).await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Collect the text payloads of all sendMessage calls received so far
    pub async fn sent_texts(&self) -> Vec<String> {
        let received_requests = self.server.received_requests().await.unwrap();
        received_requests
            .iter()
            .filter(|req| req.url.path().ends_with("/SendMessage"))
            .filter_map(|req| serde_json::from_slice::<Value>(&req.body).ok())
            .filter_map(|body| {
                body.get("text")
                    .and_then(|t| t.as_str())
                    .map(|s| s.to_string())
            })
            .collect()
    }

    /// Verify that a specific endpoint was called the given number of times
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let received_requests = self.server.received_requests().await.unwrap();
        let matching_requests = received_requests
            .iter()
            .filter(|req| req.url.path().contains(endpoint))
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test chat ID
pub fn test_chat_id() -> i64 {
    -1001234567890
}

/// Helper function to create test admin ID
pub fn test_admin_id() -> i64 {
    555666777
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::prelude::*;
    use teloxide::types::ChatId;

    #[tokio::test]
    async fn test_telegram_mock_server_creation() {
        let mock_server = TelegramMockServer::new().await;
        assert!(mock_server.base_url.starts_with("http://"));
    }

    #[tokio::test]
    async fn test_get_api_url_is_a_bare_base() {
        let mock_server = TelegramMockServer::new().await;
        let api_url = mock_server.get_api_url();
        assert!(api_url.starts_with(&mock_server.base_url));
        assert!(api_url.ends_with('/'));
    }

    #[tokio::test]
    async fn test_sent_texts_captures_bot_replies() {
        let mock_server = TelegramMockServer::new().await;
        mock_server.setup_default_mocks().await;
        let bot = mock_server.create_bot();

        bot.send_message(ChatId(test_chat_id()), "hello")
            .await
            .expect("mocked sendMessage should answer");

        assert_eq!(mock_server.sent_texts().await, vec!["hello".to_string()]);
        mock_server.verify_endpoint_called("SendMessage", 1).await;
    }
}
