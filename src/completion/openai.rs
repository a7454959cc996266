//! OpenAI-compatible `/chat/completions` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChatMessage, CompletionProvider};
use crate::{config::CompletionConfig, FflError, Result};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ffl-comanager/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            n: 1,
        };

        debug!(model = %self.model, messages = messages.len(), "requesting chat completion");

        let res = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            warn!(%status, %message, "chat completion failed");
            return Err(FflError::Completion { message });
        }

        let parsed: ChatCompletionResponse = res.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(FflError::NoData {
                provider: "Completion provider",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{completion::Role, error::ErrorKind};
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(&CompletionConfig {
            api_key: "sk-test".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: server.uri(),
        })
        .unwrap()
    }

    fn exchange() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a fantasy football co-manager."),
            ChatMessage::user("who should I start?"),
        ]
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "n": 1,
                "messages": [
                    {"role": "system", "content": "You are a fantasy football co-manager."},
                    {"role": "user", "content": "who should I start?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Start your RB1."}, "finish_reason": "stop"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server).complete(&exchange()).await.unwrap();
        assert_eq!(reply, "Start your RB1.");
    }

    #[tokio::test]
    async fn test_provider_error_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached", "type": "requests"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .complete(&exchange())
            .await
            .unwrap_err();
        match &err {
            FflError::Completion { message } => assert_eq!(message, "Rate limit reached"),
            other => panic!("Expected Completion error, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[tokio::test]
    async fn test_error_without_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .complete(&exchange())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .complete(&exchange())
            .await
            .unwrap_err();
        assert!(matches!(err, FflError::NoData { .. }));
    }

    #[test]
    fn test_role_serialization() {
        let msg = ChatMessage::user("hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "user", "content": "hi"})
        );
        assert_eq!(serde_json::to_value(Role::System).unwrap(), json!("system"));
        assert!(serde_json::from_value::<Role>(json!("assistant")).is_err());
    }
}
