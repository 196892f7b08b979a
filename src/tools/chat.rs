use crate::ai::openai::{chat_completion, ChatParams};
use crate::ai::{self, ChatReply};
use crate::config::AppConfig;

type ConfigState = std::sync::Arc<parking_lot::Mutex<AppConfig>>;

const CHAT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const CHAT_PARAMS: ChatParams = ChatParams {
    max_tokens: 150,
    temperature: 0.7,
};

pub async fn reply_to_message(config: &AppConfig, message: &str) -> Result<ChatReply, String> {
    let message = ai::non_empty(message, "Please enter a message.")?;
    chat_completion(config, CHAT_SYSTEM_PROMPT, message, CHAT_PARAMS).await
}

#[tauri::command]
pub async fn send_chat_message(
    config: tauri::State<'_, ConfigState>,
    message: String,
) -> Result<ChatReply, String> {
    let cfg = config.lock().clone();
    reply_to_message(&cfg, &message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, CannedResponse};

    #[tokio::test]
    async fn bot_reply_reaches_the_caller_verbatim() {
        let server = testutil::serve(vec![CannedResponse::json(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"Hello world"}}]}"#,
        )]);
        let config = testutil::test_config(&server.base_url);

        let reply = reply_to_message(&config, "say hi").await.unwrap();
        assert_eq!(reply.content, "Hello world");

        let requests = server.finish();
        let payload: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(payload["messages"][1]["content"], "say hi");
        assert_eq!(payload["max_tokens"], 150);
    }

    #[tokio::test]
    async fn empty_message_is_rejected_without_a_request() {
        let config = testutil::test_config("http://127.0.0.1:1");

        let err = reply_to_message(&config, "").await.unwrap_err();
        assert_eq!(err, "Please enter a message.");
    }

    #[tokio::test]
    async fn transport_failure_is_a_display_string_not_a_panic() {
        // Nothing listens on this port; the send itself fails.
        let config = testutil::test_config("http://127.0.0.1:9");

        let err = reply_to_message(&config, "hi").await.unwrap_err();
        assert!(err.starts_with("OpenAI request failed:"), "unexpected: {err}");
    }
}
