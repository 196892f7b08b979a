use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ChatReply;
use crate::config::AppConfig;

/// Per-tool completion parameters; each tool pins its own token cap.
#[derive(Debug, Clone, Copy)]
pub struct ChatParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Single chat-completion round trip. Every failure comes back as a
/// display-ready string; nothing here retries or escalates.
pub async fn chat_completion(
    config: &AppConfig,
    system_prompt: &str,
    user_prompt: &str,
    params: ChatParams,
) -> Result<ChatReply, String> {
    if config.openai_api_key.is_empty() {
        return Err("OpenAI API key not configured. Go to Settings to add your key.".to_string());
    }

    let client = Client::new();

    let request = ChatRequest {
        model: config.chat_model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ],
        max_tokens: params.max_tokens,
        temperature: params.temperature,
    };

    let response = client
        .post(format!("{}/chat/completions", config.api_base))
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("OpenAI request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("OpenAI API error ({}): {}", status, body));
    }

    let body: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse OpenAI response: {}", e))?;

    let content = body
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .unwrap_or_else(|| "No response from OpenAI".to_string());

    Ok(ChatReply {
        content,
        model: config.chat_model.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
