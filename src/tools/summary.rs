use crate::ai::openai::{chat_completion, ChatParams};
use crate::ai::{self, ChatReply};
use crate::config::AppConfig;

type ConfigState = std::sync::Arc<parking_lot::Mutex<AppConfig>>;

const SUMMARY_SYSTEM_PROMPT: &str = "You are an AI that can summarize text.";
const SUMMARY_PARAMS: ChatParams = ChatParams {
    max_tokens: 200,
    temperature: 0.7,
};

pub async fn summary_of_text(config: &AppConfig, text: &str) -> Result<ChatReply, String> {
    let text = ai::non_empty(text, "Please enter text to summarize.")?;
    let prompt = format!("Please summarize the following text: {}", text);
    chat_completion(config, SUMMARY_SYSTEM_PROMPT, &prompt, SUMMARY_PARAMS).await
}

#[tauri::command]
pub async fn summarize_text(
    config: tauri::State<'_, ConfigState>,
    text: String,
) -> Result<ChatReply, String> {
    let cfg = config.lock().clone();
    summary_of_text(&cfg, &text).await
}
