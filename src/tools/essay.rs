use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::ai::openai::{chat_completion, ChatParams};
use crate::ai::{self, ChatReply};
use crate::config::AppConfig;
use crate::export;

type ConfigState = std::sync::Arc<parking_lot::Mutex<AppConfig>>;

const ESSAY_SYSTEM_PROMPT: &str = "You are an AI that can generate detailed essays.";
const ESSAY_PARAMS: ChatParams = ChatParams {
    max_tokens: 1024,
    temperature: 0.7,
};

pub async fn essay_for_topic(config: &AppConfig, topic: &str) -> Result<ChatReply, String> {
    let topic = ai::non_empty(topic, "Please enter a topic for the essay.")?;
    let prompt = format!("Write a detailed essay on the following topic: {}", topic);
    chat_completion(config, ESSAY_SYSTEM_PROMPT, &prompt, ESSAY_PARAMS).await
}

#[tauri::command]
pub async fn generate_essay(
    config: tauri::State<'_, ConfigState>,
    topic: String,
) -> Result<ChatReply, String> {
    let cfg = config.lock().clone();
    essay_for_topic(&cfg, &topic).await
}

/// The empty-content check runs before the save dialog opens; a cancelled
/// dialog resolves to `Ok(None)`.
#[tauri::command]
pub async fn export_essay(app: AppHandle, content: String) -> Result<Option<String>, String> {
    if content.trim().is_empty() {
        return Err("No essay content to export.".to_string());
    }

    let picked = app
        .dialog()
        .file()
        .add_filter("Markdown Document", &["md"])
        .set_file_name("essay.md")
        .blocking_save_file();

    let Some(file) = picked else {
        return Ok(None);
    };
    let path = match file {
        FilePath::Path(path) => path,
        FilePath::Url(url) => return Err(format!("Unsupported save location: {}", url)),
    };

    export::write_document(&path, "Generated Essay", content.trim())?;
    log::info!("Essay exported to {}", path.display());
    Ok(Some(path.display().to_string()))
}
