use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::ai::stt;
use crate::config::AppConfig;

type ConfigState = std::sync::Arc<parking_lot::Mutex<AppConfig>>;

/// Pick an audio file, read it, and send it for transcription. A cancelled
/// picker resolves to `Ok(None)`.
#[tauri::command]
pub async fn transcribe_audio(
    app: AppHandle,
    config: tauri::State<'_, ConfigState>,
) -> Result<Option<String>, String> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Audio Files", &["mp3", "wav", "m4a", "ogg", "flac"])
        .blocking_pick_file();

    let Some(file) = picked else {
        return Ok(None);
    };
    let path = match file {
        FilePath::Path(path) => path,
        FilePath::Url(url) => return Err(format!("Unsupported file location: {}", url)),
    };

    let audio = std::fs::read(&path).map_err(|e| format!("Failed to read audio file: {}", e))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio.mp3")
        .to_string();

    let cfg = config.lock().clone();
    let text = stt::transcribe(&cfg, audio, &file_name).await?;
    log::info!("Transcribed {} ({} chars)", path.display(), text.len());
    Ok(Some(text))
}
