use reqwest::Client;
use serde::Deserialize;
use std::path::Path;

use crate::config::AppConfig;

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

// The transcription endpoint rejects parts without a recognizable audio type.
fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Transcribe an audio file's bytes via the Whisper API.
pub async fn transcribe(
    config: &AppConfig,
    audio: Vec<u8>,
    file_name: &str,
) -> Result<String, String> {
    if config.openai_api_key.is_empty() {
        return Err("OpenAI API key not configured. Go to Settings to add your key.".to_string());
    }

    let client = Client::new();

    let part = reqwest::multipart::Part::bytes(audio)
        .file_name(file_name.to_string())
        .mime_str(guess_mime_type(file_name))
        .map_err(|e| format!("MIME error: {}", e))?;

    let form = reqwest::multipart::Form::new()
        .text("model", config.whisper_model.clone())
        .text("response_format", "json")
        .part("file", part);

    let response = client
        .post(format!("{}/audio/transcriptions", config.api_base))
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .multipart(form)
        .send()
        .await
        .map_err(|e| format!("Transcription request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("OpenAI API error ({}): {}", status, body));
    }

    let result: TranscriptionResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse transcription response: {}", e))?;

    Ok(result.text)
}
