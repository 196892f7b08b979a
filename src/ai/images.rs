use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageItem>,
}

// Depending on the model the API answers with inline base64 or a
// short-lived URL per item.
#[derive(Debug, Deserialize)]
struct ImageItem {
    #[serde(default)]
    b64_json: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Submit a synthesis request and return the raw bytes of the first image.
pub async fn generate(config: &AppConfig, prompt: &str) -> Result<Vec<u8>, String> {
    if config.openai_api_key.is_empty() {
        return Err("OpenAI API key not configured. Go to Settings to add your key.".to_string());
    }

    let client = Client::new();

    let request = ImageRequest {
        model: config.image_model.clone(),
        prompt: prompt.to_string(),
        n: 1,
        size: config.image_size.clone(),
    };

    let response = client
        .post(format!("{}/images/generations", config.api_base))
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Image request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("OpenAI API error ({}): {}", status, body));
    }

    let body: ImageResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse image response: {}", e))?;

    let item = body
        .data
        .into_iter()
        .next()
        .ok_or_else(|| "OpenAI returned no images".to_string())?;

    if let Some(b64) = item.b64_json {
        return BASE64
            .decode(b64.as_bytes())
            .map_err(|e| format!("Image base64 decode failed: {}", e));
    }

    let url = item
        .url
        .ok_or_else(|| "Image response had neither data nor URL".to_string())?;
    download(&client, &url).await
}

async fn download(client: &Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Image download failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Image download failed ({})", status));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Image download failed: {}", e))?;
    Ok(bytes.to_vec())
}
