use serde::{Deserialize, Serialize};
use std::path::Path;
use tauri::Manager;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub api_base: String,
    pub chat_model: String,
    pub image_model: String,
    pub image_size: String,
    pub whisper_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            whisper_model: "whisper-1".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(app_data: &Path) -> Self {
        let config_path = app_data.join("config.json");
        let mut config = if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            let c = Self::default();
            c.save(app_data);
            c
        };

        // Override with environment variables if set (more secure than hardcoding)
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.openai_api_key = key;
            }
        }
        if let Ok(base) = std::env::var("OPENAI_API_BASE") {
            if !base.trim().is_empty() {
                config.api_base = base;
            }
        }
        config.api_base = normalize_api_base(&config.api_base);

        config
    }

    pub fn save(&self, app_data: &Path) {
        let config_path = app_data.join("config.json");
        if let Ok(content) = serde_json::to_string_pretty(self) {
            std::fs::write(config_path, content).ok();
        }
    }
}

/// Trailing slashes break endpoint joins; an empty value falls back to the
/// public API host.
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityModels {
    pub capability: String,
    pub models: Vec<String>,
}

type ConfigState = std::sync::Arc<parking_lot::Mutex<AppConfig>>;

#[tauri::command]
pub fn get_config(config: tauri::State<'_, ConfigState>) -> AppConfig {
    config.lock().clone()
}

#[tauri::command]
pub fn update_config(
    app: tauri::AppHandle,
    config_state: tauri::State<'_, ConfigState>,
    new_config: AppConfig,
) -> Result<(), String> {
    let app_data = app
        .path()
        .app_data_dir()
        .map_err(|e: tauri::Error| e.to_string())?;

    let mut new_config = new_config;
    new_config.api_base = normalize_api_base(&new_config.api_base);
    new_config.save(&app_data);
    *config_state.lock() = new_config;
    Ok(())
}

#[tauri::command]
pub fn get_available_models() -> Vec<CapabilityModels> {
    vec![
        CapabilityModels {
            capability: "chat".to_string(),
            models: vec![
                "gpt-4o".to_string(),
                "gpt-4o-mini".to_string(),
                "gpt-4-turbo".to_string(),
                "gpt-3.5-turbo".to_string(),
            ],
        },
        CapabilityModels {
            capability: "image".to_string(),
            models: vec![
                "dall-e-3".to_string(),
                "dall-e-2".to_string(),
                "gpt-image-1".to_string(),
            ],
        },
        CapabilityModels {
            capability: "transcription".to_string(),
            models: vec!["whisper-1".to_string()],
        },
    ]
}
