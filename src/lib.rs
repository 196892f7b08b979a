mod ai;
mod config;
mod export;
mod tools;

#[cfg(test)]
mod testutil;

use parking_lot::Mutex;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_data = app
                .path()
                .app_data_dir()
                .expect("Failed to get app data dir");
            std::fs::create_dir_all(&app_data).ok();

            // App config
            let app_config = config::AppConfig::load(&app_data);
            let config_state = Arc::new(Mutex::new(app_config));
            app.manage(config_state);

            // Last generated image, kept for download
            let image_state: tools::image::ImageState =
                Arc::new(Mutex::new(tools::image::ImageStore::default()));
            app.manage(image_state);

            log::info!("AI Workbench initialized");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Config
            config::get_config,
            config::update_config,
            config::get_available_models,
            // Essay generation
            tools::essay::generate_essay,
            tools::essay::export_essay,
            // Image generation
            tools::image::generate_image,
            tools::image::download_image,
            // ChatBot
            tools::chat::send_chat_message,
            // Audio transcription
            tools::transcribe::transcribe_audio,
            // Text summarization
            tools::summary::summarize_text,
        ])
        .run(tauri::generate_context!())
        .expect("error while running AI Workbench");
}
