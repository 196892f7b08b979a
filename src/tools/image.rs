use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use parking_lot::Mutex;
use std::sync::Arc;
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::ai::{self, images, GeneratedImage};
use crate::config::AppConfig;
use crate::export;

type ConfigState = Arc<Mutex<AppConfig>>;

/// Raw bytes of the most recent synthesis, kept so Download can write the
/// exact payload that was displayed.
#[derive(Default)]
pub struct ImageStore {
    pub last_image: Option<Vec<u8>>,
}

pub type ImageState = Arc<Mutex<ImageStore>>;

pub async fn image_for_description(
    config: &AppConfig,
    description: &str,
) -> Result<(Vec<u8>, GeneratedImage), String> {
    let description = ai::non_empty(description, "Please enter a description for the image.")?;
    let bytes = images::generate(config, description).await?;

    // Decode once to reject broken payloads and probe the dimensions.
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("Generated image could not be decoded: {}", e))?;

    let preview = GeneratedImage {
        base64: BASE64.encode(&bytes),
        width: decoded.width(),
        height: decoded.height(),
        model: config.image_model.clone(),
    };
    Ok((bytes, preview))
}

#[tauri::command]
pub async fn generate_image(
    config: tauri::State<'_, ConfigState>,
    store: tauri::State<'_, ImageState>,
    description: String,
) -> Result<GeneratedImage, String> {
    let cfg = config.lock().clone();
    let (bytes, preview) = image_for_description(&cfg, &description).await?;
    store.lock().last_image = Some(bytes);
    Ok(preview)
}

/// The no-image check runs before the save dialog opens; a cancelled dialog
/// resolves to `Ok(None)`.
#[tauri::command]
pub async fn download_image(
    app: AppHandle,
    store: tauri::State<'_, ImageState>,
) -> Result<Option<String>, String> {
    let bytes = store
        .lock()
        .last_image
        .clone()
        .ok_or_else(|| "No image available to download.".to_string())?;

    let picked = app
        .dialog()
        .file()
        .add_filter("PNG Image", &["png"])
        .set_file_name("image.png")
        .blocking_save_file();

    let Some(file) = picked else {
        return Ok(None);
    };
    let path = match file {
        FilePath::Path(path) => path,
        FilePath::Url(url) => return Err(format!("Unsupported save location: {}", url)),
    };

    export::write_image(&path, &bytes)?;
    log::info!("Image saved to {}", path.display());
    Ok(Some(path.display().to_string()))
}
