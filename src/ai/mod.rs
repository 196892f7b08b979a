pub mod images;
pub mod openai;
pub mod stt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
    pub model: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub base64: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
}

/// Trimmed non-empty payload guard. Every tool runs its input through this
/// before anything touches the network.
pub fn non_empty<'a>(value: &'a str, message: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(message.to_string());
    }
    Ok(trimmed)
}
