use std::path::Path;

/// Markdown document with a heading line and the body as one block,
/// mirroring the heading + paragraph shape of the in-app display.
pub fn write_document(path: &Path, heading: &str, body: &str) -> Result<(), String> {
    let contents = format!("# {}\n\n{}\n", heading, body);
    std::fs::write(path, contents).map_err(|e| format!("Failed to save document: {}", e))
}

/// Raw bytes, written unmodified.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), String> {
    std::fs::write(path, bytes).map_err(|e| format!("Failed to save image: {}", e))
}
