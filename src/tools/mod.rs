pub mod chat;
pub mod essay;
pub mod image;
pub mod summary;
pub mod transcribe;
