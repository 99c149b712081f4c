use thiserror::Error;

use notifica_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid request: {0}")]
    Request(#[from] CoreError),

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] genpdf::error::Error),
}

/// Why a single image could not be used. Never fatal to the document.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unreadable image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has zero width or height")]
    Empty,
}
