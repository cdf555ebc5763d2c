use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Stylesheet not found: {0}")]
    StylesheetNotFound(PathBuf),

    #[error("Invalid image source: {0}")]
    InvalidImageSource(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
