use thiserror::Error;

/// Errors returned by sketch commands
#[derive(Error, Debug)]
pub enum SketchError {
    /// Tools can only be switched between gestures
    #[error("Tool busy: cannot switch to {requested} while a stroke is in progress")]
    ToolBusy { requested: String },
    #[error("Custom sticker text is empty")]
    EmptyGlyph,
    #[error("Invalid stroke width {0}")]
    InvalidStrokeWidth(f32),
    #[error("Unknown tool {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors that can occur while rendering or writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid export scale {0}")]
    InvalidScale(f32),
    #[error("Export surface too large: {width}x{height}")]
    SurfaceTooLarge { width: u32, height: u32 },
    #[error("Failed to encode export: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config data: {0}")]
    Parse(#[from] serde_json::Error),
}
