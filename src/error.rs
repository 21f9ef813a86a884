/// Setup-time failures. Any of these aborts startup; nothing at gesture time can fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config has no draggable items")]
    NoItems,
    #[error("correct index {index} is out of range for {len} items")]
    CorrectIndexOutOfRange { index: usize, len: usize },
    #[error("item {index} ({name:?}) has a degenerate region")]
    BadItemRegion { index: usize, name: String },
    #[error("duplicate item name {name:?}")]
    DuplicateName { name: String },
    #[error("drop target region is degenerate")]
    BadDropTarget,
    #[error("stage size {width}x{height} is not positive")]
    BadStage { width: f64, height: f64 },
    #[error("success delay {0}s must be finite and non-negative")]
    BadDelay(f64),
    #[error("fail threshold must be at least 1")]
    ZeroFailThreshold,
    #[error("config json: {0}")]
    Parse(#[from] serde_json::Error),
}
