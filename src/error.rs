use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Failed to read input file {path}: {detail}")]
    InputLoadError { path: String, detail: String },

    #[error("Failed to parse Swagger {format}: {detail}")]
    ParseError { format: &'static str, detail: String },

    #[error("Invalid naming pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;
