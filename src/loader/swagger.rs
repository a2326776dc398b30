use crate::error::{LintError, Result};
use crate::models::Swagger;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` files are YAML; anything else is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Load a Swagger 2.0 document from a file
pub fn load_swagger<P: AsRef<Path>>(path: P) -> Result<Swagger> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| LintError::InputLoadError {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    let format = DocumentFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Decoding Swagger document");

    parse_swagger(&content, format)
}

/// Decode a Swagger 2.0 document from its textual form
pub fn parse_swagger(content: &str, format: DocumentFormat) -> Result<Swagger> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| LintError::ParseError {
            format: "JSON",
            detail: e.to_string(),
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| LintError::ParseError {
            format: "YAML",
            detail: e.to_string(),
        }),
    }
}
