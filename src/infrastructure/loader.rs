use std::fs;
use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::domain::error::{AppError, Result};
use crate::domain::pitch::PitchConfig;

/// Where the configuration document lives. Anything that does not look like
/// an http(s) URL is treated as a filesystem path.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Path(PathBuf),
    Url(Url),
}

impl ConfigSource {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            let url = Url::parse(raw)
                .map_err(|e| AppError::FetchError(format!("invalid config URL {}: {}", raw, e)))?;
            Ok(ConfigSource::Url(url))
        } else {
            Ok(ConfigSource::Path(PathBuf::from(raw)))
        }
    }
}

/// Retrieves and parses the configuration document. This is the only
/// suspension point in the program; everything after it runs synchronously.
/// Retrieval and parse failures surface as one error class with no retry.
pub async fn load(source: &ConfigSource) -> Result<PitchConfig> {
    match source {
        ConfigSource::Path(path) => {
            info!(path = %path.display(), "Loading pitch config");
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        ConfigSource::Url(url) => {
            info!(url = %url, "Fetching pitch config");
            let config = reqwest::get(url.clone())
                .await?
                .error_for_status()?
                .json::<PitchConfig>()
                .await?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_parse() {
        assert!(matches!(
            ConfigSource::parse("https://example.com/pitch.json").unwrap(),
            ConfigSource::Url(_)
        ));
        assert!(matches!(
            ConfigSource::parse("content/pitch.json").unwrap(),
            ConfigSource::Path(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = ConfigSource::Path(PathBuf::from("/nonexistent/pitch.json"));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[tokio::test]
    async fn test_malformed_document_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ this is not json").unwrap();
        let source = ConfigSource::Path(file.path().to_path_buf());
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_missing_top_level_structure_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"company": {"name": "Acme"}}"#).unwrap();
        let source = ConfigSource::Path(file.path().to_path_buf());
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }
}
