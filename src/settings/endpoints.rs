//! Endpoint configuration for the ExtractGen service.
//!
//! The two base addresses are an explicit structure handed to the state
//! store at construction, never looked up ad hoc. They come from a simple
//! `key=value` file in the config directory, with environment variables and
//! CLI flags taking precedence.

use crate::utils::get_config_dir;
use color_eyre::{eyre, eyre::eyre, Report};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use url::Url;

pub const ENDPOINTS_FILE: &str = "endpoints";

const UPLOAD_URL_ENV: &str = "EXTRACTGEN_UPLOAD_URL";
const DOWNLOAD_URL_ENV: &str = "EXTRACTGEN_DOWNLOAD_URL";

/// Where files are PUT and where the result list is fetched from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Base address; files go to `{upload_base_url}/upload/{filename}`
    pub upload_base_url: String,
    /// Fixed address answering with the JSON list of result URLs
    pub download_url: String,
}

impl Endpoints {
    pub fn new(upload_base_url: String, download_url: String) -> eyre::Result<Self> {
        let endpoints = Endpoints {
            upload_base_url,
            download_url,
        };
        endpoints.validate()?;
        Ok(endpoints)
    }

    fn validate(&self) -> eyre::Result<()> {
        for (label, value) in [
            ("upload_base_url", &self.upload_base_url),
            ("download_url", &self.download_url),
        ] {
            if value.is_empty() {
                return Err(eyre!("missing {} in endpoint configuration", label));
            }
            Url::parse(value).map_err(|e| eyre!("{} is not a valid URL ({}): {}", label, value, e))?;
        }
        Ok(())
    }

    fn try_parse_file(path: &Path) -> eyre::Result<Self> {
        let file = fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut upload_base_url = String::new();
        let mut download_url = String::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(stripped) = line.strip_prefix("upload_base_url=") {
                upload_base_url = stripped.trim().to_string()
            } else if let Some(stripped) = line.strip_prefix("download_url=") {
                download_url = stripped.trim().to_string()
            }
        }

        Endpoints::new(upload_base_url, download_url)
    }
}

/// Resolves the endpoint configuration with the precedence
/// CLI flags > environment > endpoints file.
pub fn load_endpoints(
    endpoints_file: Option<PathBuf>,
    upload_override: Option<String>,
    download_override: Option<String>,
) -> eyre::Result<Endpoints> {
    let upload = upload_override.or_else(|| std::env::var(UPLOAD_URL_ENV).ok());
    let download = download_override.or_else(|| std::env::var(DOWNLOAD_URL_ENV).ok());

    match (upload, download) {
        (Some(upload), Some(download)) => Endpoints::new(upload, download),
        (upload, download) => {
            let path = endpoints_file.unwrap_or_else(|| get_config_dir().join(ENDPOINTS_FILE));
            let mut from_file = load_endpoints_from_file(path.as_path())?;
            if let Some(upload) = upload {
                from_file.upload_base_url = upload;
            }
            if let Some(download) = download {
                from_file.download_url = download;
            }
            from_file.validate()?;
            Ok(from_file)
        }
    }
}

pub fn load_endpoints_from_file(path: &Path) -> eyre::Result<Endpoints> {
    if !path.is_file() {
        return Err(Report::msg(format!(
            "Missing endpoints file at {:?}, add upload_base_url/download_url entries",
            path
        )));
    }
    Endpoints::try_parse_file(path)
}

/// Path the user should put the endpoints file at, for error messages
pub fn endpoints_file_path() -> PathBuf {
    get_config_dir().join(ENDPOINTS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_endpoints_file(dir: &Path, contents: &str) -> PathBuf {
        let file_path = dir.join(ENDPOINTS_FILE);
        let mut file = fs::File::create(&file_path).unwrap();
        write!(file, "{}", contents).unwrap();
        file_path
    }

    #[test]
    fn test_parse_endpoints_file() {
        let dir = tempdir().unwrap();
        let path = write_endpoints_file(
            dir.path(),
            "upload_base_url=https://api.example.com\ndownload_url=https://api.example.com/results\n",
        );

        let endpoints = load_endpoints_from_file(&path).unwrap();
        assert_eq!(endpoints.upload_base_url, "https://api.example.com");
        assert_eq!(endpoints.download_url, "https://api.example.com/results");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ENDPOINTS_FILE);
        let err = load_endpoints_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Missing endpoints file"));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_endpoints_file(dir.path(), "upload_base_url=https://api.example.com\n");
        let err = load_endpoints_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("download_url"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = Endpoints::new("not a url".into(), "https://api.example.com".into()).unwrap_err();
        assert!(err.to_string().contains("upload_base_url"));
    }

    #[test]
    fn test_explicit_overrides_skip_the_file() {
        let endpoints = load_endpoints(
            None,
            Some("https://upload.example.com".into()),
            Some("https://download.example.com".into()),
        )
        .unwrap();
        assert_eq!(endpoints.upload_base_url, "https://upload.example.com");
        assert_eq!(endpoints.download_url, "https://download.example.com");
    }

    #[test]
    fn test_partial_override_merges_with_file() {
        let dir = tempdir().unwrap();
        let path = write_endpoints_file(
            dir.path(),
            "upload_base_url=https://api.example.com\ndownload_url=https://api.example.com/results\n",
        );
        let endpoints = load_endpoints(
            Some(path),
            Some("https://upload.example.com".into()),
            None,
        )
        .unwrap();
        assert_eq!(endpoints.upload_base_url, "https://upload.example.com");
        assert_eq!(endpoints.download_url, "https://api.example.com/results");
    }
}
