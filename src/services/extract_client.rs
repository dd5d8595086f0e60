//! HTTP client for the two ExtractGen endpoints.
//!
//! Uploads are plain `PUT {upload_base}/upload/{filename}` requests carrying
//! the raw file bytes; results come from a single parameterless GET that
//! answers with a JSON array of URLs (or a plain message).

use color_eyre::eyre::{self, eyre};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::model::results::{DownloadError, ResultsPayload};
use crate::settings::endpoints::Endpoints;

/// Characters escaped when a filename becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// The service declares PDF for every upload, whatever the file contains
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Optional body of a successful upload response
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExtractClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ExtractClient {
    pub fn new(endpoints: Endpoints) -> Self {
        ExtractClient {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Builds `{upload_base}/upload/{filename}` with the filename
    /// percent-encoded as a single path segment, so names containing
    /// path-altering characters cannot change the request target.
    fn upload_url(&self, file_name: &str) -> String {
        let base = self.endpoints.upload_base_url.trim_end_matches('/');
        format!(
            "{}/upload/{}",
            base,
            utf8_percent_encode(file_name, PATH_SEGMENT)
        )
    }

    /// PUTs the raw file bytes and returns the optional result URL from the
    /// response body. A success without a parsable `url` field is still a
    /// success, just without a URL.
    pub async fn upload_file(&self, path: &str, file_name: &str) -> eyre::Result<Option<String>> {
        let body = tokio::fs::read(path).await?;
        let url = self.upload_url(file_name);
        tracing::info!("uploading {} ({} bytes) to {}", file_name, body.len(), url);
        let response = self
            .http
            .put(&url)
            .header(CONTENT_TYPE, PDF_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(eyre!("upload failed, status: {}", status.as_u16()));
        }
        let parsed = response
            .json::<UploadResponse>()
            .await
            .unwrap_or(UploadResponse { url: None });
        Ok(parsed.url)
    }

    /// Fetches the result list. No parameters: the server alone decides
    /// which results to return.
    pub async fn fetch_results(&self) -> Result<ResultsPayload, DownloadError> {
        let response = self
            .http
            .get(&self.endpoints.download_url)
            .send()
            .await
            .map_err(|e| DownloadError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Http(status.as_u16()));
        }
        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| DownloadError::Parse(e.to_string()))?;
        Ok(ResultsPayload::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ExtractClient {
        ExtractClient::new(Endpoints {
            upload_base_url: base.to_string(),
            download_url: format!("{}/results", base),
        })
    }

    #[test]
    fn upload_url_joins_base_and_filename() {
        let client = client("https://api.example.com");
        assert_eq!(
            client.upload_url("report.pdf"),
            "https://api.example.com/upload/report.pdf"
        );
    }

    #[test]
    fn upload_url_tolerates_trailing_slash_on_base() {
        let client = client("https://api.example.com/");
        assert_eq!(
            client.upload_url("report.pdf"),
            "https://api.example.com/upload/report.pdf"
        );
    }

    #[test]
    fn upload_url_encodes_path_altering_characters() {
        let client = client("https://api.example.com");
        assert_eq!(
            client.upload_url("../etc/passwd"),
            "https://api.example.com/upload/..%2Fetc%2Fpasswd"
        );
        assert_eq!(
            client.upload_url("my report.pdf"),
            "https://api.example.com/upload/my%20report.pdf"
        );
        assert_eq!(
            client.upload_url("a?b#c.pdf"),
            "https://api.example.com/upload/a%3Fb%23c.pdf"
        );
    }
}
