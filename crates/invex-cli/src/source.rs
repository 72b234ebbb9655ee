//! Input acquisition: local files and `http(s)` URLs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use indicatif::ProgressBar;
use thiserror::Error;
use tracing::debug;

use invex_core::models::config::FetchConfig;

/// The input was rejected before any extraction took place.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input does not look like a PDF document.
    #[error("only PDF files are allowed: {0}")]
    NotPdf(String),

    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The document could not be downloaded.
    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    /// The remote document exceeds the configured size limit.
    #[error("{url} is larger than {limit} bytes")]
    TooLarge { url: String, limit: u64 },

    /// A glob pattern matched nothing.
    #[error("no matching files found for pattern: {0}")]
    NoMatches(String),
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Interpret a command line argument: `http://` and `https://` inputs are
    /// URLs, everything else is a path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Source::Url(input.to_string())
        } else {
            Source::File(PathBuf::from(input))
        }
    }

    /// Display name, used for logs and output file names.
    pub fn name(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Url(url) => url.clone(),
        }
    }

    /// Read the document bytes.
    pub async fn load(&self, fetch: &FetchConfig, pb: &ProgressBar) -> Result<Vec<u8>, InputError> {
        match self {
            Source::File(path) => read_file(path),
            Source::Url(url) => download(url, fetch, pb).await,
        }
    }
}

/// Whether `path` has a `.pdf` extension (any case).
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    if !has_pdf_extension(path) {
        return Err(InputError::NotPdf(path.display().to_string()));
    }
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    fs::read(path).map_err(|e| InputError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

async fn download(url: &str, fetch: &FetchConfig, pb: &ProgressBar) -> Result<Vec<u8>, InputError> {
    let download_err = |reason: String| InputError::Download {
        url: url.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(url).map_err(|e| download_err(e.to_string()))?;
    let url_is_pdf = parsed.path().to_ascii_lowercase().ends_with(".pdf");

    let client = reqwest::Client::builder()
        .user_agent(fetch.user_agent.as_str())
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .build()
        .map_err(|e| download_err(e.to_string()))?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| download_err(e.to_string()))?;

    if !response.status().is_success() {
        return Err(download_err(format!("HTTP {}", response.status())));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();
    debug!("{} answered with content type {:?}", url, content_type);

    if !url_is_pdf && !content_type.starts_with("application/pdf") {
        return Err(InputError::NotPdf(url.to_string()));
    }

    if let Some(content_length) = response.content_length() {
        if content_length > fetch.max_bytes {
            return Err(InputError::TooLarge {
                url: url.to_string(),
                limit: fetch.max_bytes,
            });
        }
        pb.set_length(content_length);
    }

    let mut stream = response.bytes_stream();
    let mut data = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| download_err(e.to_string()))?;
        if (data.len() + chunk.len()) as u64 > fetch.max_bytes {
            return Err(InputError::TooLarge {
                url: url.to_string(),
                limit: fetch.max_bytes,
            });
        }
        data.extend_from_slice(&chunk);
        pb.set_position(data.len() as u64);
    }

    debug!("Downloaded {} bytes from {}", data.len(), url);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            Source::parse("https://example.com/invoice.pdf"),
            Source::Url("https://example.com/invoice.pdf".to_string())
        );
        assert_eq!(
            Source::parse("invoices/march.pdf"),
            Source::File(PathBuf::from("invoices/march.pdf"))
        );
    }

    #[test]
    fn test_pdf_extension() {
        assert!(has_pdf_extension(Path::new("a/b/invoice.pdf")));
        assert!(has_pdf_extension(Path::new("INVOICE.PDF")));
        assert!(!has_pdf_extension(Path::new("invoice.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn test_read_file_rejects_extension_before_existence() {
        let err = read_file(Path::new("does-not-exist.docx")).unwrap_err();
        assert!(matches!(err, InputError::NotPdf(_)));

        let err = read_file(Path::new("does-not-exist.pdf")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
    }
}
