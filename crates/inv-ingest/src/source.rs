//! Document sources and the transport step in front of the tokenizer.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info, info_span, warn};

use crate::builder::{LoadOutcome, load_document};
use crate::error::{IngestError, Result};

/// Location the inventory is read from when none is configured.
pub const DEFAULT_DOCUMENT_PATH: &str = "Data/master_inventory.csv";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the inventory document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    /// `http://` or `https://` URL fetched with a blocking GET.
    Url(String),
}

impl DocumentSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl Default for DocumentSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DOCUMENT_PATH))
    }
}

impl FromStr for DocumentSource {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Reads the complete document text from `source`.
///
/// This is the only fallible step of loading; everything after it is total.
pub fn fetch_document(source: &DocumentSource) -> Result<String> {
    match source {
        DocumentSource::File(path) => read_file(path),
        DocumentSource::Url(url) => fetch_url(url),
    }
}

/// Fetches, tokenizes, and builds the inventory at `source`.
pub fn load_from_source(source: &DocumentSource) -> Result<LoadOutcome> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let text = fetch_document(source).inspect_err(|error| {
        warn!(error = %error, network = error.is_network(), "failed to fetch inventory document");
    })?;
    let outcome = load_document(&text);
    match &outcome {
        LoadOutcome::Loaded(inventory) => info!(
            records = inventory.len(),
            kits = inventory.kits.len(),
            bytes = text.len(),
            duration_ms = start.elapsed().as_millis(),
            "inventory loaded"
        ),
        LoadOutcome::Empty => info!(bytes = text.len(), "inventory document has no data"),
    }
    Ok(outcome)
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read inventory file");
    decode_utf8(bytes, || path.display().to_string())
}

fn fetch_url(url: &str) -> Result<String> {
    let network = |message: String| IngestError::Network {
        url: url.to_string(),
        message,
    };
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| network(e.to_string()))?;

    debug!(url, "fetching inventory document");
    let response = client
        .get(url)
        .header(
            USER_AGENT,
            format!("inventory-browser/{}", env!("CARGO_PKG_VERSION")),
        )
        .header(ACCEPT, "text/csv, text/plain;q=0.9, */*;q=0.5")
        .send()
        .map_err(|e| network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes().map_err(|e| network(e.to_string()))?;
    decode_utf8(bytes.to_vec(), || url.to_string())
}

fn decode_utf8(bytes: Vec<u8>, location: impl FnOnce() -> String) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| IngestError::InvalidEncoding {
        location: location(),
        offset: e.utf8_error().valid_up_to(),
    })
}
