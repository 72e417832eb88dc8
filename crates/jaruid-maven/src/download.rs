//! Artifact downloading: a shared client plus retry/backoff.

use std::time::Duration;

use reqwest::Client;

use jaruid_util::errors::JarUidError;

use crate::auth;
use crate::repository::MavenRepository;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Build a shared reqwest client for Maven downloads.
pub fn build_client(timeout_secs: u64) -> Result<Client, JarUidError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent("jaruid/0.1")
        .build()
        .map_err(|e| JarUidError::Network {
            message: format!("failed to create HTTP client: {e}"),
        })
}

/// Download raw bytes from a URL. Returns `Ok(None)` for a 404 (artifact
/// absent at this repo, not a fault); retries transient network/server
/// errors up to [`MAX_RETRIES`] with linear backoff.
pub async fn download_bytes(
    client: &Client,
    repo: &MavenRepository,
    url: &str,
) -> Result<Option<Vec<u8>>, JarUidError> {
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        let mut req = client.get(url);
        req = auth::apply_auth(req, repo);

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(JarUidError::Network {
                        message: format!("HTTP {status} fetching {url}"),
                    });
                }
                let bytes = resp.bytes().await.map_err(|e| JarUidError::Network {
                    message: format!("failed to read response from {url}: {e}"),
                })?;
                return Ok(Some(bytes.to_vec()));
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(JarUidError::Network {
                    message: format!("request to {url} failed: {e}"),
                });
            }
        }
    }

    Err(JarUidError::Network {
        message: format!("failed after {MAX_RETRIES} retries for {url}: {last_err}"),
    })
}

/// Download a text document (maven-metadata.xml, settings.xml mirrors).
pub async fn download_text(
    client: &Client,
    repo: &MavenRepository,
    url: &str,
) -> Result<Option<String>, JarUidError> {
    match download_bytes(client, repo, url).await? {
        Some(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).to_string())),
        None => Ok(None),
    }
}
