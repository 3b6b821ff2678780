//! Render Backend: turns a document tree into document bytes.
//!
//! The tree is the whole contract: backends receive it unchanged and must
//! not consult templates or resume content.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::templates::tree::DocumentTree;

const MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("render service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("failed to encode document tree: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("render service unavailable after {retries} attempts")]
    Exhausted { retries: u32 },
}

/// Rendered output plus what a client needs to serve it.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Bytes,
    pub content_type: String,
    /// File extension without the dot, e.g. `pdf`.
    pub extension: String,
}

#[async_trait]
pub trait RenderBackend: Send + Sync {
    async fn render(&self, tree: &DocumentTree) -> Result<RenderedDocument, RenderError>;

    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// JSON tree backend
// ────────────────────────────────────────────────────────────────────────────

/// Emits the tree itself as JSON. Used when no render service is configured.
pub struct JsonTreeBackend;

#[async_trait]
impl RenderBackend for JsonTreeBackend {
    async fn render(&self, tree: &DocumentTree) -> Result<RenderedDocument, RenderError> {
        let bytes = serde_json::to_vec_pretty(tree)?;
        Ok(RenderedDocument {
            bytes: Bytes::from(bytes),
            content_type: "application/json".to_string(),
            extension: "json".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "json-tree"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP render service backend
// ────────────────────────────────────────────────────────────────────────────

/// Posts the tree to an external layout engine and returns its response body.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct HttpRenderBackend {
    client: Client,
    url: String,
    backoff: Duration,
}

impl HttpRenderBackend {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RenderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
            backoff: DEFAULT_BACKOFF,
        })
    }

    #[cfg(test)]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

#[async_trait]
impl RenderBackend for HttpRenderBackend {
    async fn render(&self, tree: &DocumentTree) -> Result<RenderedDocument, RenderError> {
        let mut last_error: Option<RenderError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.backoff * (1 << (attempt - 1));
                warn!(
                    "render attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.url).json(tree).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RenderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("render service returned {}: {}", status, body);
                last_error = Some(RenderError::Service {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(RenderError::Service {
                    status: status.as_u16(),
                    message,
                });
            }

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/pdf")
                .to_string();
            let bytes = response.bytes().await?;

            debug!(
                "render succeeded: template={} bytes={} content_type={}",
                tree.template,
                bytes.len(),
                content_type
            );

            return Ok(RenderedDocument {
                extension: extension_for(&content_type).to_string(),
                content_type,
                bytes,
            });
        }

        Err(last_error.unwrap_or(RenderError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

fn extension_for(content_type: &str) -> &'static str {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    match essence {
        "application/pdf" => "pdf",
        "application/json" => "json",
        "text/html" => "html",
        "image/png" => "png",
        _ => "bin",
    }
}
