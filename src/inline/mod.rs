//! SVG image inlining pipeline.
//!
//! Rewrites an SVG document so every image reference pointing at an absolute
//! HTTP(S) URL is replaced by a `data:` URI holding the fetched payload.
//! Fetches run strictly one after another in document order. A failed fetch
//! never aborts the run: the offending element is left untouched and the
//! remaining images are still processed.


mod document;

pub use document::SvgDocument;

use base64::Engine;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

/// MIME type used when the image response carries no usable `content-type`.
const DEFAULT_IMAGE_MIME: &str = "image/png";

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by the inlining pipeline. The fetch variants are handled
/// inside [`ImageInliner::inline_images`] and never escape it; the rest are
/// fatal for the whole document.
#[derive(Debug, thiserror::Error)]
pub enum InlineError {
    /// The SVG markup is not well-formed XML.
    #[error("svg parse failed: {0}")]
    Parse(String),

    /// The rewritten document could not be serialized back to markup.
    #[error("svg serialize failed: {0}")]
    Serialize(String),

    /// The underlying HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    /// An image fetch failed at the transport level.
    #[error("image fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An image host returned a non-success HTTP status.
    #[error("image fetch returned {status} for {url}")]
    FetchStatus { status: u16, url: String },
}

// =============================================================================
// FETCHED IMAGE
// =============================================================================

/// A fetched image payload ready for embedding.
pub struct InlinedImage {
    /// MIME type from the response, or [`DEFAULT_IMAGE_MIME`].
    pub mime: String,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl InlinedImage {
    /// Render as `data:<mime>;base64,<payload>`.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        let encoded_len = base64::encoded_len(self.bytes.len(), true).unwrap_or(0);
        let mut uri = String::with_capacity("data:;base64,".len() + self.mime.len() + encoded_len);
        uri.push_str("data:");
        uri.push_str(&self.mime);
        uri.push_str(";base64,");
        base64::engine::general_purpose::STANDARD.encode_string(&self.bytes, &mut uri);
        uri
    }
}

// =============================================================================
// INLINER
// =============================================================================

/// Fetches external image references and embeds them as `data:` URIs.
/// Constructed once per invocation and reused across per-frame exports.
pub struct ImageInliner {
    http: reqwest::Client,
}

impl ImageInliner {
    /// Build an inliner. The token, when present, is sent as a
    /// `Cookie: token=<value>` header on every image fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be constructed.
    pub fn new(token: Option<&str>) -> Result<Self, InlineError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(&format!("token={token}"))
                    .map_err(|e| InlineError::ClientBuild(e.to_string()))?,
            );
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| InlineError::ClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    /// Inline every qualifying image reference in `markup` and return the
    /// rewritten document. References that do not start with `http` are left
    /// untouched, as is any element whose fetch fails.
    ///
    /// # Errors
    ///
    /// Returns an error only when the markup cannot be parsed or the
    /// rewritten document cannot be serialized. Per-image fetch failures are
    /// logged and recovered.
    pub async fn inline_images(&self, markup: &str) -> Result<String, InlineError> {
        let mut document = SvgDocument::parse(markup)?;
        let positions = document.image_positions();
        let total = positions.len();

        for (index, position) in positions.into_iter().enumerate() {
            let Some(href) = document.image_href(position) else {
                debug!(position, "image element has no href; skipping");
                continue;
            };
            if !href.starts_with("http") {
                debug!(url = %href, "image href is not an absolute http url; skipping");
                continue;
            }

            match self.fetch_image(&href).await {
                Ok(image) => {
                    document.set_image_href(position, &image.to_data_uri());
                    info!("Converted image {}/{}", index + 1, total);
                }
                Err(e) => {
                    warn!(error = %e, url = %href, position, "image fetch failed; reference left untouched");
                }
            }
        }

        document.to_markup()
    }

    async fn fetch_image(&self, url: &str) -> Result<InlinedImage, InlineError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InlineError::FetchStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let header = response
            .headers()
            .get(CONTENT_TYPE)
            .map_or("", |value| value.to_str().unwrap_or(""));
        let mime = if header.is_empty() {
            DEFAULT_IMAGE_MIME.to_owned()
        } else {
            header.to_owned()
        };

        let bytes = response.bytes().await?;
        Ok(InlinedImage {
            mime,
            bytes: bytes.to_vec(),
        })
    }
}

/// One-shot convenience over [`ImageInliner`]: build a client for the given
/// credential and inline a single document.
///
/// # Errors
///
/// Same conditions as [`ImageInliner::new`] and
/// [`ImageInliner::inline_images`].
pub async fn inline_images(markup: &str, token: Option<&str>) -> Result<String, InlineError> {
    ImageInliner::new(token)?.inline_images(markup).await
}
