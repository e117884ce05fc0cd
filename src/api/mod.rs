//! Board service HTTP client.
//!
//! Thin wrapper over `reqwest` for the two read endpoints this tool uses:
//! the object query (`/objects`) and the SVG render (`/svg`). The optional
//! credential is attached as a `token` cookie on every request. Response
//! parsing is a pure function for testability.


mod types;

pub use types::{BoardObject, TYPE_FRAME, TYPE_GROUP};

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by board service requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    /// The credential could not be encoded as a cookie header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The HTTP request failed at the transport level.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The board service returned a non-success HTTP status.
    #[error("board service returned {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body could not be deserialized.
    #[error("board response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// OBJECT QUERY FILTER
// =============================================================================

/// Query filter for the object endpoint.
#[derive(Debug, Clone, Default)]
pub struct ObjectFilter {
    kind: Option<String>,
    ids: Option<Vec<String>>,
}

impl ObjectFilter {
    /// Every object on the board, in the service's natural order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Objects with the given type tag.
    #[must_use]
    pub fn by_type(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_owned()),
            ids: None,
        }
    }

    /// Objects with the given ids. An empty list is a valid query.
    #[must_use]
    pub fn by_ids(ids: &[String]) -> Self {
        Self {
            kind: None,
            ids: Some(ids.to_vec()),
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
    board_id: String,
}

impl BoardClient {
    /// Build a client for one board. The token, when present, is sent as a
    /// `Cookie: token=<value>` header on every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str, board_id: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(COOKIE, HeaderValue::from_str(&format!("token={token}"))?);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            board_id: board_id.to_owned(),
        })
    }

    /// Fetch board objects matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response body that does not match the expected envelope.
    pub async fn board_objects(&self, filter: &ObjectFilter) -> Result<Vec<BoardObject>, ApiError> {
        let path = format!("/api/boards/{}/objects", self.board_id);
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if let Some(kind) = &filter.kind {
            request = request.query(&[("type", kind.as_str())]);
        }
        if let Some(ids) = &filter.ids {
            request = request.query(&[("ids", ids.join(","))]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path,
            });
        }

        let text = response.text().await?;
        parse_objects(&text)
    }

    /// Fetch the board rendered as SVG markup, scoped to `frame_ids` when
    /// non-empty and to the whole board otherwise. The body is returned
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn board_svg(&self, frame_ids: &[String]) -> Result<String, ApiError> {
        let path = format!("/api/boards/{}/svg", self.board_id);
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if !frame_ids.is_empty() {
            request = request.query(&[("frames", frame_ids.join(","))]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path,
            });
        }

        Ok(response.text().await?)
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct ObjectsEnvelope {
    data: Vec<BoardObject>,
}

fn parse_objects(json: &str) -> Result<Vec<BoardObject>, ApiError> {
    let envelope: ObjectsEnvelope =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.data)
}
