//! REST API Client
//!
//! Thin HTTP bindings to the CTF backend, organized by domain.

mod auth;
mod challenge;

use gloo_net::http::{RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Characters escaped when an id is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Header carrying the bearer token
const TOKEN_HEADER: &str = "token";

/// API client - stateless apart from the token it was built with
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every authenticated request.
    /// `None` (or an empty token) leaves requests unauthenticated.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }
}

/// Join base URL and path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Percent-encode a challenge id for use as a single path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            text: response.status_text(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
