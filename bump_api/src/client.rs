//! HTTP client for the Bump documentation API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{DefinitionRequest, Preview, ValidationErrorBody},
    ClientConfig, Error, Request, TransportKind,
};

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body. A failure here means the server broke its contract.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str::<T>(&self.body).map_err(|e| {
            tracing::debug!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&self.body)
            );
            Error::UnexpectedResponse(e.to_string())
        })
    }
}

/// Maps a status and body to either a [`Response`] or the matching [`Error`].
///
/// A 422 body that is not `{"errors": {"raw_definition": [...]}}`, JSON or
/// not, falls back to [`Error::InvalidRequest`] carrying the raw body.
pub fn classify(status: u16, body: String) -> Result<Response, Error> {
    match status {
        200..=299 => Ok(Response { status, body }),
        401 => Err(Error::Unauthorized),
        422 => Err(invalid_definition(body)),
        _ => {
            tracing::debug!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            Err(Error::UnknownStatus(status))
        }
    }
}

fn invalid_definition(body: String) -> Error {
    match serde_json::from_str::<ValidationErrorBody>(&body) {
        Ok(parsed) => Error::InvalidDefinition(parsed.errors.raw_definition),
        Err(e) => {
            tracing::debug!("Unrecognized validation error body: {}", e);
            Error::InvalidRequest(body)
        }
    }
}

/// HTTP client for the Bump API.
///
/// One call to [`send`](Client::send) is one network round-trip: no retries,
/// no backoff.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::from(e)
            })?;
        Ok(Self { http, config })
    }

    /// Creates a client with a custom API base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::default().with_api_url(base_url))
    }

    /// Sends `request` and classifies the outcome.
    pub async fn send(&self, request: &Request) -> Result<Response, Error> {
        let headers = request.headers()?;
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.token().is_some(),
            "Sending request"
        );

        let mut builder = self
            .http
            .request(request.method().clone(), request.url().clone())
            .headers(headers);
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::debug!("Failed to send request: {}", e);
            Error::from(e)
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::debug!("Failed to read response body: {}", e);
            Error::from(e)
        })?;
        tracing::debug!(status, "Received response");

        classify(status, body)
    }

    /// Checks a definition against the documentation `doc_id`, authenticating
    /// with `token`.
    pub async fn validate(
        &self,
        doc_id: &str,
        token: &str,
        definition: &DefinitionRequest,
    ) -> Result<(), Error> {
        let url = self.config.endpoint(&["docs", doc_id, "validations"])?;
        let request = Request::post(url)
            .with_json(definition)?
            .with_token(Some(token));
        self.send(&request).await?;
        Ok(())
    }

    /// Creates a temporary preview of a definition. No authentication needed.
    pub async fn preview(&self, definition: &DefinitionRequest) -> Result<Preview, Error> {
        let url = self.config.endpoint(&["previews"])?;
        let request = Request::post(url).with_json(definition)?;
        self.send(&request).await?.json::<Preview>()
    }

    /// Public link to `preview`.
    pub fn preview_url(&self, preview: &Preview) -> String {
        self.config.preview_url(&preview.id)
    }

    /// Fetches a remote file as text with a plain GET. Unlike [`send`](Client::send),
    /// any non-success status is reported as an HTTP transport error.
    pub async fn download(&self, url: &Url) -> Result<String, Error> {
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::transport(
                TransportKind::Http,
                format!("{} ({})", status, url),
            ));
        }
        Ok(resp.text().await?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
