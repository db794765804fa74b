//! Error types for the API client.

use std::fmt;

/// Class of a transport-level failure, independent of the HTTP library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    /// The request could not be built (bad URL, bad header value).
    Builder,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    Timeout,
    Redirect,
    /// Any other failure while sending the request.
    Request,
    /// The response body could not be read.
    Body,
    /// Local I/O failure, e.g. reading a definition file.
    Io,
    /// A plain download returned a non-success status.
    Http,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Builder => "BuilderError",
            Self::Connect => "ConnectionError",
            Self::Timeout => "TimeoutError",
            Self::Redirect => "RedirectError",
            Self::Request => "RequestError",
            Self::Body => "BodyError",
            Self::Io => "IoError",
            Self::Http => "HttpError",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&reqwest::Error> for TransportKind {
    fn from(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Builder
        } else if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else if err.is_redirect() {
            Self::Redirect
        } else if err.is_body() || err.is_decode() {
            Self::Body
        } else if err.is_status() {
            Self::Http
        } else {
            Self::Request
        }
    }
}

/// Every way a single API call can fail.
///
/// The `Display` output of each variant is the exact message shown to the
/// user before the process exits.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP 422 with a structured `errors.raw_definition` list.
    #[error("Definition is not valid:{}", render_messages(.0))]
    InvalidDefinition(Vec<String>),
    /// HTTP 422 whose body did not have the expected shape. Carries the raw body.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid authentication string (status: 401)")]
    Unauthorized,
    /// Any other non-success status.
    #[error("Unknown error (status: {0})")]
    UnknownStatus(u16),
    /// The request never produced a response.
    #[error("{kind}: {message}")]
    Transport { kind: TransportKind, message: String },
    /// A success body that does not decode into the expected payload.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    pub fn transport(kind: TransportKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(TransportKind::from(&err), describe(&err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::transport(TransportKind::Io, err.to_string())
    }
}

fn render_messages(messages: &[String]) -> String {
    messages.iter().map(|m| format!("\n> {}", m)).collect()
}

/// Flattens an error and its sources into one line. reqwest keeps the
/// interesting part ("Connection refused") in the source chain.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
