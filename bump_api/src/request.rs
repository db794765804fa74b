//! Outbound request description, built once per call.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::{Error, TransportKind};

/// `Authorization` value for a token: basic auth with the token as the
/// username and an empty password.
pub fn basic_credential(token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", token)))
}

/// A single HTTP request. Builder methods consume `self`, so a request
/// cannot change once it has been handed to [`Client::send`](crate::Client::send).
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    body: Option<String>,
    headers: HeaderMap,
    token: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            headers: HeaderMap::new(),
            token: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Sets a raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON body.
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, Error> {
        let body = serde_json::to_string(value)
            .map_err(|e| Error::transport(TransportKind::Builder, e.to_string()))?;
        Ok(self.with_body(body))
    }

    /// Adds or replaces a header. A `Content-Type` set here wins over the default.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Headers as they go on the wire, minus the `User-Agent` which the
    /// client adds.
    pub fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = self.headers.clone();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&basic_credential(token))
                .map_err(|e| Error::transport(TransportKind::Builder, e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}
