//! Endpoint and identity settings shared by every request.

use url::Url;

use crate::{Error, TransportKind};

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://bump.sh/api/v1";
/// Public site, used to build preview links.
pub const DEFAULT_ROOT_URL: &str = "https://bump.sh";

/// `User-Agent` sent with every request.
pub fn default_user_agent() -> String {
    format!("bump-cli/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for a [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for API calls. Defaults to `https://bump.sh/api/v1`.
    pub api_url: String,
    /// Base URL for human-facing links. Defaults to `https://bump.sh`.
    pub root_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            root_url: DEFAULT_ROOT_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn with_root_url(mut self, url: &str) -> Self {
        self.root_url = url.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Appends `segments` to the API base URL, one path segment each.
    ///
    /// Segment contents are percent-encoded, so `/`, `?` and `#` inside an id
    /// never change the shape of the URL. Empty, `.` and `..` segments are
    /// rejected since they cannot stand for a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            tracing::debug!("Invalid API URL: {}", e);
            Error::transport(
                TransportKind::Builder,
                format!("{} ({})", e, self.api_url),
            )
        })?;

        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(**s, "" | "." | ".."))
        {
            return Err(Error::transport(
                TransportKind::Builder,
                format!("invalid path segment {:?}", bad),
            ));
        }

        url.path_segments_mut()
            .map_err(|()| {
                Error::transport(
                    TransportKind::Builder,
                    format!("cannot be a base URL ({})", self.api_url),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Public link to a preview.
    pub fn preview_url(&self, id: &str) -> String {
        format!("{}/preview/{}", self.root_url.trim_end_matches('/'), id)
    }
}
