//! Loading a definition from a local path or a remote URL.

use std::path::Path;

use bump_api::{Client, Error, TransportKind};
use url::Url;

/// Returns the raw contents of `source`, fetched over HTTP(S) when it is a
/// URL and read from disk otherwise.
pub async fn load(source: &str, client: &Client) -> Result<String, Error> {
    match remote_url(source) {
        Some(url) => {
            tracing::debug!("Downloading definition from {}", url);
            client.download(&url).await
        }
        None => read_file(Path::new(source)),
    }
}

fn remote_url(source: &str) -> Option<Url> {
    let url = Url::parse(source).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::transport(TransportKind::Io, format!("{} ({})", e, path.display()))
    })
}
