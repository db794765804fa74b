mod client;
mod config;
mod errors;
mod request;
pub mod types;
pub use self::client::{classify, Client, Response};
pub use self::config::{default_user_agent, ClientConfig, DEFAULT_API_URL, DEFAULT_ROOT_URL};
pub use self::errors::{Error, TransportKind};
pub use self::request::{basic_credential, Request};
