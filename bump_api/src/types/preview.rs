use serde::{Deserialize, Serialize};

/// A temporary hosted rendering of a definition, returned by `POST /previews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: String,
    /// Expiry timestamp, kept exactly as the server formats it.
    pub expires_at: String,
}
