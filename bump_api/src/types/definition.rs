//! Request body shared by the validation and preview endpoints.

use serde::{Deserialize, Serialize};

/// A definition file and, optionally, the specification it follows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRequest {
    /// Raw file contents, sent as-is.
    pub definition: String,

    /// Specification identifier such as `openapi/v2/yaml` or
    /// `api-blueprint/v1a9`. Left out of the JSON when unset so the server
    /// can detect it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
}

impl DefinitionRequest {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            specification: None,
        }
    }

    pub fn with_specification(mut self, specification: Option<&str>) -> Self {
        self.specification = specification.map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specification_is_omitted_when_unset() {
        let json = serde_json::to_value(DefinitionRequest::new("body")).unwrap();
        assert_eq!(json, serde_json::json!({ "definition": "body" }));
    }

    #[test]
    fn specification_is_sent_when_set() {
        let req = DefinitionRequest::new("body").with_specification(Some("api-blueprint/v1a9"));
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "definition": "body",
                "specification": "api-blueprint/v1a9"
            })
        );
    }
}
