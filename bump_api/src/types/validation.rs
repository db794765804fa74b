//! Body of a 422 response for a rejected definition.

use serde::{Deserialize, Serialize};

/// `{"errors": {"raw_definition": ["..."]}}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrorBody {
    pub errors: DefinitionErrors,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DefinitionErrors {
    /// Messages about the submitted definition, in server order.
    pub raw_definition: Vec<String>,
}
