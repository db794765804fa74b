mod definition;
pub use self::definition::DefinitionRequest;

mod preview;
pub use self::preview::Preview;

mod validation;
pub use self::validation::{DefinitionErrors, ValidationErrorBody};
