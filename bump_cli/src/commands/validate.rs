//! The `validate` subcommand: check a definition against a documentation's schema.

use bump_api::types::DefinitionRequest;
use bump_api::{Client, Error};
use clap::Args;

use crate::input;
use crate::output::VALID_DEFINITION;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path or URL to your API documentation file
    pub file: String,

    /// Documentation id, from the documentation settings page
    #[arg(long, env = "BUMP_ID")]
    pub id: String,

    /// Documentation private token
    #[arg(long, env = "BUMP_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Specification of the definition (e.g. openapi/v2/yaml, api-blueprint/v1a9)
    #[arg(long)]
    pub specification: Option<String>,
}

pub async fn run(args: &ValidateArgs, client: &Client) -> Result<(), Error> {
    let definition = input::load(&args.file, client).await?;
    let body =
        DefinitionRequest::new(definition).with_specification(args.specification.as_deref());

    client.validate(&args.id, &args.token, &body).await?;
    println!("{}", VALID_DEFINITION);
    Ok(())
}
