//! The `preview` subcommand: publish a temporary rendering of a definition.

use bump_api::types::DefinitionRequest;
use bump_api::{Client, Error};
use clap::Args;

use crate::input;
use crate::output::preview_created;

#[derive(Args)]
pub struct PreviewArgs {
    /// Path or URL to your API documentation file
    pub file: String,

    /// Specification of the definition (e.g. openapi/v2/yaml, api-blueprint/v1a9)
    #[arg(long)]
    pub specification: Option<String>,
}

pub async fn run(args: &PreviewArgs, client: &Client) -> Result<(), Error> {
    let definition = input::load(&args.file, client).await?;
    let body =
        DefinitionRequest::new(definition).with_specification(args.specification.as_deref());

    let preview = client.preview(&body).await?;
    println!("{}", preview_created(&client.preview_url(&preview), &preview));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bump_api::ClientConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn creates_preview_from_remote_file() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files/openapi.yml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("swagger: '2.0'"))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/previews"))
            .and(body_json(serde_json::json!({
                "definition": "swagger: '2.0'",
                "specification": "openapi/v2/yaml"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(
                r#"{"id":"a1b2c3","expires_at":"2018-04-20T15:30:00.000Z"}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default()
            .with_api_url(&mock_server.uri())
            .with_root_url("https://bump.example");
        let client = Client::new(config).unwrap();
        let args = PreviewArgs {
            file: format!("{}/files/openapi.yml", mock_server.uri()),
            specification: Some("openapi/v2/yaml".to_string()),
        };
        assert!(run(&args, &client).await.is_ok());
    }

    #[tokio::test]
    async fn validation_errors_are_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("swagger: 2"))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/previews"))
            .respond_with(ResponseTemplate::new(422).set_body_string(
                r#"{"errors":{"raw_definition":["This is an error"]}}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = Client::with_base_url(&mock_server.uri()).unwrap();
        let args = PreviewArgs {
            file: format!("{}/openapi.yml", mock_server.uri()),
            specification: None,
        };
        let err = run(&args, &client).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Definition is not valid:\n> This is an error"
        );
    }
}
