use std::process::ExitCode;

use bump_api::types::Preview;
use bump_api::Error;

/// Printed after a successful `validate`.
pub const VALID_DEFINITION: &str = "Definition is valid";

pub fn preview_created(url: &str, preview: &Preview) -> String {
    format!("Preview created : {} (expires at {})", url, preview.expires_at)
}

/// Prints `err` on stderr and returns the failing exit status.
pub fn report_error(err: &Error) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use bump_api::TransportKind;

    #[test]
    fn preview_line_contains_link_and_expiry() {
        let preview = Preview {
            id: "a1b2c3".to_string(),
            expires_at: "2018-04-20T15:30:00.000Z".to_string(),
        };
        assert_eq!(
            preview_created("https://bump.sh/preview/a1b2c3", &preview),
            "Preview created : https://bump.sh/preview/a1b2c3 (expires at 2018-04-20T15:30:00.000Z)"
        );
    }

    #[test]
    fn every_error_is_a_failure() {
        let errors = [
            Error::InvalidDefinition(vec!["This is an error".to_string()]),
            Error::InvalidRequest("{}".to_string()),
            Error::Unauthorized,
            Error::UnknownStatus(500),
            Error::transport(TransportKind::Connect, "Connection refused"),
            Error::UnexpectedResponse("missing field `id`".to_string()),
        ];
        for err in &errors {
            let code = report_error(err);
            assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::FAILURE));
        }
    }
}
