//! Tracing initialisation and log redaction.

use crate::config::LogFormat;
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

/// Query parameters whose values never reach the logs
static SECRET_PARAMS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(appid|api_?key|token)=[^&\s)]*").ok());

/// Initialise the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG` and default to `info`.
pub fn init_tracing(format: LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
}

/// Replace credential values in URLs and error messages with `[REDACTED]`
pub fn redact_secrets(input: &str) -> String {
    match SECRET_PARAMS.as_ref() {
        Some(re) => re.replace_all(input, "$1=[REDACTED]").into_owned(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_appid() {
        let url = "https://api.openweathermap.org/data/2.5/weather?q=Jakarta&appid=f23867e1&units=metric";
        let redacted = redact_secrets(url);

        assert!(!redacted.contains("f23867e1"));
        assert!(redacted.contains("appid=[REDACTED]&units=metric"));
        assert!(redacted.contains("q=Jakarta"));
    }

    #[test]
    fn test_redacts_inside_error_messages() {
        let message = "error sending request for url (http://host/forecast?appid=abc123)";
        assert_eq!(
            redact_secrets(message),
            "error sending request for url (http://host/forecast?appid=[REDACTED])"
        );
    }

    #[test]
    fn test_leaves_plain_text_alone() {
        assert_eq!(redact_secrets("city=Bandung"), "city=Bandung");
    }
}
