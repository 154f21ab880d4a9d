#![forbid(unsafe_code)]

//! Plain URLs

use super::{Site, UsageError};
use crate::command::WebCommand;

pub const DEFAULT_URL: &str = "http://eqdw.net";

/// Opens the URL it is given, or a fixed default page
#[derive(Debug, Clone)]
pub struct Web {
    default_url: String,
}

impl Web {
    /// Creates a handler that opens `default_url` when no URL is given
    pub fn new(default_url: impl Into<String>) -> Self {
        Web {
            default_url: default_url.into(),
        }
    }
}

impl Default for Web {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl Site for Web {
    fn name(&self) -> &'static str {
        "web"
    }

    fn generate_command(&self, args: &[String]) -> Result<WebCommand, UsageError> {
        match args {
            [] => Ok(WebCommand::new(self.name(), "open", self.default_url.as_str())),
            [url] => Ok(WebCommand::new(self.name(), "open", url.as_str())),
            _ => Err(UsageError::ArgumentCount {
                site: self.name(),
                action: "open",
                expected: "0 or 1",
                got: args.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let cmd = Web::default().generate_command(&[]).unwrap();
        assert_eq!(cmd.url(), "http://eqdw.net");
    }

    #[test]
    fn test_explicit_url_passes_through() {
        let cmd = Web::new("http://unused.test")
            .generate_command(&["https://example.com/a?b=c".to_string()])
            .unwrap();
        assert_eq!(cmd.url(), "https://example.com/a?b=c");
        assert_eq!(cmd.site(), "web");
    }

    #[test]
    fn test_two_urls_is_usage_error() {
        let args = vec!["a".to_string(), "b".to_string()];
        assert!(Web::default().generate_command(&args).is_err());
    }
}
