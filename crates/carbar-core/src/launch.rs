//! Launch configuration for the shell window

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Title shown in the window chrome
pub const WINDOW_TITLE: &str = "CarBar";

/// Hosted frontend the webview navigates to
pub const APP_URL: &str = "https://carbar-pi.vercel.app/";

/// Launch parameters for the shell window
///
/// Fixed at compile time. The shell takes no command-line arguments and
/// reads no configuration files, so nothing outside this struct can change
/// what gets launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Window title
    pub title: String,
    /// URL the webview loads
    pub url: Url,
    /// Whether the user can resize the window
    pub resizable: bool,
    /// Open the webview devtools after window creation (debug builds only)
    pub debug: bool,
    /// Disable persistent cookies, cache and history for the webview
    pub private_mode: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            url: Url::parse(APP_URL).expect("APP_URL is a valid URL"),
            resizable: false,
            debug: false,
            private_mode: true,
        }
    }
}

impl LaunchConfig {
    /// Check the configuration is usable before handing it to the shell
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::InvalidConfig("window title is empty".to_string()));
        }

        match self.url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::InvalidConfig(format!(
                "unsupported URL scheme: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_launch_constants() {
        let config = LaunchConfig::default();
        assert_eq!(config.title, "CarBar");
        assert_eq!(config.url.as_str(), "https://carbar-pi.vercel.app/");
        assert!(!config.resizable);
        assert!(!config.debug);
        assert!(config.private_mode);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(LaunchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let config = LaunchConfig {
            title: String::new(),
            ..LaunchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = LaunchConfig {
            url: Url::parse("file:///etc/passwd").unwrap(),
            ..LaunchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
        assert!(!err.is_recoverable());
    }
}
