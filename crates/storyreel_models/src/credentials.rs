//! API credential resolution.
//!
//! A single opaque API key is resolved with fixed precedence: an explicit
//! user-entered value from `storyreel.toml` (current directory, then the
//! user config directory) wins over the `GEMINI_API_KEY` environment
//! variable; with neither present the gateway cannot be constructed.

use config::{Config, File};
use serde::Deserialize;
use std::path::PathBuf;
use storyreel_error::{ConfigError, StoryreelResult};
use tracing::debug;

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CredentialSource {
    /// Explicit `api_key` entry in storyreel.toml
    #[display("storyreel.toml")]
    Config,
    /// `GEMINI_API_KEY` environment variable
    #[display("environment")]
    Environment,
}

/// A resolved API credential plus its source.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential {
    key: String,
    source: CredentialSource,
}

impl std::fmt::Debug for ApiCredential {
    // never log the key itself
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredential")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ApiCredential {
    /// The raw key value.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Which source the key was taken from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Pure resolution over the two candidate sources, first match wins.
    ///
    /// Blank values count as absent so an empty `api_key = ""` line cannot
    /// shadow a working environment variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_models::{ApiCredential, CredentialSource};
    ///
    /// let cred = ApiCredential::from_sources(
    ///     Some("from-config".to_string()),
    ///     Some("from-env".to_string()),
    /// )
    /// .unwrap();
    /// assert_eq!(cred.key(), "from-config");
    /// assert_eq!(cred.source(), CredentialSource::Config);
    /// ```
    pub fn from_sources(
        explicit: Option<String>,
        environment: Option<String>,
    ) -> Option<Self> {
        let non_blank = |value: Option<String>| {
            value.and_then(|v| {
                let trimmed = v.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            })
        };

        if let Some(key) = non_blank(explicit) {
            return Some(Self {
                key,
                source: CredentialSource::Config,
            });
        }
        non_blank(environment).map(|key| Self {
            key,
            source: CredentialSource::Environment,
        })
    }

    /// Resolve a credential from the configured sources.
    ///
    /// Loads `.env` first so a checked-in dotfile can supply the
    /// environment variable, then applies the precedence of
    /// [`ApiCredential::from_sources`].
    pub fn resolve() -> Option<Self> {
        dotenvy::dotenv().ok();
        let settings = GatewaySettings::load().unwrap_or_default();
        let credential =
            Self::from_sources(settings.api_key, std::env::var("GEMINI_API_KEY").ok());
        match &credential {
            Some(cred) => debug!(source = %cred.source(), "Resolved API credential"),
            None => debug!("No API credential found in any source"),
        }
        credential
    }
}

/// Gateway settings read from `storyreel.toml`.
///
/// Sources in order of precedence (later overrides earlier):
/// 1. User config in the platform config directory
///    (`<config_dir>/storyreel/storyreel.toml`)
/// 2. `./storyreel.toml` in the current directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySettings {
    /// Explicit API key, standing in for a browser's local key store
    #[serde(default)]
    pub api_key: Option<String>,
}

impl GatewaySettings {
    /// Load settings, silently skipping config files that do not exist.
    pub fn load() -> StoryreelResult<Self> {
        let mut builder = Config::builder();

        if let Some(dir) = dirs::config_dir() {
            let user_config: PathBuf = dir.join("storyreel").join("storyreel.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }
        builder = builder.add_source(File::with_name("storyreel").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins_over_environment() {
        let cred = ApiCredential::from_sources(
            Some("explicit".to_string()),
            Some("environment".to_string()),
        )
        .unwrap();
        assert_eq!(cred.key(), "explicit");
        assert_eq!(cred.source(), CredentialSource::Config);
    }

    #[test]
    fn environment_used_when_no_explicit_value() {
        let cred =
            ApiCredential::from_sources(None, Some("environment".to_string())).unwrap();
        assert_eq!(cred.key(), "environment");
        assert_eq!(cred.source(), CredentialSource::Environment);
    }

    #[test]
    fn blank_explicit_value_does_not_shadow_environment() {
        let cred = ApiCredential::from_sources(
            Some("   ".to_string()),
            Some("environment".to_string()),
        )
        .unwrap();
        assert_eq!(cred.source(), CredentialSource::Environment);
    }

    #[test]
    fn no_sources_resolves_to_none() {
        assert!(ApiCredential::from_sources(None, None).is_none());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let cred = ApiCredential::from_sources(Some("secret-key".to_string()), None).unwrap();
        let debugged = format!("{:?}", cred);
        assert!(!debugged.contains("secret-key"));
    }
}
