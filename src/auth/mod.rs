//! Authentication module for the Meeting Summarization client.
//!
//! RapidAPI identifies the caller with two headers: the subscription key and
//! the host of the API being called.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::config::key_hint;
use crate::errors::SummarizerError;

/// Header carrying the RapidAPI subscription key.
pub const RAPIDAPI_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header carrying the RapidAPI host.
pub const RAPIDAPI_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Authentication provider trait.
///
/// Implementations of this trait provide authentication credentials
/// for API requests.
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// Validate the credentials.
    fn validate(&self) -> Result<(), SummarizerError>;
}

/// RapidAPI key authentication provider.
pub struct RapidApiAuth {
    api_key: SecretString,
    api_host: String,
}

impl RapidApiAuth {
    /// Creates a new RapidAPI authentication provider.
    pub fn new(api_key: SecretString, api_host: impl Into<String>) -> Self {
        Self {
            api_key,
            api_host: api_host.into(),
        }
    }

    /// Creates from a string API key.
    pub fn from_string(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self::new(SecretString::new(api_key.into()), api_host)
    }

    /// Gets a hint of the API key for debugging (last 4 characters).
    pub fn key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

impl AuthProvider for RapidApiAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            RAPIDAPI_KEY_HEADER.to_string(),
            self.api_key.expose_secret().clone(),
        );
        headers.insert(RAPIDAPI_HOST_HEADER.to_string(), self.api_host.clone());
    }

    fn validate(&self) -> Result<(), SummarizerError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(SummarizerError::configuration("API key cannot be empty"));
        }

        if self.api_host.trim().is_empty() {
            return Err(SummarizerError::configuration("API host cannot be empty"));
        }

        Ok(())
    }
}

impl std::fmt::Debug for RapidApiAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiAuth")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .field("api_host", &self.api_host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "meeting-summarization-api.p.rapidapi.com";

    #[test]
    fn test_rapidapi_auth_apply() {
        let auth = RapidApiAuth::from_string("rapid_test_key_12345", HOST);
        let mut headers = HashMap::new();

        auth.apply_auth(&mut headers);

        assert_eq!(
            headers.get("X-RapidAPI-Key"),
            Some(&"rapid_test_key_12345".to_string())
        );
        assert_eq!(headers.get("X-RapidAPI-Host"), Some(&HOST.to_string()));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_rapidapi_auth_validate() {
        assert!(RapidApiAuth::from_string("rapid_test_key", HOST).validate().is_ok());
        assert!(RapidApiAuth::from_string("", HOST).validate().is_err());
        assert!(RapidApiAuth::from_string("rapid_test_key", " ").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let auth = RapidApiAuth::from_string("rapid_secret_key", HOST);
        let debug_str = format!("{:?}", auth);

        assert!(debug_str.contains("[REDACTED]"));
        assert!(debug_str.contains("..._key"));
        assert!(!debug_str.contains("rapid_secret_key"));
    }
}
