//! AWS credential acquisition
//!
//! Resolution order for [`Credentials::resolve`]:
//! 1. the explicitly requested profile;
//! 2. the profile named by `AWS_PROFILE`;
//! 3. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` (+ `AWS_SESSION_TOKEN`);
//! 4. the `default` profile of the shared credentials file.

use std::env;
use std::path::PathBuf;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_access_key;

const PROVIDER: &str = "route53";

/// Static AWS credentials used for SigV4 signing.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Session token for temporary (STS) credentials.
    pub session_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &mask_access_key(&self.access_key_id))
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Read credentials from the standard environment variables.
    pub fn from_env() -> Result<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").map_err(|_| missing("AWS_ACCESS_KEY_ID"))?;
        let secret_access_key =
            env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| missing("AWS_SECRET_ACCESS_KEY"))?;
        let session_token = env::var("AWS_SESSION_TOKEN").ok().filter(|t| !t.is_empty());

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }

    /// Read a named profile from the shared credentials file.
    pub fn from_profile(profile: &str) -> Result<Self> {
        let path = shared_credentials_path().ok_or_else(|| ProviderError::InvalidCredentials {
            provider: PROVIDER.to_string(),
            raw_message: Some("cannot locate the shared credentials file".to_string()),
        })?;

        let content =
            std::fs::read_to_string(&path).map_err(|e| ProviderError::InvalidCredentials {
                provider: PROVIDER.to_string(),
                raw_message: Some(format!("cannot read {}: {e}", path.display())),
            })?;

        log::debug!("Loading profile '{profile}' from {}", path.display());

        parse_credentials_file(&content, profile).ok_or_else(|| {
            ProviderError::InvalidCredentials {
                provider: PROVIDER.to_string(),
                raw_message: Some(format!(
                    "profile '{profile}' not found or incomplete in {}",
                    path.display()
                )),
            }
        })
    }

    /// Resolve credentials, optionally overriding the profile.
    pub fn resolve(profile: Option<&str>) -> Result<Self> {
        if let Some(profile) = profile {
            return Self::from_profile(profile);
        }
        if let Ok(profile) = env::var("AWS_PROFILE")
            && !profile.is_empty()
        {
            return Self::from_profile(&profile);
        }
        match Self::from_env() {
            Ok(creds) => {
                log::debug!(
                    "Using credentials from environment ({})",
                    mask_access_key(&creds.access_key_id)
                );
                Ok(creds)
            }
            Err(_) => Self::from_profile("default"),
        }
    }
}

fn missing(var: &str) -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: PROVIDER.to_string(),
        raw_message: Some(format!("environment variable {var} is not set")),
    }
}

fn shared_credentials_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("AWS_SHARED_CREDENTIALS_FILE")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    default_credentials_path()
}

/// `~/.aws/credentials`
fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aws").join("credentials"))
}

/// Extract one profile from the INI-style shared credentials file.
pub(crate) fn parse_credentials_file(content: &str, profile: &str) -> Option<Credentials> {
    let mut in_section = false;
    let mut access_key_id = None;
    let mut secret_access_key = None;
    let mut session_token = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = section.trim() == profile;
            continue;
        }
        if !in_section {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "aws_access_key_id" => access_key_id = Some(value),
            "aws_secret_access_key" => secret_access_key = Some(value),
            "aws_session_token" => session_token = Some(value),
            _ => {}
        }
    }

    Some(Credentials {
        access_key_id: access_key_id?,
        secret_access_key: secret_access_key?,
        session_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "\
[default]
aws_access_key_id = AKIDDEFAULT
aws_secret_access_key = secret-default

# deploy account
[deploy]
aws_access_key_id=AKIDDEPLOY
aws_secret_access_key=secret-deploy
aws_session_token = token-deploy

[broken]
aws_access_key_id = AKIDONLY
";

    #[test]
    fn default_path_is_under_home_directory() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let path = default_credentials_path().unwrap();
        assert!(path.starts_with(&home));
        assert!(path.ends_with(".aws/credentials"));
    }

    #[test]
    fn parses_default_profile() {
        let creds = parse_credentials_file(FILE, "default").unwrap();
        assert_eq!(creds.access_key_id, "AKIDDEFAULT");
        assert_eq!(creds.secret_access_key, "secret-default");
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn parses_named_profile_with_token() {
        let creds = parse_credentials_file(FILE, "deploy").unwrap();
        assert_eq!(creds.access_key_id, "AKIDDEPLOY");
        assert_eq!(creds.session_token.as_deref(), Some("token-deploy"));
    }

    #[test]
    fn incomplete_profile_is_rejected() {
        assert!(parse_credentials_file(FILE, "broken").is_none());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        assert!(parse_credentials_file(FILE, "staging").is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::new("AKID", "very-secret").with_session_token("tok");
        let printed = format!("{creds:?}");
        assert!(printed.contains("AKID"));
        assert!(!printed.contains("very-secret"));
        assert!(!printed.contains("tok\""));
    }
}
