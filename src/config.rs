// Credential storage.
//
// The credential pair lives in a single JSON object under the user's
// config directory (`<config dir>/whatphone/config.json`). Consumers only
// see the `CredentialProvider` trait so the lookup path can be driven with
// in-memory credentials as well as the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR: &str = "whatphone";
const CONFIG_FILE: &str = "config.json";

/// EveryoneAPI account credentials. The key names match the files written
/// by earlier releases.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "AccountSID", default)]
    pub account_sid: String,
    #[serde(rename = "AuthToken", default)]
    pub auth_token: String,
}

impl Credentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Both strings must be set before a request can be authenticated.
    pub fn is_complete(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }
}

/// Source of credentials for a lookup.
pub trait CredentialProvider {
    fn credentials(&self) -> Result<Credentials>;
}

impl CredentialProvider for Credentials {
    fn credentials(&self) -> Result<Credentials> {
        Ok(self.clone())
    }
}

/// JSON config file holding the credential pair.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the platform's per-user config location.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(Self::at(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Credentials> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::ConfigMissing),
            Err(e) => return Err(e.into()),
        };
        let credentials = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "loaded credentials");
        Ok(credentials)
    }

    /// Write the credentials, creating the parent directory if needed and
    /// replacing any existing file.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut body = serde_json::to_string(credentials)?;
        body.push('\n');
        fs::write(&self.path, body)?;
        tracing::info!(path = %self.path.display(), "wrote credentials");
        Ok(())
    }
}

impl CredentialProvider for ConfigStore {
    fn credentials(&self) -> Result<Credentials> {
        self.load()
    }
}
