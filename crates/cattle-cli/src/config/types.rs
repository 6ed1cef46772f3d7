//! On-disk configuration format.

use anyhow::{Context, Result, bail};
use cattle_http::{ApiUrl, ClientOpts};
use serde::{Deserialize, Serialize};

/// What `cattle login` writes to `config.json`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub insecure: bool,
}

impl StoredConfig {
    /// Build client options from the stored values.
    pub fn to_opts(&self) -> Result<ClientOpts> {
        let url = ApiUrl::new(&self.url).context("Invalid server URL in configuration")?;
        let opts = ClientOpts::new(url).insecure(self.insecure);

        let opts = match (&self.token, &self.access_key, &self.secret_key) {
            (Some(token), _, _) => opts.with_token(token),
            (None, Some(access), Some(secret)) => opts.with_keys(access, secret),
            (None, Some(_), None) | (None, None, Some(_)) => {
                bail!("Configuration has only half of an access/secret key pair")
            }
            (None, None, None) => opts,
        };

        Ok(opts)
    }

    /// How the stored credentials authenticate, for display.
    pub fn auth_kind(&self) -> &'static str {
        if self.token.is_some() {
            "token"
        } else if self.access_key.is_some() {
            "access key"
        } else {
            "anonymous"
        }
    }
}

impl std::fmt::Debug for StoredConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredConfig")
            .field("url", &self.url)
            .field("auth", &self.auth_kind())
            .field("insecure", &self.insecure)
            .finish()
    }
}

/// Layer the environment over what was stored.
///
/// A URL from the environment alone is enough to produce a configuration.
/// A token from the environment replaces any stored key pair.
pub(crate) fn apply_overrides(
    stored: Option<StoredConfig>,
    url: Option<String>,
    token: Option<String>,
) -> Option<StoredConfig> {
    let mut config = match (stored, url) {
        (Some(mut config), Some(url)) => {
            config.url = url;
            config
        }
        (Some(config), None) => config,
        (None, Some(url)) => StoredConfig {
            url,
            ..StoredConfig::default()
        },
        (None, None) => return None,
    };

    if let Some(token) = token {
        config.token = Some(token);
        config.access_key = None;
        config.secret_key = None;
    }

    Some(config)
}
