//! Connection options.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use cattle_core::ApiUrl;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How requests authenticate.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`.
    Token(String),
    /// HTTP basic auth with an API key pair.
    Keys {
        access_key: String,
        secret_key: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
            Credentials::Keys { access_key, .. } => f
                .debug_struct("Keys")
                .field("access_key", access_key)
                .field("secret_key", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Everything needed to reach one API endpoint.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use cattle_http::{ApiUrl, ClientOpts};
///
/// let opts = ClientOpts::new(ApiUrl::new("https://rancher.example.com/v3").unwrap())
///     .with_token("token-abcde:secret")
///     .timeout(Duration::from_secs(10))
///     .strict(true);
///
/// assert!(!format!("{opts:?}").contains("secret"));
/// ```
#[derive(Clone)]
pub struct ClientOpts {
    pub url: ApiUrl,
    pub credentials: Option<Credentials>,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
    pub timeout: Duration,
    /// Accept invalid TLS certificates.
    pub insecure: bool,
    /// Additional trusted root certificates, PEM encoded.
    pub ca_certs: Option<String>,
    /// Reject list filters the type's schema does not declare.
    pub strict: bool,
}

impl ClientOpts {
    pub fn new(url: ApiUrl) -> Self {
        Self {
            url,
            credentials: None,
            headers: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
            ca_certs: None,
            strict: false,
        }
    }

    /// Authenticate with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Token(token.into()));
        self
    }

    /// Authenticate with an access/secret key pair.
    pub fn with_keys(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Keys {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        });
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn ca_certs(mut self, pem: impl Into<String>) -> Self {
        self.ca_certs = Some(pem.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl fmt::Debug for ClientOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOpts")
            .field("url", &self.url.as_str())
            .field("credentials", &self.credentials)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("timeout", &self.timeout)
            .field("insecure", &self.insecure)
            .field("ca_certs", &self.ca_certs.is_some())
            .field("strict", &self.strict)
            .finish()
    }
}
