//! Client configuration.
//!
//! # Design
//! Plain structs with public fields, passed to `BitlyClient::new` and
//! immutable from then on. The convenience constructors keep call sites
//! short without hiding the fields.

/// Configuration for a [`crate::BitlyClient`].
#[derive(Debug, Clone)]
pub struct BitlyConfig {
    /// Secret token authenticating requests to the service.
    pub access_token: String,
    /// Optional HTTP proxy for all outbound requests.
    pub proxy: Option<ProxyConfig>,
}

impl BitlyConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            proxy: None,
        }
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }
}

/// HTTP proxy settings: a URI like `http://proxy.host.com:8080` and
/// optional basic-auth credentials.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            username: None,
            password: None,
        }
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}
