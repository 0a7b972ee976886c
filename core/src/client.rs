//! The bitly client: request construction, execution, response parsing.
//!
//! # Design
//! `build_shorten` / `build_expand` produce `HttpRequest` values and
//! `parse_url_response` consumes an `HttpResponse`, so the wire format is
//! testable without a network. `shorten` / `expand` chain the two around
//! `http::execute` on the agent built at construction.

use log::debug;

use crate::config::BitlyConfig;
use crate::error::BitlyError;
use crate::http::{self, HttpRequest, HttpResponse};
use crate::strings::chomp;

const BITLY_API_URL: &str = "https://api-ssl.bitly.com";

/// Synchronous client for the bitly v3 plain-text API.
///
/// Holds the access token and a reusable agent carrying the proxy
/// settings, if any. One blocking request per call, no retry.
pub struct BitlyClient {
    base_url: String,
    access_token: String,
    agent: ureq::Agent,
}

impl BitlyClient {
    /// Client against the production endpoint, `https://api-ssl.bitly.com`.
    ///
    /// Fails only when the configured proxy URI is rejected.
    pub fn new(config: BitlyConfig) -> Result<Self, BitlyError> {
        Self::with_base_url(config, BITLY_API_URL)
    }

    /// Client against an alternative endpoint. Integration tests point this
    /// at the mock server.
    pub fn with_base_url(config: BitlyConfig, base_url: &str) -> Result<Self, BitlyError> {
        let agent = http::build_agent(config.proxy.as_ref())?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token,
            agent,
        })
    }

    /// Shorten `long_url` via the remote service.
    ///
    /// The URL does not have to be encoded; it is percent-encoded before
    /// being sent. Returns the short URL with its trailing newline removed.
    pub fn shorten(&self, long_url: &str) -> Result<String, BitlyError> {
        let request = self.build_shorten(long_url);
        debug!("GET {}", request.url);
        self.parse_url_response(http::execute(&self.agent, &request)?)
    }

    /// Expand a short URL back to the original long URL. Same contract as
    /// [`BitlyClient::shorten`], against the expand endpoint.
    pub fn expand(&self, short_url: &str) -> Result<String, BitlyError> {
        let request = self.build_expand(short_url);
        debug!("GET {}", request.url);
        self.parse_url_response(http::execute(&self.agent, &request)?)
    }

    pub fn build_shorten(&self, long_url: &str) -> HttpRequest {
        self.build("shorten", "longUrl", long_url)
    }

    pub fn build_expand(&self, short_url: &str) -> HttpRequest {
        self.build("expand", "shortUrl", short_url)
    }

    /// Interpret a plain-text response: 2xx yields the body with one
    /// trailing newline chomped, anything else is an `Http` error.
    pub fn parse_url_response(&self, response: HttpResponse) -> Result<String, BitlyError> {
        if !(200..300).contains(&response.status) {
            return Err(BitlyError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(chomp(&response.body).to_string())
    }

    fn build(&self, endpoint: &str, url_param: &str, url: &str) -> HttpRequest {
        HttpRequest {
            url: format!(
                "{}/v3/{endpoint}?access_token={}&{url_param}={}&format=txt",
                self.base_url,
                urlencoding::encode(&self.access_token),
                urlencoding::encode(url)
            ),
            headers: vec![("accept".to_string(), "text/plain".to_string())],
        }
    }
}
