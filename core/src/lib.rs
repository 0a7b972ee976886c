//! Client library for the bitly v3 plain-text API.
//!
//! # Overview
//! `BitlyClient` exposes two operations, [`BitlyClient::shorten`] and
//! [`BitlyClient::expand`], both authenticated GET requests returning a
//! plain-text URL with its trailing newline stripped.
//!
//! # Design
//! - Request construction and response interpretation are plain functions
//!   over `HttpRequest` / `HttpResponse` data, so they are testable without
//!   a network. The `http` module executes requests through a reusable
//!   `ureq::Agent`.
//! - Configuration is an immutable [`BitlyConfig`] passed to the
//!   constructor; optional proxy settings (URI, username, password) are
//!   applied to the agent once, at construction.
//! - Calls are synchronous and blocking, one request per invocation, no
//!   retry.
//!
//! ```no_run
//! use bitly_core::{BitlyClient, BitlyConfig};
//!
//! let client = BitlyClient::new(BitlyConfig::new("access_token"))?;
//! let short_url = client.shorten("https://example.com/some/long/path")?;
//! let long_url = client.expand(&short_url)?;
//! # Ok::<(), bitly_core::BitlyError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod strings;

pub use client::BitlyClient;
pub use config::{BitlyConfig, ProxyConfig};
pub use error::BitlyError;
pub use http::{HttpRequest, HttpResponse};
