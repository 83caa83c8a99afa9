//! Configuration for Symphony sessions
//!
//! Centralized configuration with sensible defaults. Nothing here is read
//! by the codec itself; it shapes the URL, headers and timeout that a
//! [`Session`](crate::client::Session) hands to its transport.

use crate::error::{Result, SymphonyError};

/// Default API protocol version, embedded in the request path
pub const DEFAULT_PROTOCOL_VERSION: u32 = 34;

/// Main configuration for a Symphony session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Remote host name
    pub host: String,

    /// Plain HTTP port
    pub port: u16,

    /// HTTPS port, used when `use_tls` is set
    pub tls_port: u16,

    /// API protocol version, embedded in the default path
    pub protocol_version: u32,

    /// Request path, including the trailing `?` before the query
    pub path: String,

    /// Whether to send over HTTPS
    pub use_tls: bool,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// Transport timeout (milliseconds)
    pub timeout_ms: u64,

    /// Headers sent with every request
    pub headers: Vec<(String, String)>,

    /// Methods whose parameters are not mirrored into the URL query
    pub special_calls: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: "www.pandora.com".to_string(),
            port: 80,
            tls_port: 443,
            protocol_version: DEFAULT_PROTOCOL_VERSION,
            path: versioned_path(DEFAULT_PROTOCOL_VERSION),
            use_tls: true,
            timeout_ms: 15_000,
            headers: vec![
                ("User-Agent".to_string(), "Symphony/0.1".to_string()),
                ("Content-Type".to_string(), "text/xml".to_string()),
                ("Accept-Encoding".to_string(), "identity".to_string()),
            ],
            special_calls: vec![
                "listener.authenticateListener".to_string(),
                "station.getStations".to_string(),
            ],
        }
    }
}

impl SessionConfig {
    /// Create a new config builder
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Scheme, host and port, without path
    pub fn base_url(&self) -> String {
        if self.use_tls {
            format!("https://{}:{}", self.host, self.tls_port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    pub fn is_special_call(&self, method: &str) -> bool {
        self.special_calls.iter().any(|m| m == method)
    }

    /// Reject configurations no request could be built from
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SymphonyError::Config("host must not be empty".to_string()));
        }
        if !self.path.starts_with('/') {
            return Err(SymphonyError::Config(format!(
                "path must start with '/': {}",
                self.path
            )));
        }
        Ok(())
    }
}

fn versioned_path(version: u32) -> String {
    format!("/radio/xmlrpc/v{}?", version)
}

/// Builder for SessionConfig
#[derive(Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Set the remote host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the plain HTTP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the HTTPS port
    pub fn tls_port(mut self, port: u16) -> Self {
        self.config.tls_port = port;
        self
    }

    /// Set the request path verbatim
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the API protocol version and derive the path from it
    pub fn protocol_version(mut self, version: u32) -> Self {
        self.config.protocol_version = version;
        self.config.path = versioned_path(version);
        self
    }

    /// Send over HTTPS or plain HTTP
    pub fn use_tls(mut self, use_tls: bool) -> Self {
        self.config.use_tls = use_tls;
        self
    }

    /// Set the transport timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Add or replace a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .config
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.1 = value,
            None => self.config.headers.push((name, value)),
        }
        self
    }

    /// Replace the list of special calls
    pub fn special_calls<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.special_calls = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> SessionConfig {
        self.config
    }
}
