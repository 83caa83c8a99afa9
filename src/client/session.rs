//! Session
//!
//! Holds the per-listener state the remote API expects on every call and
//! turns a method invocation into an [`HttpRequest`].
//!
//! ## Query String
//! ```text
//! rid=<request id>[&lid=<listener id>]&method=<name after '.'>[&arg=<param>]*
//! ```
//! Parameters are mirrored as `arg`s except for the configured special
//! calls. The request body then gets the current timestamp (adjusted by the
//! server time offset) and the auth token prepended to its parameters.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use parking_lot::RwLock;

use super::cipher::{Cipher, Plaintext};
use super::transport::{HttpRequest, Transport};
use crate::config::SessionConfig;
use crate::error::{Result, SymphonyError};
use crate::protocol::{build, parse_str, ParsedResponse, RequestDocument};
use crate::value::Value;

/// A request ready for the transport, with the plaintext document kept
/// for inspection
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub document: RequestDocument,
    pub request: HttpRequest,
}

/// Mutable session state (guarded by the session's RwLock)
#[derive(Debug, Default)]
struct SessionState {
    listener_id: Option<String>,
    auth_token: Option<String>,
    /// Seconds to add to local time to get server time
    time_offset: i64,
    last_response: Option<ParsedResponse>,
}

/// A client session bound to one transport and cipher
pub struct Session<T, C = Plaintext> {
    config: SessionConfig,
    transport: T,
    cipher: C,

    /// Sent as `rid`; fixed for the session's lifetime
    request_id: String,

    state: RwLock<SessionState>,
}

impl<T: Transport, C: Cipher> Session<T, C> {
    /// Create a session; fails if the config is unusable
    pub fn new(config: SessionConfig, transport: T, cipher: C) -> Result<Self> {
        config.validate()?;
        let request_id = format!("{:07}P", unix_now() % 10_000_000);
        tracing::debug!("New session {} for {}", request_id, config.host);

        Ok(Self {
            config,
            transport,
            cipher,
            request_id,
            state: RwLock::new(SessionState::default()),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn listener_id(&self) -> Option<String> {
        self.state.read().listener_id.clone()
    }

    pub fn set_listener_id(&self, listener_id: Option<String>) {
        self.state.write().listener_id = listener_id;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.state.read().auth_token.clone()
    }

    pub fn set_auth_token(&self, token: Option<String>) {
        self.state.write().auth_token = token;
    }

    pub fn time_offset(&self) -> i64 {
        self.state.read().time_offset
    }

    pub fn set_time_offset(&self, seconds: i64) {
        self.state.write().time_offset = seconds;
    }

    pub fn last_response(&self) -> Option<ParsedResponse> {
        self.state.read().last_response.clone()
    }

    /// Whether the most recent response was a fault
    pub fn received_fault(&self) -> bool {
        self.state
            .read()
            .last_response
            .as_ref()
            .is_some_and(ParsedResponse::is_fault)
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Prepare a request as if sent at unix time `now`
    pub fn prepare_at(&self, method: &str, params: Vec<Value>, now: i64) -> Result<PreparedRequest> {
        let (query, full_params) = {
            let state = self.state.read();

            let mut query = format!("rid={}", self.request_id);
            if let Some(lid) = &state.listener_id {
                query.push_str("&lid=");
                query.push_str(lid);
            }
            query.push_str("&method=");
            query.push_str(method.split('.').nth(1).unwrap_or_default());

            if !self.config.is_special_call(method) {
                for param in &params {
                    query.push_str("&arg=");
                    query.push_str(&param.to_string());
                }
            }

            let mut full_params = Vec::with_capacity(params.len() + 2);
            if !params.is_empty() || state.auth_token.is_some() {
                full_params.push(Value::Int(now + state.time_offset));
            }
            if let Some(token) = &state.auth_token {
                full_params.push(Value::Str(token.clone()));
            }
            full_params.extend(params);

            (query, full_params)
        };

        let document = build(method, &full_params)?;
        let body = self.cipher.encrypt(document.as_bytes())?;
        let url = format!("{}{}{}", self.config.base_url(), self.config.path, query);

        Ok(PreparedRequest {
            document,
            request: HttpRequest {
                url,
                headers: self.config.headers.clone(),
                body: Bytes::from(body),
                timeout: Duration::from_millis(self.config.timeout_ms),
            },
        })
    }

    /// Send a call and decode the response
    ///
    /// The response becomes [`last_response`](Self::last_response), fault or not.
    pub fn send(&self, method: &str, params: Vec<Value>) -> Result<ParsedResponse> {
        let prepared = self.prepare_at(method, params, unix_now())?;
        tracing::debug!("Sending {} to {}", method, prepared.request.url);

        let raw = self.transport.send(prepared.request)?;
        let plain = self.cipher.decrypt(&raw)?;
        let text = std::str::from_utf8(&plain)
            .map_err(|e| SymphonyError::MalformedDocument(e.to_string()))?;

        let response = parse_str(text)?;
        if let Some(fault) = response.fault() {
            tracing::warn!(
                "{} returned fault {:?}: {}",
                method,
                fault.code(),
                fault.message().unwrap_or_default()
            );
        }

        self.state.write().last_response = Some(response.clone());
        Ok(response)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
