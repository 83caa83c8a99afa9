//! # Symphony
//!
//! An XML-RPC codec for a streaming-radio API, with:
//! - A Call Builder producing byte-exact request documents
//! - A tolerant Response Parser for servers that omit type tags
//! - Session glue for URL arguments, timestamps and auth tokens
//!
//! ## Architecture Overview
//!
//! ```text
//!   caller ──► Call Builder ──► request text ──► Cipher ──► Transport
//!                                                              │
//!   caller ◄── Response Parser ◄── XML tree ◄── Cipher ◄───────┘
//! ```
//!
//! The codec is pure: [`protocol::build`] and [`protocol::parse`] keep no
//! state between calls and may be used from any number of threads.
//!
//! ## Example
//!
//! ```
//! use symphony::protocol::{build, parse_str, ParsedResponse};
//! use symphony::Value;
//!
//! let doc = build("sample.Method", &[Value::Int(1)]).unwrap();
//! assert!(doc.as_str().contains("<int>1</int>"));
//!
//! let response = parse_str(
//!     "<methodResponse><params><param><value><int>30</int></value></param></params></methodResponse>",
//! )
//! .unwrap();
//! assert_eq!(response, ParsedResponse::Success(vec![Value::Int(30)]));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SymphonyError, Result};
pub use config::SessionConfig;
pub use value::{Members, Value};
pub use client::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Symphony
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
