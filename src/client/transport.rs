//! Transport collaborator
//!
//! Anything that can POST a body and return the response body. Retries,
//! pooling and TLS setup belong to the implementation.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::error::Result;

/// A fully prepared HTTP POST
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Absolute URL, including the query
    pub url: String,

    pub headers: Vec<(String, String)>,

    /// Encrypted request document
    pub body: Bytes,

    pub timeout: Duration,
}

pub trait Transport {
    /// Send the request and return the raw (still encrypted) response body
    ///
    /// Failures should be reported as `SymphonyError::Transport`.
    fn send(&self, request: HttpRequest) -> Result<Bytes>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<Bytes> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<Bytes> {
        (**self).send(request)
    }
}
