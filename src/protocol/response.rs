//! Response definitions
//!
//! Represents a decoded response document.

use serde::Serialize;

use crate::value::Value;

/// Member holding the numeric fault code
pub const FAULT_CODE: &str = "faultCode";

/// Member holding the fault message
pub const FAULT_STRING: &str = "faultString";

/// A decoded response: exactly one of fault or success
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsedResponse {
    /// The remote method failed
    Fault(Fault),

    /// Return values in document order
    Success(Vec<Value>),
}

impl ParsedResponse {
    pub fn is_fault(&self) -> bool {
        matches!(self, ParsedResponse::Fault(_))
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            ParsedResponse::Fault(fault) => Some(fault),
            ParsedResponse::Success(_) => None,
        }
    }

    pub fn values(&self) -> Option<&[Value]> {
        match self {
            ParsedResponse::Fault(_) => None,
            ParsedResponse::Success(values) => Some(values),
        }
    }
}

/// A fault payload
///
/// Normally a struct with `faultCode` and `faultString`, but whatever the
/// server sent is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fault {
    pub value: Value,
}

impl Fault {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn code(&self) -> Option<i64> {
        self.value.get(FAULT_CODE).and_then(Value::as_int)
    }

    pub fn message(&self) -> Option<&str> {
        self.value.get(FAULT_STRING).and_then(Value::as_str)
    }
}
