//! Call Builder
//!
//! Serializes a method name and its ordered parameters into a request
//! document. The output is byte-exact:
//!
//! ```text
//! <?xml version="1.0" ?><methodCall><methodName>NAME</methodName><params>PARAM*</params></methodCall>
//! ```
//!
//! String content is written as given; no XML escaping is applied.

use std::fmt;

use crate::error::{Result, SymphonyError};
use crate::value::{double_text, Value};

/// Prolog and opening tags up to the method name
const CALL_PREFIX: &str = "<?xml version=\"1.0\" ?><methodCall><methodName>";

/// An outbound method invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Method name, e.g. `station.getStations`
    pub method: String,

    /// Parameters in call order
    pub params: Vec<Value>,
}

impl Call {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Serialize this call, consuming it
    pub fn into_document(self) -> Result<RequestDocument> {
        build(&self.method, &self.params)
    }
}

/// Serialized request text, ready for the cipher and transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDocument(String);

impl RequestDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Building
// =============================================================================

/// Check a method name against the XML-RPC character set
///
/// Valid iff non-empty and made only of ASCII letters, digits, `.`, `:`,
/// `_` and `/`.
pub fn validate_method_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '_' | '/'))
}

/// Build the request document for `name` called with `params`
pub fn build(name: &str, params: &[Value]) -> Result<RequestDocument> {
    if !validate_method_name(name) {
        return Err(SymphonyError::InvalidMethodName(name.to_string()));
    }

    let mut xml = String::with_capacity(128);
    xml.push_str(CALL_PREFIX);
    xml.push_str(name);
    xml.push_str("</methodName><params>");
    for param in params {
        xml.push_str("<param><value>");
        write_value(&mut xml, param)?;
        xml.push_str("</value></param>");
    }
    xml.push_str("</params></methodCall>");

    tracing::debug!("Built call {} with {} params", name, params.len());
    tracing::trace!("Request document: {}", xml);

    Ok(RequestDocument(xml))
}

/// Encode a single value to its typed wire form (without `<value>`)
pub fn encode_value(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Str(s) => {
            out.push_str("<string>");
            out.push_str(s);
            out.push_str("</string>");
        }
        Value::Int(n) => {
            out.push_str("<int>");
            out.push_str(&n.to_string());
            out.push_str("</int>");
        }
        Value::Bool(b) => out.push_str(if *b {
            "<boolean>1</boolean>"
        } else {
            "<boolean>0</boolean>"
        }),
        Value::Double(f) => {
            out.push_str("<double>");
            out.push_str(&double_text(*f));
            out.push_str("</double>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                out.push_str("<value>");
                write_value(out, item)?;
                out.push_str("</value>");
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(name);
                out.push_str("</name><value>");
                write_value(out, member)?;
                out.push_str("</value></member>");
            }
            out.push_str("</struct>");
        }
        Value::InvalidBool | Value::Nil => {
            return Err(SymphonyError::UnsupportedValueType(
                value.type_name().to_string(),
            ))
        }
    }
    Ok(())
}
