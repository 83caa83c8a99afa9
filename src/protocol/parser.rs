//! Response Parser
//!
//! Single-pass recursive descent over an [`XmlNode`] tree. Recognizes two
//! document shapes:
//!
//! ```text
//! <methodResponse><fault><value>…struct…</value></fault></methodResponse>
//! <methodResponse><params><param><value>…</value></param>…</params></methodResponse>
//! ```
//!
//! ## Tolerated deviations
//! Some servers omit type tags. A `<value>` with bare text (even whitespace
//! only) decodes as a string, and an empty `<value></value>` decodes as `Nil`. A `<boolean>`
//! holding anything but `0`/`1` decodes as `InvalidBool` instead of failing.

use std::str::FromStr;

use super::response::{Fault, ParsedResponse};
use super::tree::{parse_document, XmlNode};
use crate::error::{Result, SymphonyError};
use crate::value::{Members, Value};

/// How much of the raw document an `InvalidResponseShape` error carries
pub const SNIPPET_LEN: usize = 256;

const FAULT_PATH: &str = "methodResponse/fault";
const PARAM_VALUES_PATH: &str = "methodResponse/params/param/value";

/// Parse raw response text
pub fn parse_str(text: &str) -> Result<ParsedResponse> {
    let doc = parse_document(text)?;
    parse(&doc.root())
}

/// Parse a response document, starting from its root node
pub fn parse<N: XmlNode>(root: &N) -> Result<ParsedResponse> {
    if let Some(fault) = root.select(FAULT_PATH).first() {
        let value = fault
            .select("value")
            .first()
            .map(decode_bare)
            .transpose()?
            .ok_or_else(|| SymphonyError::InvalidResponseShape(root.snippet(SNIPPET_LEN)))?;

        let fault = Fault::new(value);
        tracing::debug!(
            "Parsed fault response: code={:?} message={:?}",
            fault.code(),
            fault.message()
        );
        return Ok(ParsedResponse::Fault(fault));
    }

    let param_values = root.select(PARAM_VALUES_PATH);
    if !param_values.is_empty() {
        let values = param_values
            .iter()
            .map(decode_bare)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Parsed success response with {} values", values.len());
        return Ok(ParsedResponse::Success(values));
    }

    Err(SymphonyError::InvalidResponseShape(root.snippet(SNIPPET_LEN)))
}

/// Decode a `<value>` element
///
/// The first typed child wins; otherwise any text, whitespace included, is
/// a string and an empty element is `Nil`.
pub fn decode_bare<N: XmlNode>(value: &N) -> Result<Value> {
    let elements = value.elements();
    match elements.first() {
        Some(typed) => {
            if elements.len() > 1 {
                tracing::trace!("Ignoring {} extra elements in <value>", elements.len() - 1);
            }
            decode_value(typed)
        }
        None => Ok(untyped(value)),
    }
}

/// Raw text of a `<value>` without typed children, or `Nil`
fn untyped<N: XmlNode>(value: &N) -> Value {
    match value.text() {
        Some(text) => Value::Str(text.to_string()),
        None => Value::Nil,
    }
}

/// Decode a typed element (`<int>`, `<struct>`, ...) by its tag name
pub fn decode_value<N: XmlNode>(node: &N) -> Result<Value> {
    let tag = node.name();
    tracing::trace!("Decoding <{}>", tag);

    match tag {
        "string" => Ok(Value::Str(node.text().unwrap_or_default().to_string())),
        "int" | "i4" => Ok(Value::Int(parse_number(node)?)),
        "double" => Ok(Value::Double(parse_number(node)?)),
        "boolean" => Ok(match node.text() {
            Some("0") => Value::Bool(false),
            Some("1") => Value::Bool(true),
            other => {
                tracing::warn!("Malformed boolean {:?}, using InvalidBool", other);
                Value::InvalidBool
            }
        }),
        "array" => {
            let items = node
                .select("data/value")
                .iter()
                .map(decode_bare)
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        "struct" => decode_struct(node),
        other => Err(SymphonyError::UnsupportedValueType(other.to_string())),
    }
}

/// Names and values are gathered separately and zipped by position
///
/// Mismatched counts truncate to the shorter list.
fn decode_struct<N: XmlNode>(node: &N) -> Result<Value> {
    let keys: Vec<String> = node
        .select("member/name")
        .iter()
        .map(|name| name.text().unwrap_or_default().to_string())
        .collect();

    let mut values = Vec::new();
    for value in node.select("member/value") {
        // Whitespace between typed children is formatting, not content
        let decoded = if value.has_text() {
            Value::Str(value.text().unwrap_or_default().to_string())
        } else if let Some(typed) = value.elements().first() {
            decode_value(typed)?
        } else {
            untyped(&value)
        };
        values.push(decoded);
    }

    if keys.len() != values.len() {
        tracing::warn!(
            "Struct has {} member names but {} member values; truncating",
            keys.len(),
            values.len()
        );
    }

    let members: Members = keys.into_iter().zip(values).collect();
    Ok(Value::Struct(members))
}

fn parse_number<N: XmlNode, T: FromStr>(node: &N) -> Result<T> {
    let text = node.text().unwrap_or_default();
    text.trim().parse().map_err(|_| SymphonyError::MalformedNumber {
        tag: node.name().to_string(),
        text: text.to_string(),
    })
}
