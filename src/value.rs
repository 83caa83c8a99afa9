//! Value data model
//!
//! The closed set of values that travel in a call or a response. Used both
//! as Call Builder input and Response Parser output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Struct members keyed by member name
pub type Members = BTreeMap<String, Value>;

/// A single XML-RPC value
///
/// `InvalidBool` and `Nil` only ever come out of the parser: they mark a
/// `<boolean>` with text other than `0`/`1`, and a `<value>` with no content.
/// Neither can be encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    InvalidBool,
    Double(f64),
    Array(Vec<Value>),
    Struct(Members),
    Nil,
}

impl Value {
    /// Short variant name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Bool(_) => "boolean",
            Value::InvalidBool => "invalid boolean",
            Value::Double(_) => "double",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
            Value::Nil => "nil",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Members> {
        match self {
            Value::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Look up a struct member; `None` for non-structs
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|members| members.get(key))
    }
}

/// Text form of a double, as it appears on the wire
///
/// Always keeps a fractional part (`1.0`, not `1`).
pub(crate) fn double_text(f: f64) -> String {
    format!("{:?}", f)
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from {
    ($rust_type:ty, $name:ident => $expr:expr) => {
        impl From<$rust_type> for Value {
            fn from($name: $rust_type) -> Self {
                $expr
            }
        }
    };
}

impl_from!(&str, s => Value::Str(s.to_owned()));
impl_from!(String, s => Value::Str(s));
impl_from!(i32, n => Value::Int(i64::from(n)));
impl_from!(i64, n => Value::Int(n));
impl_from!(bool, b => Value::Bool(b));
impl_from!(f64, f => Value::Double(f));
impl_from!(Vec<Value>, items => Value::Array(items));
impl_from!(Members, members => Value::Struct(members));

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Nil)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Struct(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => write_nested(f, other),
        }
    }
}

/// Like `Display`, but strings inside containers are quoted
fn write_nested(f: &mut fmt::Formatter, value: &Value) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "{:?}", s),
        Value::Int(n) => write!(f, "{}", n),
        Value::Bool(b) => write!(f, "{}", b),
        Value::InvalidBool => f.write_str("invalid_boolean"),
        Value::Double(d) => f.write_str(&double_text(*d)),
        Value::Nil => f.write_str("nil"),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, item)?;
            }
            f.write_str("]")
        }
        Value::Struct(members) => {
            f.write_str("{")?;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:?} => ", key)?;
                write_nested(f, member)?;
            }
            f.write_str("}")
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::InvalidBool => serializer.serialize_str("invalid_boolean"),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Array(items) => items.serialize(serializer),
            Value::Struct(members) => members.serialize(serializer),
            Value::Nil => serializer.serialize_unit(),
        }
    }
}
