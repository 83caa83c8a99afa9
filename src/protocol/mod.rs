//! Protocol Module
//!
//! The XML-RPC codec: a Call Builder that serializes calls, and a
//! Response Parser that decodes response trees. The two share only the
//! [`Value`](crate::value::Value) model.
//!
//! ## Request Format
//! ```text
//! <?xml version="1.0" ?><methodCall>
//!   <methodName>NAME</methodName>
//!   <params><param><value>…</value></param>…</params>
//! </methodCall>
//! ```
//! (emitted on one line, without whitespace)
//!
//! ### Value Tags
//! - `<string>`            - Str
//! - `<int>` / `<i4>`      - Int
//! - `<boolean>` (0 / 1)   - Bool
//! - `<double>`            - Double
//! - `<array><data>`       - Array
//! - `<struct><member>`    - Struct
//!
//! `<base64>` and `<dateTime.iso8601>` are not supported.
//!
//! ## Response Format
//! ```text
//! <methodResponse><params><param><value>…</value></param>…</params></methodResponse>
//! <methodResponse><fault><value><struct>…</struct></value></fault></methodResponse>
//! ```

mod call;
mod parser;
mod response;
mod tree;

pub use call::{build, encode_value, validate_method_name, Call, RequestDocument};
pub use parser::{decode_bare, decode_value, parse, parse_str, SNIPPET_LEN};
pub use response::{Fault, ParsedResponse, FAULT_CODE, FAULT_STRING};
pub use tree::{parse_document, XmlNode};
