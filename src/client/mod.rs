//! Client Module
//!
//! Session glue around the codec: builds the URL query, injects the
//! timestamp and auth token, and runs the request through a cipher and a
//! transport.
//!
//! ## Request Flow
//! ```text
//! Call ─► build ─► Cipher::encrypt ─► Transport::send
//!                                           │
//! ParsedResponse ◄─ parse ◄─ Cipher::decrypt ◄┘
//! ```
//!
//! No network transport or cipher algorithm ships here; callers provide
//! their own through the [`Transport`] and [`Cipher`] traits.

mod cipher;
mod session;
mod transport;

pub use cipher::{Cipher, Plaintext};
pub use session::{PreparedRequest, Session};
pub use transport::{HttpRequest, Transport};
