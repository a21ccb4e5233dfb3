//! OAuth 1.0 (RFC 5849) signature engine.
//!
//! Collect request parameters, normalize them, build the signature base
//! string and sign it with HMAC-SHA1, RSA-SHA1 or PLAINTEXT. Every step is a
//! pure function; [`builder::SignatureBaseBuilder`] chains them for a whole
//! request.

pub mod builder;
pub mod encoder_oauth1;
pub mod error;
pub mod parameters;
pub mod util;
pub mod v1;

pub use encoder_oauth1::{escape, unescape};
pub use error::{Error, Result};
pub use parameters::{collect_parameters, normalize_parameters, Parameter};
pub use util::parse_authorization_header;
