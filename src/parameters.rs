//! Request parameter collection and normalization (RFC 5849 section 3.4.1.3).

use tracing::trace;

use crate::encoder_oauth1::escape;
use crate::error::Result;
use crate::util;

/// A `(key, value)` pair as collected from a request.
pub type Parameter = (String, String);

pub const OAUTH_PARAM_KEY_REALM: &str = "realm";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";

/// Collect the parameters that take part in the signature.
///
/// Sources are appended in order: `uri_query`, `authorization_header`, `body`.
/// Query and body pairs are form-decoded and blank values are dropped; header
/// values are kept exactly as written between the quotes. `realm` is always
/// removed, `oauth_signature` only when `exclude_oauth_signature` is set.
pub fn collect_parameters(
    uri_query: Option<&str>,
    authorization_header: Option<&str>,
    body: Option<&str>,
    exclude_oauth_signature: bool,
) -> Result<Vec<Parameter>> {
    let mut params = Vec::new();
    if let Some(query) = uri_query {
        params.extend(util::parse_form_encoded(query)?);
    }
    if let Some(header) = authorization_header {
        params.extend(util::parse_authorization_header(header)?);
    }
    if let Some(body) = body {
        params.extend(util::parse_form_encoded(body)?);
    }

    params.retain(|(k, _)| {
        k != OAUTH_PARAM_KEY_REALM && !(exclude_oauth_signature && k == OAUTH_PARAM_KEY_SIGNATURE)
    });
    trace!(count = params.len(), "collected signature parameters");
    Ok(params)
}

/// Encode every key and value, sort by encoded key then encoded value, and
/// join them as `k=v&k=v`.
pub fn normalize_parameters(params: &[Parameter]) -> String {
    let mut encoded = params
        .iter()
        .map(|(k, v)| (escape(k), escape(v)))
        .collect::<Vec<(String, String)>>();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<String>>()
        .join("&")
}
