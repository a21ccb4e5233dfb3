//! Signature base string construction (RFC 5849 section 3.4.1).

use tracing::trace;

use crate::error::{Error, Result};

/// Join the method, base string URI and normalized parameters with `&`.
///
/// Only the method is touched (upper-cased). `base_string_uri` and
/// `normalized_parameters` must already be percent-encoded so that the two
/// separators added here are the only literal `&` at this level.
pub fn construct_base_string(
    http_method: &str,
    base_string_uri: &str,
    normalized_parameters: &str,
) -> String {
    let base_string = [
        http_method.to_ascii_uppercase().as_str(),
        base_string_uri,
        normalized_parameters,
    ]
    .join("&");
    trace!(%base_string, "constructed signature base string");
    base_string
}

/// Normalize a request URI for use in a base string.
///
/// Scheme and authority are lower-cased and an explicit port `80` is removed
/// (whatever the scheme). Path, parameters, query and fragment are kept as
/// they are. Fails with [`Error::InvalidInput`] unless `uri` is absolute with
/// an authority.
pub fn normalize_base_string_uri(uri: &str) -> Result<String> {
    Ok(UriParts::parse(uri)?.normalize().to_string())
}

/// Like [`normalize_base_string_uri`] but without query and fragment, which is
/// the form the signed base string carries.
pub fn base_string_uri(uri: &str) -> Result<String> {
    let mut parts = UriParts::parse(uri)?.normalize();
    parts.query.clear();
    parts.fragment.clear();
    Ok(parts.to_string())
}

/// `scheme://netloc/path;params?query#fragment`
#[derive(Debug, Clone, PartialEq, Eq)]
struct UriParts {
    scheme: String,
    netloc: String,
    path: String,
    params: String,
    query: String,
    fragment: String,
}

impl UriParts {
    fn parse(uri: &str) -> Result<Self> {
        let (scheme, rest) = split_scheme(uri)
            .ok_or_else(|| Error::invalid_input(format!("uri has no scheme: {}", uri)))?;
        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| Error::invalid_input(format!("uri has no authority: {}", uri)))?;

        let netloc_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (netloc, rest) = rest.split_at(netloc_end);
        if netloc.is_empty() {
            return Err(Error::invalid_input(format!(
                "uri has an empty authority: {}",
                uri
            )));
        }
        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        // parameters only attach to the last path segment
        let last_segment = path.rfind('/').unwrap_or(0);
        let (path, params) = match path[last_segment..].find(';') {
            Some(i) => {
                let (path, params) = path.split_at(last_segment + i);
                (path, &params[1..])
            }
            None => (path, ""),
        };

        Ok(UriParts {
            scheme: scheme.to_string(),
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }

    fn normalize(mut self) -> Self {
        self.scheme = self.scheme.to_ascii_lowercase();
        self.netloc = self.netloc.to_lowercase();
        // https://tools.ietf.org/html/rfc5849#section-3.4.1.2 item 3, port 80 only
        let host = match self.netloc.split_once(':') {
            Some((host, "80")) => Some(host.to_string()),
            _ => None,
        };
        if let Some(host) = host {
            self.netloc = host;
        }
        self
    }
}

impl std::fmt::Display for UriParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.netloc, self.path)?;
        if !self.params.is_empty() {
            write!(f, ";{}", self.params)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

// `host:8080` is a host and port, not a scheme followed by a path
fn split_scheme(uri: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = uri.split_once(':')?;
    let valid = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
    let looks_like_port = !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit());
    if valid && !looks_like_port {
        Some((scheme, rest))
    } else {
        None
    }
}
