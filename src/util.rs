use tracing::trace;

use crate::encoder_oauth1::unescape;
use crate::error::{Error, Result};
use crate::parameters::Parameter;

const OAUTH_SCHEME: &str = "OAuth";

/// Split a request URI into the part before `?` and its raw query (fragment dropped).
pub fn split_query(uri: &str) -> (&str, Option<&str>) {
    let uri = uri.split('#').next().unwrap_or(uri);
    match uri.split_once('?') {
        Some((endpoint, query)) => (endpoint, Some(query)),
        None => (uri, None),
    }
}

/// Decode an `application/x-www-form-urlencoded` string into ordered pairs.
///
/// `+` decodes to a space. Pairs with an empty value (including pairs without
/// `=`) are dropped. Escapes that do not decode to UTF-8 fail with
/// [`Error::InvalidInput`] rather than being replaced.
pub fn parse_form_encoded(input: &str) -> Result<Vec<Parameter>> {
    let mut params = Vec::new();
    for pair in input.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (key, value) = (form_decode(key)?, form_decode(value)?);
        if !value.is_empty() {
            params.push((key, value));
        }
    }
    Ok(params)
}

fn form_decode(input: &str) -> Result<String> {
    unescape(&input.replace('+', " "))
}

/// Tokenize the value of an `Authorization: OAuth ...` header.
///
/// Pairs come back in header order; values keep their literal, still
/// percent-encoded form with the surrounding quotes removed.
pub fn parse_authorization_header(header: &str) -> Result<Vec<Parameter>> {
    let items = split_header_items(strip_scheme(header))?;
    let mut params = Vec::with_capacity(items.len());
    for item in items {
        let (key, value) = item.split_once('=').ok_or_else(|| {
            Error::invalid_input(format!("malformed authorization header item: {}", item))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::invalid_input(
                "authorization header item has an empty key",
            ));
        }
        let value = value.trim();
        let value = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        };
        params.push((key.to_string(), value.to_string()));
    }
    trace!(count = params.len(), "tokenized authorization header");
    Ok(params)
}

fn strip_scheme(header: &str) -> &str {
    let header = header.trim_start();
    match header.get(..OAUTH_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(OAUTH_SCHEME) => {
            let rest = &header[OAUTH_SCHEME.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest
            } else {
                header
            }
        }
        _ => header,
    }
}

// comma-separated items; commas inside quotes don't split, `\` escapes the next char
fn split_header_items(input: &str) -> Result<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut escaped = false;
    for c in input.chars() {
        if in_quote {
            if escaped {
                current.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else {
                if c == '"' {
                    in_quote = false;
                }
                current.push(c);
            }
            continue;
        }
        match c {
            ',' => {
                push_item(&mut items, &current);
                current.clear();
            }
            '"' => {
                in_quote = true;
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    if in_quote {
        return Err(Error::invalid_input(
            "authorization header has an unterminated quoted value",
        ));
    }
    push_item(&mut items, &current);
    Ok(items)
}

fn push_item(items: &mut Vec<String>, item: &str) {
    let item = item.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}
