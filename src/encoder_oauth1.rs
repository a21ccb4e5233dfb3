use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet};

use crate::error::{Error, Result};

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` over its UTF-8 bytes, leaving only RFC 3986 unreserved characters.
pub fn escape(input: &str) -> String {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS).to_string()
}

/// Inverse of [`escape`]. `+` is left alone; form decoding lives in [`crate::util`].
pub fn unescape(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Error::invalid_input(format!("percent-decoded value is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_unreserved() {
        assert_eq!(escape("abcXYZ019"), "abcXYZ019");
        assert_eq!(escape("-._~"), "-._~");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape(" "), "%20");
        assert_eq!(escape("&"), "%26");
        assert_eq!(escape("="), "%3D");
        assert_eq!(escape("/"), "%2F");
        assert_eq!(escape("+"), "%2B");
        assert_eq!(escape("*"), "%2A");
        assert_eq!(escape("%3D"), "%253D");
        assert_eq!(escape("パ"), "%E3%83%91");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("r%20b").unwrap(), "r b");
        assert_eq!(unescape("%3D%253D").unwrap(), "=%3D");
        assert_eq!(unescape("a+b").unwrap(), "a+b");
        let text = "Hello Ladies + Gentlemen!";
        assert_eq!(unescape(&escape(text)).unwrap(), text);
        assert!(matches!(unescape("%FF"), Err(Error::InvalidInput(_))));
    }
}
