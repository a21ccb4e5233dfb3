use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";
pub const OAUTH_VALUE_SIGMETHOD_RSASHA1: &str = "RSA-SHA1";
pub const OAUTH_VALUE_SIGMETHOD_PLAINTEXT: &str = "PLAINTEXT";

pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";

/// Value of `oauth_signature_method`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
    #[serde(rename = "HMAC-SHA1")]
    HmacSha1,
    #[serde(rename = "RSA-SHA1")]
    RsaSha1,
    #[serde(rename = "PLAINTEXT")]
    PlainText,
}

impl SignatureMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => OAUTH_VALUE_SIGMETHOD_HMACSHA1,
            SignatureMethod::RsaSha1 => OAUTH_VALUE_SIGMETHOD_RSASHA1,
            SignatureMethod::PlainText => OAUTH_VALUE_SIGMETHOD_PLAINTEXT,
        }
    }
}

impl From<SignatureMethod> for &'static str {
    fn from(method: SignatureMethod) -> Self {
        method.as_str()
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OAUTH_VALUE_SIGMETHOD_HMACSHA1 => Ok(SignatureMethod::HmacSha1),
            OAUTH_VALUE_SIGMETHOD_RSASHA1 => Ok(SignatureMethod::RsaSha1),
            OAUTH_VALUE_SIGMETHOD_PLAINTEXT => Ok(SignatureMethod::PlainText),
            other => Err(Error::invalid_input(format!(
                "unsupported signature method: {}",
                other
            ))),
        }
    }
}
