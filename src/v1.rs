//! OAuth 1.0 (RFC 5849) base strings and signature methods.

pub mod base_string;
pub mod key;
pub mod signer;
pub mod values;

pub use base_string::{base_string_uri, construct_base_string, normalize_base_string_uri};
pub use key::{load_private_key, signing_key, RsaSha1Key};
pub use signer::{
    sign_hmac_sha1, sign_plaintext, sign_rsa_sha1, HmacSha1Signer, KeyMaterial, OAuthSigner,
    PlainTextSigner, RsaSha1Signer, RsaSha1Verifier, Secrets,
};
pub use values::SignatureMethod;
