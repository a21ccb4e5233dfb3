use std::borrow::Cow;
use std::fmt;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::Verifier;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::encoder_oauth1::escape;
use crate::error::{Error, Result};
use crate::v1::key::{self, RsaSha1Key};
use crate::v1::values::SignatureMethod;

type HmacSha1 = Hmac<Sha1>;

/// Client secret and resource owner (token) secret.
///
/// Both values are redacted from `Debug` and `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets<'a> {
    client_secret: Cow<'a, str>,
    resource_owner_secret: Cow<'a, str>,
}

impl<'a> Secrets<'a> {
    /// Secrets for a request signed without a token.
    pub fn new<T>(client_secret: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Secrets {
            client_secret: client_secret.into(),
            resource_owner_secret: Cow::Borrowed(""),
        }
    }

    pub fn with_token_secret<TClientSecret, TTokenSecret>(
        client_secret: TClientSecret,
        resource_owner_secret: TTokenSecret,
    ) -> Self
    where
        TClientSecret: Into<Cow<'a, str>>,
        TTokenSecret: Into<Cow<'a, str>>,
    {
        Secrets {
            client_secret: client_secret.into(),
            resource_owner_secret: resource_owner_secret.into(),
        }
    }

    // https://tools.ietf.org/html/rfc5849#section-3.4.2
    fn signing_key(&self) -> String {
        format!(
            "{}&{}",
            escape(&self.client_secret),
            escape(&self.resource_owner_secret)
        )
    }
}

impl fmt::Debug for Secrets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("client_secret", &"<redacted>")
            .field("resource_owner_secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Secrets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Computes `oauth_signature` over a signature base string.
pub trait OAuthSigner: Send + Sync {
    fn signature_method(&self) -> SignatureMethod;

    /// Sign `base_string`, returning base64 text.
    fn sign(&self, base_string: &str) -> Result<String>;

    /// Recompute the signature and compare it in constant time.
    fn verify(&self, base_string: &str, signature: &str) -> Result<bool> {
        let expected = self.sign(base_string)?;
        let matched: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
        debug!(method = %self.signature_method(), matched, "verified signature");
        Ok(matched)
    }
}

/// HMAC-SHA1 keyed with the escaped client and resource owner secrets.
#[derive(Clone, Debug)]
pub struct HmacSha1Signer<'a> {
    secrets: Secrets<'a>,
}

impl<'a> HmacSha1Signer<'a> {
    pub fn new(secrets: Secrets<'a>) -> Self {
        HmacSha1Signer { secrets }
    }
}

impl OAuthSigner for HmacSha1Signer<'_> {
    fn signature_method(&self) -> SignatureMethod {
        SignatureMethod::HmacSha1
    }

    fn sign(&self, base_string: &str) -> Result<String> {
        Ok(hmac_sha1(&self.secrets.signing_key(), base_string))
    }
}

fn hmac_sha1(signing_key: &str, base_string: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// RSA-SHA1 (RSASSA-PKCS1-v1_5) with an injected key.
#[derive(Clone)]
pub struct RsaSha1Signer<K> {
    key: K,
}

impl<K> fmt::Debug for RsaSha1Signer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSha1Signer")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl<K: RsaSha1Key> RsaSha1Signer<K> {
    pub fn new(key: K) -> Self {
        RsaSha1Signer { key }
    }
}

impl RsaSha1Signer<SigningKey<Sha1>> {
    /// Signer for a PEM encoded private key, see [`key::load_private_key`].
    pub fn from_pem(pem: &str) -> Result<Self> {
        let private_key = key::load_private_key(pem)?;
        Ok(RsaSha1Signer::new(key::signing_key(private_key)))
    }
}

impl<K: RsaSha1Key> OAuthSigner for RsaSha1Signer<K> {
    fn signature_method(&self) -> SignatureMethod {
        SignatureMethod::RsaSha1
    }

    fn sign(&self, base_string: &str) -> Result<String> {
        let signature = self.key.sign_pkcs1v15_sha1(base_string.as_bytes())?;
        Ok(BASE64_STANDARD.encode(signature))
    }
}

/// PLAINTEXT: the signature is the signing key itself.
#[derive(Clone, Debug)]
pub struct PlainTextSigner<'a> {
    secrets: Secrets<'a>,
}

impl<'a> PlainTextSigner<'a> {
    pub fn new(secrets: Secrets<'a>) -> Self {
        PlainTextSigner { secrets }
    }
}

impl OAuthSigner for PlainTextSigner<'_> {
    fn signature_method(&self) -> SignatureMethod {
        SignatureMethod::PlainText
    }

    fn sign(&self, _base_string: &str) -> Result<String> {
        Ok(self.secrets.signing_key())
    }
}

/// Checks RSA-SHA1 signatures with the client's public key.
#[derive(Clone, Debug)]
pub struct RsaSha1Verifier {
    public_key: RsaPublicKey,
}

impl RsaSha1Verifier {
    pub fn new(public_key: RsaPublicKey) -> Self {
        RsaSha1Verifier { public_key }
    }

    /// `Ok(false)` for a signature that is not base64 or does not match.
    pub fn verify(&self, base_string: &str, signature: &str) -> Result<bool> {
        let bytes = match BASE64_STANDARD.decode(signature) {
            Ok(bytes) => bytes,
            Err(_) => return Ok(false),
        };
        let signature = match Signature::try_from(bytes.as_slice()) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        let verifying_key = VerifyingKey::<Sha1>::new(self.public_key.clone());
        let matched = verifying_key
            .verify(base_string.as_bytes(), &signature)
            .is_ok();
        debug!(method = %SignatureMethod::RsaSha1, matched, "verified signature");
        Ok(matched)
    }
}

/// Secret material for any of the signature methods.
pub enum KeyMaterial<'a> {
    Secrets(Secrets<'a>),
    Rsa(Box<dyn RsaSha1Key + 'a>),
}

impl fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMaterial::Secrets(secrets) => f.debug_tuple("Secrets").field(secrets).finish(),
            KeyMaterial::Rsa(_) => f.debug_tuple("Rsa").field(&"<redacted>").finish(),
        }
    }
}

impl<'a> From<Secrets<'a>> for KeyMaterial<'a> {
    fn from(secrets: Secrets<'a>) -> Self {
        KeyMaterial::Secrets(secrets)
    }
}

impl From<RsaPrivateKey> for KeyMaterial<'_> {
    fn from(private_key: RsaPrivateKey) -> Self {
        KeyMaterial::Rsa(Box::new(key::signing_key(private_key)))
    }
}

impl From<SigningKey<Sha1>> for KeyMaterial<'_> {
    fn from(key: SigningKey<Sha1>) -> Self {
        KeyMaterial::Rsa(Box::new(key))
    }
}

impl SignatureMethod {
    /// Pair this method with its key material.
    ///
    /// Fails with [`Error::KeyConfiguration`] when the material does not fit
    /// the method (RSA key for HMAC-SHA1, secrets for RSA-SHA1, ...).
    pub fn signer<'a>(self, key: KeyMaterial<'a>) -> Result<Box<dyn OAuthSigner + 'a>> {
        debug!(method = %self, "selected signature method");
        match (self, key) {
            (SignatureMethod::HmacSha1, KeyMaterial::Secrets(secrets)) => {
                Ok(Box::new(HmacSha1Signer::new(secrets)))
            }
            (SignatureMethod::PlainText, KeyMaterial::Secrets(secrets)) => {
                Ok(Box::new(PlainTextSigner::new(secrets)))
            }
            (SignatureMethod::RsaSha1, KeyMaterial::Rsa(key)) => {
                Ok(Box::new(RsaSha1Signer::new(key)))
            }
            (method, KeyMaterial::Secrets(_)) => Err(Error::key_configuration(format!(
                "{} needs an RSA private key, got shared secrets",
                method
            ))),
            (method, KeyMaterial::Rsa(_)) => Err(Error::key_configuration(format!(
                "{} needs shared secrets, got an RSA private key",
                method
            ))),
        }
    }
}

/// HMAC-SHA1 signature of `base_string`.
pub fn sign_hmac_sha1(
    base_string: &str,
    client_secret: &str,
    resource_owner_secret: &str,
) -> String {
    let secrets = Secrets::with_token_secret(client_secret, resource_owner_secret);
    hmac_sha1(&secrets.signing_key(), base_string)
}

/// RSA-SHA1 signature of `base_string` with a PEM encoded private key.
pub fn sign_rsa_sha1(base_string: &str, private_key_pem: &str) -> Result<String> {
    RsaSha1Signer::from_pem(private_key_pem)?.sign(base_string)
}

/// PLAINTEXT signature.
pub fn sign_plaintext(client_secret: &str, resource_owner_secret: &str) -> String {
    Secrets::with_token_secret(client_secret, resource_owner_secret).signing_key()
}
