//! Signed Bearer Tokens
//!
//! JWT compact serialization restricted to HS256:
//! `base64url(header).base64url(claims).base64url(HMAC-SHA256(signing input))`.
//! Expiry is a claim-level concern and is checked by the caller.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

impl Header {
    fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: Some(TOKEN_TYPE.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Not three dot-separated base64url segments
    #[error("Malformed token")]
    Malformed,

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("Invalid signing key")]
    InvalidKey,
}

struct Parts<'a> {
    signing_input: &'a str,
    header: &'a str,
    claims: &'a str,
    signature: &'a str,
}

fn split(token: &str) -> Result<Parts<'_>, TokenError> {
    let (signing_input, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
    let (header, claims) = signing_input
        .split_once('.')
        .ok_or(TokenError::Malformed)?;
    if header.is_empty() || claims.is_empty() || signature.is_empty() || claims.contains('.') {
        return Err(TokenError::Malformed);
    }
    Ok(Parts {
        signing_input,
        header,
        claims,
        signature,
    })
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = from_base64url(segment).map_err(|_| TokenError::Malformed)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Sign `claims` into a compact HS256 token
pub fn sign<T: Serialize>(claims: &T, secret: &[u8]) -> Result<String, TokenError> {
    let header = to_base64url(&serde_json::to_vec(&Header::hs256())?);
    let payload = to_base64url(&serde_json::to_vec(claims)?);
    let signing_input = format!("{header}.{payload}");
    let signature =
        hmac_sha256(secret, signing_input.as_bytes()).map_err(|_| TokenError::InvalidKey)?;
    Ok(format!("{signing_input}.{}", to_base64url(&signature)))
}

/// Verify the signature and decode the claims
pub fn verify<T: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<T, TokenError> {
    let parts = split(token)?;

    let header: Header = decode_segment(parts.header)?;
    if header.alg != ALGORITHM {
        return Err(TokenError::UnsupportedAlgorithm(header.alg));
    }

    let signature = from_base64url(parts.signature).map_err(|_| TokenError::Malformed)?;
    if !verify_hmac_sha256(secret, parts.signing_input.as_bytes(), &signature) {
        return Err(TokenError::BadSignature);
    }

    decode_segment(parts.claims)
}

/// Decode the claims without checking the signature.
///
/// For holders of a token that cannot verify it (clients reading their own
/// session). Never use the result for authorization.
pub fn decode_unverified<T: DeserializeOwned>(token: &str) -> Result<T, TokenError> {
    let parts = split(token)?;
    decode_segment(parts.claims)
}
