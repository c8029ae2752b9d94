//! Signatures of transparent redirect payloads and OAuth connect URLs.
//!
//! Payloads are signed with an HMAC keyed by the digest of the secret (the private key
//! or the OAuth client secret) and encoded as lowercase hex. Transparent redirect uses
//! SHA-1, OAuth connect URLs use SHA-256.

use crate::Error;
use anyhow::anyhow;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Hash function backing a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Name of the algorithm as sent in the `algorithm` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
        }
    }
}

fn sign(algorithm: Algorithm, key: &str, data: &str) -> Result<Vec<u8>, Error> {
    Ok(match algorithm {
        Algorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(&Sha1::digest(key.as_bytes()))
                .map_err(|e| Error::Other(anyhow!(e)))?;
            mac.update(data.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(&Sha256::digest(key.as_bytes()))
                .map_err(|e| Error::Other(anyhow!(e)))?;
            mac.update(data.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
    })
}

/// Hex encoded HMAC of `data`, keyed by the digest of `key`.
pub fn hexdigest(algorithm: Algorithm, key: &str, data: &str) -> Result<String, Error> {
    Ok(hex::encode(sign(algorithm, key, data)?))
}

/// Checks in constant time that `signature` is the [`hexdigest`] of `data`.
pub fn verify(algorithm: Algorithm, key: &str, data: &str, signature: &str) -> Result<bool, Error> {
    let expected = hexdigest(algorithm, key, data)?;
    Ok(secure_compare(&expected, &signature.to_ascii_lowercase()))
}

/// Compares two strings in time independent of where they differ.
pub fn secure_compare(left: &str, right: &str) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.bytes()
        .zip(right.bytes())
        .fold(0u8, |acc, (l, r)| acc | (l ^ r))
        == 0
}
