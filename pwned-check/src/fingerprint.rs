//! Maps a candidate credential to its SHA1 digest and splits it into the
//! 5-character range prefix and 35-character suffix used by the k-anonymity
//! lookup protocol. Pure computation, no network access.

use std::borrow::Cow;
use std::fmt;

use sha1::{Digest as _, Sha1};

use crate::error::Error;

/// Hex lookup table for digest rendering.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Length of a rendered SHA1 digest in hex characters.
pub const DIGEST_LEN: usize = 40;

/// Length of the range query prefix (first 5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// A password candidate as supplied by a caller.
///
/// Models the loosely-typed input contract: text is hashed as-is, integers
/// are coerced to their decimal text representation first, and booleans and
/// null are rejected explicitly rather than silently coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Text(String),
    Integer(i64),
    Bool(bool),
    Null,
}

impl Credential {
    /// Returns the cleartext to hash, coercing integers to decimal text.
    ///
    /// Booleans and null fail with [`Error::InvalidInputType`] even though
    /// some callers treat booleans as integers. That rejection is a
    /// deliberate type-strictness contract.
    pub fn cleartext(&self) -> Result<Cow<'_, str>, Error> {
        match self {
            Credential::Text(text) => Ok(Cow::Borrowed(text)),
            Credential::Integer(n) => Ok(Cow::Owned(n.to_string())),
            Credential::Bool(_) => Err(Error::InvalidInputType { kind: "boolean" }),
            Credential::Null => Err(Error::InvalidInputType { kind: "null" }),
        }
    }
}

impl From<&str> for Credential {
    fn from(text: &str) -> Self {
        Credential::Text(text.to_string())
    }
}

impl From<String> for Credential {
    fn from(text: String) -> Self {
        Credential::Text(text)
    }
}

impl From<i64> for Credential {
    fn from(n: i64) -> Self {
        Credential::Integer(n)
    }
}

/// A SHA1 digest rendered as 40 uppercase hex characters.
///
/// `prefix()` and `suffix()` slice the same buffer, so their concatenation
/// always reconstructs the digest exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The 5-character range query key. The only part of the digest that
    /// ever goes over the wire.
    pub fn prefix(&self) -> &str {
        std::str::from_utf8(&self.0[..PREFIX_LEN]).unwrap()
    }

    /// The remaining 35 characters, matched locally against the range
    /// response and never transmitted.
    pub fn suffix(&self) -> &str {
        std::str::from_utf8(&self.0[PREFIX_LEN..]).unwrap()
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the uppercase hex SHA1 digest of a credential's UTF-8 bytes.
///
/// Deterministic and side-effect free. Fails only when the credential is
/// not text or integer-coercible.
pub fn fingerprint(credential: &Credential) -> Result<Digest, Error> {
    let cleartext = credential.cleartext()?;
    let hash: [u8; 20] = Sha1::digest(cleartext.as_bytes()).into();

    let mut hex = [0u8; DIGEST_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0F) as usize];
    }

    Ok(Digest(hex))
}
