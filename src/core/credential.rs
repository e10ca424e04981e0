// src/core/credential.rs
//! Credential codec — salted password hashing and verification
//!
//! Pure CPU work: no I/O, no knowledge of folders. A stored hash is the
//! text `base64(salt):base64(sha256(salt ‖ password))`, persisted by the
//! data layer as an opaque field on the folder record.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::aliases::{random_salt, Digest32, FolderPassword};
use crate::consts::{DIGEST_LEN, HASH_SEPARATOR, SALT_LEN};
use crate::enums::DigestAlgorithm;
use crate::error::CoreError;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, padded on encode, padding optional on decode
const B64: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Accepted on decode only (`-`/`_` instead of `+`/`/`)
const B64_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

const ALGORITHM: DigestAlgorithm = DigestAlgorithm::Sha256;

/// Textual `salt:digest` pair; "not protected" is `Option::None`, never an empty hash.
///
/// Deserializing does not validate: a corrupt value read back from storage
/// still marks its folder as protected, it just never verifies.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct StoredHash(String);

impl StoredHash {
    /// Validate the textual form: exactly two base64 parts, a 16-byte salt and a 32-byte digest
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        decode_checked(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Wrap text read back from storage as-is
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredHash(..)")
    }
}

impl fmt::Display for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StoredHash {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StoredHash {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode_checked(&s)?;
        Ok(Self(s))
    }
}

impl<'de> Deserialize<'de> for StoredHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_stored)
    }
}

impl From<StoredHash> for String {
    fn from(hash: StoredHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for StoredHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Decoded halves of a stored hash
struct Decoded {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl Decoded {
    /// Full-length comparison; a length mismatch is simply "not equal"
    fn matches(&self, password: &[u8]) -> bool {
        let actual = compute_digest(ALGORITHM, &self.salt, password);
        self.digest.as_slice() == actual.as_slice()
    }
}

fn decode(stored: &str) -> Result<Decoded, CoreError> {
    let mut parts = stored.split(HASH_SEPARATOR);
    let (Some(salt), Some(digest), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CoreError::MalformedHash(
            "expected exactly two ':'-separated parts".into(),
        ));
    };

    Ok(Decoded {
        salt: decode_part(salt, "salt")?,
        digest: decode_part(digest, "digest")?,
    })
}

/// Strict form used when accepting a new stored hash; verification stays lenient
fn decode_checked(stored: &str) -> Result<Decoded, CoreError> {
    let decoded = decode(stored)?;
    check_len(&decoded.salt, SALT_LEN, "salt")?;
    check_len(&decoded.digest, DIGEST_LEN, "digest")?;
    Ok(decoded)
}

fn check_len(bytes: &[u8], expected: usize, what: &str) -> Result<(), CoreError> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(CoreError::MalformedHash(format!(
            "{what} must decode to {expected} bytes, got {}",
            bytes.len()
        )))
    }
}

fn decode_part(part: &str, what: &str) -> Result<Vec<u8>, CoreError> {
    B64.decode(part)
        .or_else(|_| B64_URL_SAFE.decode(part))
        .map_err(|_| CoreError::MalformedHash(format!("{what} is not valid base64")))
}

fn compute_digest(algorithm: DigestAlgorithm, salt: &[u8], password: &[u8]) -> Digest32 {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let out: [u8; DIGEST_LEN] = Sha256::new()
                .chain_update(salt)
                .chain_update(password)
                .finalize()
                .into();
            Digest32::new(out)
        }
    }
}

fn hash_bytes(password: &[u8]) -> StoredHash {
    let salt = random_salt();
    let digest = compute_digest(ALGORITHM, salt.as_slice(), password);
    StoredHash(format!(
        "{}{HASH_SEPARATOR}{}",
        B64.encode(salt.as_slice()),
        B64.encode(digest.as_slice())
    ))
}

fn verify_bytes(password: &[u8], stored: &str) -> bool {
    match decode(stored) {
        Ok(decoded) => decoded.matches(password),
        Err(err) => {
            debug!(%err, "rejecting stored hash");
            false
        }
    }
}

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> StoredHash {
    hash_bytes(password.as_bytes())
}

/// Check a plaintext against stored text; malformed input is `false`, never an error
pub fn verify_password(password: &str, stored: &str) -> bool {
    verify_bytes(password.as_bytes(), stored)
}

pub fn verify_stored(password: &str, stored: &StoredHash) -> bool {
    verify_bytes(password.as_bytes(), stored.as_str())
}

pub fn hash_secret(password: &FolderPassword) -> StoredHash {
    hash_bytes(password.as_bytes())
}

pub fn verify_secret(password: &FolderPassword, stored: &str) -> bool {
    verify_bytes(password.as_bytes(), stored)
}
