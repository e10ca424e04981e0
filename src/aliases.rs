//! Secret types used throughout folder-lock
//!
//! Every value here is wiped from memory on drop.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::consts::{DIGEST_LEN, SALT_LEN};

// Fixed-size secrets
pub type Salt16 = Zeroizing<[u8; SALT_LEN]>; // per-hash random salt
pub type Digest32 = Zeroizing<[u8; DIGEST_LEN]>; // SHA-256 output of salt ‖ password

// Dynamic secrets
pub type FolderPassword = Zeroizing<String>; // plaintext typed into an unlock or editor form

/// Generate a new random salt from the OS-seeded thread CSPRNG
#[inline]
pub fn random_salt() -> Salt16 {
    let mut salt = Zeroizing::new([0u8; SALT_LEN]);
    rand::rng().fill_bytes(&mut *salt);
    salt
}
