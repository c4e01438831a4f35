//! Salted password digests.
//!
//! Passwords are stored as `salt$digest` where both halves are lowercase hex. The
//! digest is SHA-256 over the salt bytes followed by the UTF-8 password.

use std::fmt;

use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::server::error::{internal::InternalError, AppError};

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

/// A parsed `salt$digest` password record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl PasswordDigest {
    /// Hashes a plaintext password with a freshly generated random salt.
    ///
    /// # Arguments
    /// - `password` - The plaintext password
    ///
    /// # Returns
    /// - `PasswordDigest` - Salted digest ready to be stored
    pub fn hash(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);

        Self::with_salt(salt.to_vec(), password)
    }

    fn with_salt(salt: Vec<u8>, password: &str) -> Self {
        let digest = Sha256::new()
            .chain_update(&salt)
            .chain_update(password.as_bytes())
            .finalize()
            .to_vec();

        Self { salt, digest }
    }

    /// Parses a stored `salt$digest` string.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the stored password, reported on failure
    /// - `stored` - The stored password column
    ///
    /// # Returns
    /// - `Ok(PasswordDigest)` - Parsed digest
    /// - `Err(AppError::InternalErr(MalformedPasswordDigest))` - Stored value is not
    ///   two hex halves separated by `$`
    pub fn parse(user_id: i32, stored: &str) -> Result<Self, AppError> {
        let malformed = || InternalError::MalformedPasswordDigest { user_id };

        let (salt, digest) = stored.split_once(SEPARATOR).ok_or_else(malformed)?;
        let salt = hex::decode(salt).map_err(|_| malformed())?;
        let digest = hex::decode(digest).map_err(|_| malformed())?;

        if salt.is_empty() || digest.len() != Sha256::output_size() {
            return Err(malformed().into());
        }

        Ok(Self { salt, digest })
    }

    /// Checks a plaintext password against this digest.
    ///
    /// The digests are compared in constant time.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = Self::with_salt(self.salt.clone(), password);
        bool::from(candidate.digest.as_slice().ct_eq(self.digest.as_slice()))
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            hex::encode(&self.salt),
            SEPARATOR,
            hex::encode(&self.digest)
        )
    }
}
