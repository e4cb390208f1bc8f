use anyhow::Result;

use crate::domain::value_objects::passwords::unusable_password;

/// One-way salted hashing of account credentials.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    fn hash_password(&self, plain: &str) -> Result<String>;
    fn verify_password(&self, plain: &str, hash: &str) -> Result<bool>;
}

/// Value written to the `password` column: a salted hash when a password is
/// given, an unusable marker otherwise.
pub fn stored_credential<H>(hasher: &H, password: Option<&str>) -> Result<String>
where
    H: CredentialHasher + ?Sized,
{
    match password {
        Some(plain) => hasher.hash_password(plain),
        None => Ok(unusable_password()),
    }
}
