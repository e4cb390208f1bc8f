use rand::{Rng, distributions::Alphanumeric};

pub const UNUSABLE_PASSWORD_PREFIX: char = '!';
pub const UNUSABLE_PASSWORD_SUFFIX_LEN: usize = 40;

/// Credential stored for accounts created without a password. No plaintext
/// verifies against it since it never parses as a PHC hash.
pub fn unusable_password() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{UNUSABLE_PASSWORD_PREFIX}{suffix}")
}

pub fn is_usable_password(stored: &str) -> bool {
    !stored.is_empty() && !stored.starts_with(UNUSABLE_PASSWORD_PREFIX)
}
