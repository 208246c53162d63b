use sha2::{Digest, Sha256};

/// The shared password guarding the form.
///
/// Only the SHA-256 digest is kept so comparisons always look at
/// equal-length values, whatever the length of the attempt.
#[derive(Clone)]
pub struct AccessPassword {
    digest: [u8; 32],
}

impl AccessPassword {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: digest(secret),
        }
    }

    pub fn matches(&self, attempt: &str) -> bool {
        let attempt = digest(attempt);
        self.digest
            .iter()
            .zip(attempt.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for AccessPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessPassword(***)")
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
