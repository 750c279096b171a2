use sha2::{Digest, Sha256};

/// Shared secret for the management API. Only its SHA-256 digest is kept.
#[derive(Clone)]
pub struct ManagementToken {
    digest: [u8; 32],
}

impl ManagementToken {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            digest: digest(secret),
        }
    }

    /// Compares digests so the check does not short-circuit on the raw secret.
    pub fn verify(&self, presented: &str) -> bool {
        let candidate = digest(presented);
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for ManagementToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ManagementToken(..)")
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
