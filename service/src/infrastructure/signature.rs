use anyhow::anyhow;
use ed25519_dalek::{Signer, SigningKey};

use crate::domain::signature::DecisionSigner;

/// Signs decision statements with the outlet's ed25519 key.
///
/// Does not implement `Debug` or `Serialize` — the private key must not end
/// up in logs or responses.
#[derive(Clone)]
pub struct Ed25519DecisionSigner {
    signing_key: SigningKey,
}

impl Ed25519DecisionSigner {
    /// Build from the 64-character hex seed carried in the settings.
    pub fn from_hex(seed_hex: &str) -> Result<Self, anyhow::Error> {
        let seed_hex = seed_hex.trim().to_lowercase();
        if seed_hex.len() != 64 {
            return Err(anyhow!(
                "signing key hex must be 64 chars, got {}",
                seed_hex.len()
            ));
        }

        let bytes = hex_to_bytes(&seed_hex)?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);

        Ok(Self {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    pub fn verifying_key(&self) -> ed25519_dalek::VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl DecisionSigner for Ed25519DecisionSigner {
    fn sign(&self, statement: &str) -> String {
        let signature = self.signing_key.sign(statement.as_bytes());
        signature.to_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, anyhow::Error> {
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| anyhow!("invalid hex at offset {i}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};

    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    #[test]
    fn signatures_are_hex_and_deterministic() {
        let signer = Ed25519DecisionSigner::from_hex(SEED).unwrap();
        let statement = "Autorisation de publication accordée par J. Dupont le 02/03/2024.";

        let first = signer.sign(statement);
        let second = signer.sign(statement);

        assert_eq!(first, second);
        assert_eq!(first.len(), 128);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signatures_verify_against_the_public_key() {
        let signer = Ed25519DecisionSigner::from_hex(SEED).unwrap();
        let statement = "Autorisation de publication refusée par J. Dupont le 02/03/2024.";

        let sig_hex = signer.sign(statement);
        let sig_bytes = hex_to_bytes(&sig_hex).unwrap();
        let signature = Signature::from_bytes(&sig_bytes.try_into().unwrap());

        signer
            .verifying_key()
            .verify(statement.as_bytes(), &signature)
            .expect("signature must verify");
    }

    #[test]
    fn different_statements_sign_differently() {
        let signer = Ed25519DecisionSigner::from_hex(SEED).unwrap();
        assert_ne!(signer.sign("accordée"), signer.sign("refusée"));
    }

    #[test]
    fn malformed_seeds_are_rejected() {
        assert!(Ed25519DecisionSigner::from_hex("abcd").is_err());
        assert!(Ed25519DecisionSigner::from_hex(&"zz".repeat(32)).is_err());
    }
}
