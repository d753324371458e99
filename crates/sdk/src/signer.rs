//! Signing capability.
//!
//! Transactions are signed through the [`Signer`] trait so a local key and an
//! external signer (HSM, wallet, remote service) share one async code path.

use std::fmt;

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier, VerifyingKey};
use rand::Rng;

use crate::error::{Result, SdkError};

/// Length of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// An Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Creates a public key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Signing`] if the slice is not 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| SdkError::Signing {
            message: format!("public key must be {PUBLIC_KEY_LENGTH} bytes, got {}", bytes.len()),
        })?;
        Ok(Self(raw))
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Checks an Ed25519 signature over `message`.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        key.verify(message, &signature).is_ok()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

/// Produces signatures over transaction body bytes.
///
/// Implementations must be `Send + Sync`; one signer is shared by every
/// in-flight request of a client.
#[tonic::async_trait]
pub trait Signer: Send + Sync + fmt::Debug {
    /// Public key matching the signatures this signer produces.
    fn public_key(&self) -> PublicKey;

    /// Signs `message`, returning the raw signature bytes.
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// Signer backed by an in-memory Ed25519 key.
#[derive(Clone)]
pub struct LocalSigner {
    key: SigningKey,
}

impl LocalSigner {
    /// Creates a signer from a 32-byte secret key.
    #[must_use]
    pub fn from_bytes(secret: &[u8; 32]) -> Self {
        Self { key: SigningKey::from_bytes(secret) }
    }

    /// Creates a signer from a hex-encoded 32-byte secret key.
    ///
    /// A `0x` prefix is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Signing`] if the input is not 64 hex characters.
    pub fn from_hex(secret: &str) -> Result<Self> {
        let trimmed = secret.trim().trim_start_matches("0x");
        let bytes = hex::decode(trimmed)
            .map_err(|e| SdkError::Signing { message: format!("invalid hex key: {e}") })?;
        let raw: [u8; 32] = bytes.as_slice().try_into().map_err(|_| SdkError::Signing {
            message: format!("secret key must be 32 bytes, got {}", bytes.len()),
        })?;
        Ok(Self::from_bytes(&raw))
    }

    /// Generates a new random key.
    #[must_use]
    pub fn generate() -> Self {
        let secret: [u8; 32] = rand::rng().random();
        Self::from_bytes(&secret)
    }

    /// Signs synchronously; the async [`Signer::sign`] delegates here.
    #[must_use]
    pub fn sign_sync(&self, message: &[u8]) -> Vec<u8> {
        self.key.sign(message).to_bytes().to_vec()
    }
}

impl fmt::Debug for LocalSigner {
    // Never print the secret.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner").field("public_key", &self.public_key()).finish()
    }
}

#[tonic::async_trait]
impl Signer for LocalSigner {
    fn public_key(&self) -> PublicKey {
        PublicKey(self.key.verifying_key().to_bytes())
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.sign_sync(message))
    }
}
