use subtle::ConstantTimeEq;

/// Decides whether a presented password matches the stored credential.
///
/// Login goes through this trait only, so a salted-hash scheme can replace
/// the plaintext comparison without touching the services that call it.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, presented: &str, stored: &str) -> bool;
}

/// Stored credentials are plaintext; compares in constant time.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextCredentialVerifier;

impl CredentialVerifier for PlaintextCredentialVerifier {
    fn verify(&self, presented: &str, stored: &str) -> bool {
        presented.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}
