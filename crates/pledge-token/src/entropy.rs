use rand::TryRngCore;
use rand::rngs::OsRng;

/// Source of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fill `buf` completely or fail. Never falls back to weaker randomness.
    fn fill(&self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// The operating system's random-byte generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    type Error = rand::rand_core::OsError;

    fn fill(&self, buf: &mut [u8]) -> Result<(), Self::Error> { OsRng.try_fill_bytes(buf) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
