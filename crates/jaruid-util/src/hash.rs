use base64::Engine;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-256 hash of a byte slice, returning standard base64.
///
/// Used for the jar content hash (§4.2), which is computed over the
/// concatenation of each entry's *uncompressed* bytes rather than the raw
/// jar file, so two jars differing only in deflate level hash identically.
pub fn sha256_base64(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}

/// Incremental hasher over a sequence of uncompressed entry byte slices,
/// producing the same digest as `sha256_base64` over their concatenation.
#[derive(Default)]
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    pub fn finish_base64(self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.hasher.finalize())
    }
}
