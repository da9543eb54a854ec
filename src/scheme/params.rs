/// Parameters of the reference scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeParams {
    /// t, must be prime
    pub plaintext_modulus: u64,
    /// number of slots per ciphertext
    pub batch_capacity: usize,
}

impl SchemeParams {
    pub const fn new(plaintext_modulus: u64, batch_capacity: usize) -> Self {
        Self {
            plaintext_modulus,
            batch_capacity,
        }
    }
}

/// t = 257 with 1075 slots, enough for a 32x32 image.
pub const DEMO_PARAMS: SchemeParams = SchemeParams::new(257, 1075);
