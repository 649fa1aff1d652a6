//! Share link token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates share link tokens.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Token length in characters.
    length: usize,
}

impl LinkService {
    /// Creates a link service minting tokens of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Generates a random alphanumeric token from the thread-local CSPRNG.
    pub fn generate_token(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new(24)
    }
}
