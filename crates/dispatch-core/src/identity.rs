// Rust guideline compliant 2026-10-18

//! Courier id generation and token validation.

use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum length of a courier or order id.
pub const MAX_TOKEN_LEN: usize = 64;

/// Prefix applied to generated courier ids.
pub const COURIER_ID_PREFIX: &str = "c-";

/// Returns true if `value` is a valid id token.
///
/// A token is 1-64 characters drawn from `[A-Za-z0-9_-]`.
pub fn is_valid_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_TOKEN_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Source of candidate courier ids.
///
/// Candidates are not required to be unique; callers check for collisions.
pub trait IdGenerator: Send {
    /// Produces the next candidate id.
    fn generate(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String + Send,
{
    fn generate(&mut self) -> String {
        self()
    }
}

/// Default generator producing `c-` followed by eight hex digits.
///
/// Each candidate hashes the wall clock together with a per-generator counter.
#[derive(Debug, Default)]
pub struct HashIdGenerator {
    counter: u64,
}

impl HashIdGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for HashIdGenerator {
    fn generate(&mut self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        self.counter = self.counter.wrapping_add(1);
        generate_id(nanos, self.counter)
    }
}

fn generate_id(nanos: u128, counter: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(counter.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", COURIER_ID_PREFIX, &hex[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_rules() {
        assert!(is_valid_token("c-1"));
        assert!(is_valid_token("A_b-9"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("c 1"));
        assert!(!is_valid_token("c/1"));
        assert!(is_valid_token(&"a".repeat(64)));
        assert!(!is_valid_token(&"a".repeat(65)));
    }

    #[test]
    fn test_hash_generator_produces_valid_distinct_ids() {
        let mut generator = HashIdGenerator::new();
        let first = generator.generate();
        let second = generator.generate();
        assert!(first.starts_with(COURIER_ID_PREFIX));
        assert_eq!(first.len(), COURIER_ID_PREFIX.len() + 8);
        assert!(is_valid_token(&first));
        assert_ne!(first, second);
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut generator = move || {
            n += 1;
            format!("c-{}", n)
        };
        assert_eq!(IdGenerator::generate(&mut generator), "c-1");
        assert_eq!(IdGenerator::generate(&mut generator), "c-2");
    }
}
