//! Booking reference generation and clock
//!
//! Both are injected into the booking controller so tests can pin the
//! reference and timestamp of a confirmation.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;

use super::model::BookingReference;

/// Default prefix for booking codes
pub const DEFAULT_REFERENCE_PREFIX: &str = "PW";

/// Number of random characters after the prefix
pub const REFERENCE_SUFFIX_LEN: usize = 6;

const BASE36_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces booking references
pub trait ReferenceGenerator: Send + Sync {
    fn generate(&self) -> BookingReference;
}

/// `PREFIX-XXXXXX` with six random base-36 characters.
///
/// Not collision-checked; uniqueness is probabilistic only.
#[derive(Debug, Clone)]
pub struct RandomReferenceGenerator {
    prefix: String,
}

impl RandomReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for RandomReferenceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PREFIX)
    }
}

impl ReferenceGenerator for RandomReferenceGenerator {
    fn generate(&self) -> BookingReference {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..REFERENCE_SUFFIX_LEN)
            .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
            .collect();
        BookingReference::new(format!("{}-{}", self.prefix, suffix))
    }
}

/// Deterministic `PREFIX-000001`, `PREFIX-000002`, ... for tests and demos
#[derive(Debug)]
pub struct SequentialReferenceGenerator {
    prefix: String,
    counter: AtomicU32,
}

impl SequentialReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU32::new(1),
        }
    }
}

impl ReferenceGenerator for SequentialReferenceGenerator {
    fn generate(&self) -> BookingReference {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        BookingReference::new(format!("{}-{:06}", self.prefix, n))
    }
}

/// Source of the booking timestamp
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_reference_format() {
        let generator = RandomReferenceGenerator::default();
        for _ in 0..50 {
            let reference = generator.generate();
            let (prefix, suffix) = reference
                .as_str()
                .split_once('-')
                .expect("reference has a dash");
            assert_eq!(prefix, "PW");
            assert_eq!(suffix.len(), REFERENCE_SUFFIX_LEN);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn custom_prefix() {
        let reference = RandomReferenceGenerator::new("LHR").generate();
        assert!(reference.as_str().starts_with("LHR-"));
    }

    #[test]
    fn sequential_references_increment() {
        let generator = SequentialReferenceGenerator::new("PW");
        assert_eq!(generator.generate().as_str(), "PW-000001");
        assert_eq!(generator.generate().as_str(), "PW-000002");
    }
}
