use crate::Generator;
use ripple_core::ShortCode;
use std::sync::atomic::{AtomicU32, Ordering};

/// A sequential hex code generator: `0000`, `0001`, ... `ffff`, then wraps.
///
/// Useful where reproducible codes matter more than spreading them out, e.g.
/// seeding fixtures or driving the allocator through known collisions.
#[derive(Debug)]
pub struct SeqHexGenerator {
    counter: AtomicU32,
}

impl Clone for SeqHexGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU32::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqHexGenerator {
    /// Creates a generator starting at `0000`.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting at `offset`.
    pub fn with_offset(offset: u16) -> Self {
        Self {
            counter: AtomicU32::new(u32::from(offset)),
        }
    }
}

impl Default for SeqHexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqHexGenerator {
    type Output = u16;

    fn generate(&self) -> u16 {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        // truncation is the wrap-around
        count as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(generator: &SeqHexGenerator) -> ShortCode {
        generator.generate().into()
    }

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqHexGenerator::new();

        assert_eq!(next(&generator).as_str(), "0000");
        assert_eq!(next(&generator).as_str(), "0001");
        assert_eq!(next(&generator).as_str(), "0002");
    }

    #[test]
    fn with_offset() {
        let generator = SeqHexGenerator::with_offset(0x00fe);

        assert_eq!(next(&generator).as_str(), "00fe");
        assert_eq!(next(&generator).as_str(), "00ff");
        assert_eq!(next(&generator).as_str(), "0100");
    }

    #[test]
    fn wraps_after_ffff() {
        let generator = SeqHexGenerator::with_offset(u16::MAX);

        assert_eq!(next(&generator).as_str(), "ffff");
        assert_eq!(next(&generator).as_str(), "0000");
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqHexGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(next(&generator).as_str(), "0002");
        assert_eq!(next(&cloned).as_str(), "0002");
    }
}
