use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ripple_core::ShortCode;

/// Draws four digit hex codes uniformly over the whole 16-bit space.
///
/// Not cryptographically secure; codes only need to be spread evenly so that
/// collisions stay rare, not unpredictable.
#[derive(Debug)]
pub struct RandomHexGenerator {
    rng: Mutex<StdRng>,
}

impl RandomHexGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed, producing a reproducible
    /// sequence of codes.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws the raw 16-bit value behind the next code.
    pub fn next_value(&self) -> u16 {
        self.rng.lock().gen::<u16>()
    }
}

impl Default for RandomHexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomHexGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        ShortCode::from_u16(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_four_lowercase_hex_digits() {
        let generator = RandomHexGenerator::new();

        for _ in 0..1000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), 4);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let a = RandomHexGenerator::seeded(42);
        let b = RandomHexGenerator::seeded(42);

        for _ in 0..16 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn draws_spread_over_the_space() {
        let generator = RandomHexGenerator::seeded(7);

        let distinct: HashSet<_> = (0..1000).map(|_| generator.next_value()).collect();
        // 1000 uniform draws over 65536 values collide only a handful of times.
        assert!(distinct.len() > 950);

        let high = (0..1000).filter(|_| generator.next_value() >= 0x8000).count();
        assert!((400..600).contains(&high));
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomHexGenerator>();
    }
}
