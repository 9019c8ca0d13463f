use crate::error::{Result, ShortenerError};
use ripple_core::{MappingSet, ShortCode};
use ripple_generator::Generator;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, TypedBuilder)]
pub struct AllocatorSettings {
    /// Draws to try before giving up with [`ShortenerError::Exhausted`].
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

impl AllocatorSettings {
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Picks short codes not yet present in a mapping set.
///
/// Rejection sampling: draw a candidate from the generator, reject it if it
/// is already a key, and stop after a bounded number of draws. The mapping
/// set is only read; inserting and persisting the result is up to the caller.
#[derive(Debug)]
pub struct Allocator<G> {
    generator: G,
    settings: AllocatorSettings,
}

impl<G: Generator> Allocator<G> {
    pub fn new(generator: G) -> Self {
        Self::with_settings(generator, AllocatorSettings::default())
    }

    pub fn with_settings(generator: G, settings: AllocatorSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Returns a code that is not a key of `existing`.
    ///
    /// Fails with [`ShortenerError::Exhausted`] once `max_attempts` draws have
    /// all collided.
    pub fn allocate(&self, existing: &MappingSet) -> Result<ShortCode> {
        let max_attempts = self.settings.max_attempts;
        let mut attempts = 0;

        while attempts < max_attempts {
            attempts += 1;
            let candidate: ShortCode = self.generator.generate().into();

            if !existing.contains(&candidate) {
                debug!(code = %candidate, attempts, "allocated short code");
                return Ok(candidate);
            }
            trace!(code = %candidate, attempts, "short code taken, drawing again");
        }

        warn!(
            attempts,
            mappings = existing.len(),
            "short code space exhausted"
        );
        Err(ShortenerError::Exhausted { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_generator::{RandomHexGenerator, SeqHexGenerator};

    fn full_table() -> MappingSet {
        (0..=u16::MAX)
            .map(|v| (ShortCode::from_u16(v), format!("https://example.com/{v}")))
            .collect()
    }

    #[test]
    fn allocates_four_digit_hex() {
        let allocator = Allocator::new(RandomHexGenerator::new());

        let code = allocator.allocate(&MappingSet::new()).unwrap();

        assert_eq!(code.as_str().len(), 4);
        assert!(code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn skips_taken_codes() {
        let mut existing = MappingSet::new();
        for v in 0..3u16 {
            existing
                .insert(ShortCode::from_u16(v), "https://example.com")
                .unwrap();
        }
        let allocator = Allocator::new(SeqHexGenerator::new());

        let code = allocator.allocate(&existing).unwrap();

        assert_eq!(code.as_str(), "0003");
    }

    #[test]
    fn never_returns_existing_code() {
        let existing: MappingSet = (0..0xF000u16)
            .map(|v| (ShortCode::from_u16(v), "https://example.com".to_string()))
            .collect();
        let allocator = Allocator::new(RandomHexGenerator::seeded(1));

        for _ in 0..50 {
            let code = allocator.allocate(&existing).unwrap();
            assert!(!existing.contains(&code));
        }
    }

    #[test]
    fn exhausted_on_full_table() {
        let existing = full_table();
        let allocator = Allocator::new(RandomHexGenerator::new());

        let err = allocator.allocate(&existing).unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::Exhausted {
                attempts: DEFAULT_MAX_ATTEMPTS
            }
        ));
        assert_eq!(existing.len(), 65536);
    }

    #[test]
    fn gives_up_after_configured_attempts() {
        let mut existing = MappingSet::new();
        for v in 0..10u16 {
            existing
                .insert(ShortCode::from_u16(v), "https://example.com")
                .unwrap();
        }
        let settings = AllocatorSettings::builder().max_attempts(5).build();
        let allocator = Allocator::with_settings(SeqHexGenerator::new(), settings);

        let err = allocator.allocate(&existing).unwrap_err();

        assert!(matches!(err, ShortenerError::Exhausted { attempts: 5 }));
    }

    #[test]
    fn last_attempt_can_still_succeed() {
        let mut existing = MappingSet::new();
        for v in 0..4u16 {
            existing
                .insert(ShortCode::from_u16(v), "https://example.com")
                .unwrap();
        }
        let settings = AllocatorSettings::builder().max_attempts(5).build();
        let allocator = Allocator::with_settings(SeqHexGenerator::new(), settings);

        assert_eq!(allocator.allocate(&existing).unwrap().as_str(), "0004");
    }

    #[test]
    fn default_settings() {
        assert_eq!(AllocatorSettings::default().max_attempts(), 100);
    }
}
