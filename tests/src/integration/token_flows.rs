//! # Token Flows
//!
//! Randomizer wired the way a composition root does it: configuration file,
//! shared `Arc`, many threads drawing at once.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use proptest::prelude::*;
    use wd_01_randomizer::{
        contains, is_canonical_guid, union, Base64Encoder, CharacterSet, FixedHostIdentity,
        FixedTimeSource, MemorySecurityLogger, RandomAlgorithm, Randomizer, RandomizerApi,
        SecureRandomSource, SequenceRandomSource, Sha512Hasher, StaticConfigProvider,
        TomlConfigProvider,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn production() -> Arc<Randomizer<SecureRandomSource>> {
        Arc::new(Randomizer::from_config(
            &StaticConfigProvider::new(),
            Arc::new(MemorySecurityLogger::new()),
        ))
    }

    /// Fully deterministic randomizer: fixed host, clock and draws.
    fn pinned(hasher: Sha512Hasher) -> Randomizer<SequenceRandomSource> {
        Randomizer::new(
            Arc::new(SequenceRandomSource::new(vec![5, 17, 33, 60])),
            Arc::new(Base64Encoder::new()),
            Arc::new(hasher),
            Arc::new(MemorySecurityLogger::new()),
        )
        .with_host_identity(Arc::new(FixedHostIdentity::new("warden-1/10.1.2.3")))
        .with_time_source(Arc::new(FixedTimeSource::new(1_700_000_000_000)))
    }

    // =============================================================================
    // CONFIGURATION → RANDOMIZER
    // =============================================================================

    #[test]
    fn test_toml_file_drives_algorithm_and_salt() {
        let path = std::env::temp_dir().join(format!("warden-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[randomizer]\nalgorithm = \"OS\"\nguid_salt = \"pepper\"\n\n[hasher]\niterations = 2\n",
        )
        .unwrap();

        let config = TomlConfigProvider::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let logger = Arc::new(MemorySecurityLogger::new());
        let randomizer = Randomizer::from_config(&config, logger.clone());

        assert_eq!(randomizer.source().algorithm(), Some(RandomAlgorithm::OsRng));
        assert!(!randomizer.is_degraded());
        assert!(logger.is_empty());
        assert!(is_canonical_guid(&randomizer.random_guid().unwrap()));
    }

    #[test]
    fn test_unknown_algorithm_still_serves_tokens() {
        let config = TomlConfigProvider::parse("[randomizer]\nalgorithm = \"Fortuna\"\n").unwrap();
        let logger = Arc::new(MemorySecurityLogger::new());
        let randomizer = Randomizer::from_config(&config, logger.clone());

        assert!(randomizer.is_degraded());
        assert_eq!(logger.len(), 1);
        assert!(logger.entries()[0].contains("Fortuna"));

        let token = randomizer.random_string(24, &CharacterSet::alphanumerics());
        assert_eq!(token.len(), 24);
        // the failure is logged once at construction, not per draw
        assert_eq!(logger.len(), 1);
    }

    // =============================================================================
    // GUID DERIVATION
    // =============================================================================

    #[test]
    fn test_guid_is_pure_function_of_inputs() {
        let a = pinned(Sha512Hasher::new("master", 4)).random_guid().unwrap();
        let b = pinned(Sha512Hasher::new("master", 4)).random_guid().unwrap();
        assert_eq!(a, b);
        assert!(is_canonical_guid(&a));
    }

    #[test]
    fn test_guid_depends_on_hasher_settings() {
        let base = pinned(Sha512Hasher::new("master", 4)).random_guid().unwrap();
        let other_salt = pinned(Sha512Hasher::new("other", 4)).random_guid().unwrap();
        let other_rounds = pinned(Sha512Hasher::new("master", 5)).random_guid().unwrap();
        let other_seed = pinned(Sha512Hasher::new("master", 4))
            .with_guid_salt("pepper")
            .random_guid()
            .unwrap();

        assert_ne!(base, other_salt);
        assert_ne!(base, other_rounds);
        assert_ne!(base, other_seed);
    }

    #[test]
    fn test_shared_randomizer_concurrent_guids_unique() {
        let randomizer = production();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let randomizer = Arc::clone(&randomizer);
                thread::spawn(move || {
                    (0..200)
                        .map(|_| randomizer.random_guid().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let guids: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert!(guids.iter().all(|g| is_canonical_guid(g)));

        let unique: HashSet<_> = guids.iter().collect();
        assert_eq!(unique.len(), guids.len());
    }

    // =============================================================================
    // TOKENS
    // =============================================================================

    #[test]
    fn test_password_alphabet_from_union() {
        let alphabet = union(&CharacterSet::letters(), &CharacterSet::specials());
        let randomizer = production();

        for _ in 0..100 {
            let password = randomizer.random_string(16, &alphabet);
            assert_eq!(password.chars().count(), 16);
            assert!(password.chars().all(|c| contains(&alphabet, c)));
            assert!(!password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_filenames_do_not_collide() {
        let randomizer = production();
        let names: HashSet<_> = (0..1000).map(|_| randomizer.random_filename("tmp")).collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn test_each_character_reachable() {
        let randomizer = production();
        let digits = CharacterSet::digits();
        let sample = randomizer.random_string(2000, &digits);
        assert!(digits.iter().all(|c| sample.contains(c)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_integer_within_bounds(min in -1_000_000i64..1_000_000, width in 1i64..1_000_000) {
            let randomizer = production();
            let max = min + width;
            let v = randomizer.random_integer(min, max);
            prop_assert!(v >= min && v < max);
        }

        #[test]
        fn prop_real_within_bounds(min in -1000.0f32..1000.0, width in 0.001f32..1000.0) {
            let randomizer = production();
            let max = min + width;
            prop_assume!(min < max);
            let v = randomizer.random_real(min, max);
            prop_assert!(v >= min && v < max);
        }
    }
}
