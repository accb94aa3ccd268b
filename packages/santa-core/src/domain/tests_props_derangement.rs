//! Property tests for the derangement engine (pure domain, no DB).
//!
//! Contract:
//! - santa side reproduces the input ids in order
//! - recipient side is a permutation of the same ids
//! - no pair maps an id onto itself
//! - fewer than two ids never succeed

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::derangement::build_derangement;
use crate::errors::domain::{DomainError, ValidationKind};

proptest! {
    /// Property: any unique id set of size >= 2 yields a valid derangement.
    ///
    /// The attempt budget makes failure possible in principle, but at
    /// probability <= 0.5^100 a failure here is a bug, not bad luck.
    #[test]
    fn prop_valid_derangement(
        id_set in proptest::collection::btree_set(any::<i64>(), 2..40),
        seed in any::<u64>(),
    ) {
        let ids: Vec<i64> = id_set.iter().copied().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let pairs = build_derangement(&ids, &mut rng)
            .expect("derangement must succeed for n >= 2");

        prop_assert_eq!(pairs.len(), ids.len());

        let santas: Vec<i64> = pairs.iter().map(|(santa, _)| *santa).collect();
        prop_assert_eq!(&santas, &ids, "santa side must be the input in order");

        let recipients: BTreeSet<i64> = pairs.iter().map(|(_, r)| *r).collect();
        prop_assert_eq!(&recipients, &id_set, "recipient side must be a permutation");

        for (santa, recipient) in &pairs {
            prop_assert_ne!(santa, recipient, "no id may map to itself");
        }
    }

    /// Property: under two ids the engine always reports unsatisfiable.
    #[test]
    fn prop_too_small_sets_fail(
        id in any::<i64>(),
        seed in any::<u64>(),
        use_one in any::<bool>(),
    ) {
        let ids: Vec<i64> = if use_one { vec![id] } else { vec![] };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let result = build_derangement(&ids, &mut rng);
        prop_assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationKind::DrawUnsatisfiable, _))
        ));
    }

    /// Property: the engine is deterministic for a fixed seed.
    #[test]
    fn prop_same_seed_same_pairing(
        id_set in proptest::collection::btree_set(any::<i64>(), 2..20),
        seed in any::<u64>(),
    ) {
        let ids: Vec<i64> = id_set.into_iter().collect();
        let first = build_derangement(&ids, &mut ChaCha8Rng::seed_from_u64(seed))
            .expect("derangement");
        let second = build_derangement(&ids, &mut ChaCha8Rng::seed_from_u64(seed))
            .expect("derangement");
        prop_assert_eq!(first, second);
    }
}
