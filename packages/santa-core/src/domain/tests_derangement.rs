use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::derangement::build_derangement;
use crate::errors::domain::{DomainError, ValidationKind};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn empty_set_is_unsatisfiable() {
    let ids: Vec<i64> = vec![];
    let result = build_derangement(&ids, &mut rng(1));
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::DrawUnsatisfiable, _))
    ));
}

#[test]
fn single_id_is_unsatisfiable() {
    let result = build_derangement(&[42i64], &mut rng(1));
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationKind::DrawUnsatisfiable, _))
    ));
}

#[test]
fn two_ids_always_swap() {
    // The only derangement of two elements is the swap; rejection sampling
    // must land on it for any seed.
    for seed in 0..20 {
        let pairs = build_derangement(&[7i64, 11], &mut rng(seed)).expect("derangement for n=2");
        assert_eq!(pairs, vec![(7, 11), (11, 7)]);
    }
}

#[test]
fn santas_are_the_input_in_order() {
    let ids = [10i64, 20, 30, 40, 50];
    let pairs = build_derangement(&ids, &mut rng(3)).expect("derangement");
    let santas: Vec<i64> = pairs.iter().map(|(santa, _)| *santa).collect();
    assert_eq!(santas, ids);
}

#[test]
fn recipients_form_a_fixed_point_free_permutation() {
    let ids = [1i64, 2, 3, 4, 5, 6, 7];
    let pairs = build_derangement(&ids, &mut rng(9)).expect("derangement");

    let mut recipients: Vec<i64> = pairs.iter().map(|(_, r)| *r).collect();
    for (santa, recipient) in &pairs {
        assert_ne!(santa, recipient, "self-assignment in {pairs:?}");
    }
    recipients.sort_unstable();
    assert_eq!(recipients, ids, "recipients must be a permutation of ids");
}

#[test]
fn different_seeds_can_differ() {
    let ids = [1i64, 2, 3, 4, 5, 6, 7, 8];
    let first = build_derangement(&ids, &mut rng(100)).expect("derangement");
    // At least one of a handful of other seeds should disagree; a constant
    // output would mean the RNG is not actually driving the shuffle.
    let any_different = (101..110)
        .any(|seed| build_derangement(&ids, &mut rng(seed)).expect("derangement") != first);
    assert!(any_different);
}

#[test]
fn works_with_non_numeric_ids() {
    let ids = ["alice", "bob", "carol"];
    let pairs = build_derangement(&ids, &mut rng(4)).expect("derangement");
    assert_eq!(pairs.len(), 3);
    for (santa, recipient) in pairs {
        assert_ne!(santa, recipient);
    }
}
