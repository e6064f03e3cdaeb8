use crate::{randomizers, run};
use randomizer::{enumeration, Enumeration, Error, FixedSource, Randomizer};
use std::collections::HashSet;
use test_log::test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum TestEnum {
    Value1,
    Value2,
    Value3,
}

enumeration!(TestEnum { Value1, Value2, Value3 });

#[derive(Clone, Copy, Debug)]
enum Uninhabited {}

enumeration!(Uninhabited {});

#[test]
fn enumeration_returns_declared_member() {
    for (backend, mut r) in randomizers() {
        let seen = (0..300)
            .map(|_| r.enumeration::<TestEnum>().unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), TestEnum::MEMBERS.len(), "{:?} missed a member", backend);
    }
}

#[test]
fn enumeration_without_members_is_rejected() {
    let mut r = Randomizer::new();
    match r.enumeration::<Uninhabited>() {
        Err(Error::EmptyEnumeration { type_name }) => assert!(type_name.ends_with("Uninhabited")),
        other => panic!("expected an empty enumeration error, got {:?}", other),
    }
    assert!(matches!(
        r.nullable_enumeration::<Uninhabited>(),
        Ok(None) | Err(Error::EmptyEnumeration { .. })
    ));
}

#[test]
fn nullable_enumeration_is_mixed() {
    for (_, mut r) in randomizers() {
        let count = 100;
        let counter = run(|| r.nullable_enumeration::<TestEnum>().unwrap(), count);
        counter.assert_mixed(count);
    }
}

#[test]
fn random_returns_every_list_element() {
    let list = vec!["alpha", "beta", "gamma", "delta"];
    for (backend, mut r) in randomizers() {
        let seen = (0..1000).map(|_| r.random(&list)).collect::<HashSet<_>>();
        assert_eq!(seen, list.iter().copied().collect(), "{:?}", backend);
    }
}

#[test]
fn random_from_empty_list_is_default() {
    for (_, mut r) in randomizers() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(r.random(&empty), String::new());
        assert_eq!(r.random::<i64>(&[]), 0);
    }
}

#[test]
fn random_of_values() {
    for (backend, mut r) in randomizers() {
        let seen = (0..500).map(|_| r.random_of([3u8, 5, 7])).collect::<HashSet<_>>();
        assert_eq!(seen, [3u8, 5, 7].iter().copied().collect(), "{:?}", backend);
        assert_eq!(r.random_of::<u32, 0>([]), 0);
    }
}

#[test]
fn weighted_random_follows_weight_order() {
    let values = ['a', 'b', 'c'];
    let weights = [0.35, 0.60, 0.05];
    for (backend, mut r) in randomizers() {
        let mut counts = [0usize; 3];
        for _ in 0..1000 {
            match r.weighted_random(&values, &weights) {
                'a' => counts[0] += 1,
                'b' => counts[1] += 1,
                'c' => counts[2] += 1,
                other => panic!("{:?} produced {:?}", backend, other),
            }
        }
        assert!(
            counts[2] < counts[0] && counts[0] < counts[1],
            "{:?} produced counts {:?}",
            backend,
            counts
        );
    }
}

#[test]
fn weighted_random_with_relative_weights() {
    // weights need not sum to one; a zero weight is never chosen
    for (_, mut r) in randomizers() {
        for _ in 0..500 {
            let value = r.weighted_random(&[1, 2, 3], &[5.0, 0.0, 15.0]);
            assert_ne!(value, 2);
        }
    }
}

#[test]
fn weighted_random_boundary_goes_to_next_element() {
    // total 10, draw 0.3 * 10 lands on the first cumulative boundary
    let mut r = Randomizer::with_source(FixedSource::new(vec![0.3]));
    assert_eq!(r.weighted_random(&["low", "high"], &[3.0, 7.0]), "high");
}
