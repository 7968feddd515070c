use rand::rngs::StdRng;
use rand::SeedableRng;
use spimem_lib::random_name::{random_name, random_name_with, set_random_name, PREFIXES, SUFFIXES};
use std::collections::HashSet;

#[test]
fn test_names_use_known_words() {
    for _ in 0..200 {
        let name = random_name(32);
        let (prefix, suffix) = name.split_once('_').unwrap();

        let mut expected_prefix = prefix.to_lowercase();
        assert!(PREFIXES.contains(&expected_prefix.as_str()), "{}", name);
        assert!(SUFFIXES.contains(&suffix), "{}", name);

        expected_prefix[..1].make_ascii_uppercase();
        assert_eq!(prefix, expected_prefix);
    }
}

#[test]
fn test_same_seed_same_name() {
    let first = random_name_with(&mut StdRng::seed_from_u64(42), 32);
    let second = random_name_with(&mut StdRng::seed_from_u64(42), 32);
    assert_eq!(first, second);
}

#[test]
fn test_all_combinations_reachable() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();

    for _ in 0..20_000 {
        seen.insert(random_name_with(&mut rng, 32));
    }

    assert_eq!(seen.len(), 240);
}

#[test]
fn test_buffer_never_overrun() {
    for capacity in 0..24 {
        let mut buffer = [0x55u8; 32];
        let name_len = set_random_name(&mut buffer[..capacity]);

        if capacity == 0 {
            assert_eq!(name_len, 0);
        } else {
            assert!(name_len < capacity);
            assert_eq!(buffer[name_len], 0);
        }
        assert!(buffer[capacity..].iter().all(|b| *b == 0x55));
    }
}
