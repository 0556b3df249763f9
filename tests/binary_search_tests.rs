use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqsort::prelude::*;

/// Every non-decreasing sequence of `len` values drawn from `0..alphabet`.
fn sorted_sequences(len: usize, alphabet: u8) -> Vec<Vec<u8>> {
    if len == 0 {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for prefix in sorted_sequences(len - 1, alphabet) {
        let floor = prefix.last().copied().unwrap_or(0);
        for next in floor..alphabet {
            let mut seq = prefix.clone();
            seq.push(next);
            out.push(seq);
        }
    }
    out
}

/// Checks a search result against a linear scan of `data[index..index + count]`.
fn assert_consistent(data: &[u8], index: usize, count: usize, key: u8, result: SearchResult) {
    let window = &data[index..index + count];
    match result {
        SearchResult::Found(at) => {
            assert!(
                (index..index + count).contains(&at),
                "found index {} outside window {}..{} of {:?}",
                at,
                index,
                index + count,
                data
            );
            assert_eq!(data[at], key);
        }
        SearchResult::NotFound(at) => {
            assert!(!window.contains(&key), "missed {} in {:?}", key, window);
            let expected = index + window.iter().take_while(|&&v| v < key).count();
            assert_eq!(at, expected, "bad insertion point for {} in {:?}", key, window);

            // Inserting there keeps the whole window sorted.
            let mut inserted = window.to_vec();
            inserted.insert(at - index, key);
            assert!(inserted.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn test_exhaustive_small_sequences() {
    for len in 0..=7 {
        for data in sorted_sequences(len, 4) {
            for key in 0..5 {
                let result = binary_search(&data, &key, &Natural);
                assert_consistent(&data, 0, data.len(), key, result);
            }
        }
    }
}

#[test]
fn test_exhaustive_sub_ranges() {
    for len in 0..=6 {
        for data in sorted_sequences(len, 4) {
            for index in 0..=len {
                for count in 0..=len - index {
                    for key in 0..5 {
                        let result = binary_search_range(&data, index, count, &key, &Natural)
                            .expect("window is in bounds");
                        assert_consistent(&data, index, count, key, result);
                    }
                }
            }
        }
    }
}

#[test]
fn test_sub_range_ignores_unsorted_surroundings() {
    let data = vec![50, 40, 2, 4, 6, 8, 1, 0];

    assert_eq!(binary_search_range(&data, 2, 4, &6, &Natural), Ok(SearchResult::Found(4)));
    assert_eq!(binary_search_range(&data, 2, 4, &5, &Natural), Ok(SearchResult::NotFound(4)));
    assert_eq!(binary_search_range(&data, 2, 4, &0, &Natural), Ok(SearchResult::NotFound(2)));
    assert_eq!(binary_search_range(&data, 2, 4, &9, &Natural), Ok(SearchResult::NotFound(6)));
}

#[test]
fn test_empty_inputs() {
    let empty: Vec<i32> = vec![];
    assert_eq!(binary_search(&empty, &1, &Natural), SearchResult::NotFound(0));
    assert_eq!(binary_search(&empty, &1, &Natural).encode(), -1);

    let data = vec![1, 2, 3];
    assert_eq!(binary_search_range(&data, 0, 0, &2, &Natural), Ok(SearchResult::NotFound(0)));
    assert_eq!(binary_search_range(&data, 3, 0, &2, &Natural), Ok(SearchResult::NotFound(3)));
}

#[test]
fn test_range_validation() {
    let data = vec![1, 2, 3];

    assert_eq!(
        binary_search_range(&data, 2, 2, &2, &Natural),
        Err(SequenceError::RangeOutOfBounds { index: 2, count: 2, len: 3 })
    );
    assert_eq!(
        binary_search_range(&data, 4, 0, &2, &Natural),
        Err(SequenceError::RangeOutOfBounds { index: 4, count: 0, len: 3 })
    );
    assert!(binary_search_range(&data, 1, usize::MAX, &2, &Natural).is_err());
}

#[test]
fn test_agrees_with_std_binary_search() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1_000 {
        let mut data: Vec<u32> = (0..rng.random_range(0..200))
            .map(|_| rng.random_range(0..1_000))
            .collect();
        data.sort();
        data.dedup();
        let key = rng.random_range(0..1_000);

        let ours: Result<usize, usize> = binary_search(&data, &key, &Natural).into();
        assert_eq!(ours, data.binary_search(&key));
    }
}

#[test]
fn test_slices_and_custom_orderings() {
    let data = [9u8, 7, 7, 3, 1];
    let slice: &[u8] = &data;

    match binary_search(slice, &7, &Reversed(Natural)) {
        SearchResult::Found(index) => assert_eq!(data[index], 7),
        other => panic!("expected 7 to be found, got {:?}", other),
    }
    assert_eq!(binary_search(slice, &5, &Reversed(Natural)), SearchResult::NotFound(3));
    assert_eq!(
        binary_search(slice, &0, &|a: &u8, b: &u8| b.cmp(a)),
        SearchResult::NotFound(5)
    );
}

#[test]
fn test_encoding_round_trip() {
    for index in [0usize, 1, 2, 17, 1 << 20] {
        let found = SearchResult::Found(index);
        let missing = SearchResult::NotFound(index);

        assert!(found.encode() >= 0);
        assert!(missing.encode() < 0);
        assert_eq!(SearchResult::decode(found.encode()), found);
        assert_eq!(SearchResult::decode(missing.encode()), missing);
        assert_eq!(!missing.encode() as usize, index);
        assert_eq!(found.found(), Some(index));
        assert_eq!(missing.found(), None);
        assert_eq!(missing.index(), index);
    }
}

#[test]
fn test_insertion_point_matches_insert_sorted() {
    let mut rng = rand::rng();
    let mut data: Vec<i16> = Vec::new();

    for _ in 0..2_000 {
        let value = rng.random_range(-500..500);
        let before = binary_search(&data, &value, &Natural);
        let placement = insert_sorted(&mut data, value, &Natural);

        if let SearchResult::NotFound(at) = before {
            assert_eq!(placement, Placement::Inserted(at));
        }
    }
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
}
