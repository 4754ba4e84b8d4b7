use std::collections::VecDeque;

use futures_lite::{future, stream, StreamExt};
use pattern_merge::{Error, MergeOptions, PatternError, PatternMerge, TruncatePolicy};
use proptest::prelude::*;

fn labels(one: usize, two: usize, three: usize) -> Vec<Vec<&'static str>> {
    vec![vec!["One"; one], vec!["Two"; two], vec!["Three"; three]]
}

fn merger(total: Option<usize>) -> PatternMerge<Vec<&'static str>> {
    PatternMerge::new([5, 2, 3], total).unwrap()
}

#[test]
fn more_than_one_pattern_entry_required() {
    let err = PatternMerge::<Vec<u8>>::new([1], None).unwrap_err();
    assert_eq!(err, Error::InvalidPattern(PatternError::TooShort));
    assert_eq!(
        err.to_string(),
        "there must be more than one collection in the pattern"
    );
}

#[test]
fn pattern_must_be_all_integers() {
    let err = PatternMerge::<Vec<u8>>::new("1 two", None).unwrap_err();
    assert_eq!(err.to_string(), "pattern must be all integers");
}

#[test]
fn total_not_required() {
    assert!(PatternMerge::<Vec<u8>>::new([1, 2], None).is_ok());
    assert!(PatternMerge::<Vec<u8>>::new([1, 2], Some(5)).is_ok());
}

#[test]
fn oversized_pattern_entries() {
    let merger = PatternMerge::<Vec<u8>>::new([usize::MAX, 1], Some(5)).unwrap();
    assert_eq!(merger.counts(), Some(&[5, 0][..]));

    let err = PatternMerge::<Vec<u8>>::new("99999999999999999999999, 1", None).unwrap_err();
    assert_eq!(err, Error::InvalidPattern(PatternError::TooLarge));
}

#[test]
fn total_must_be_at_least_one() {
    let err = PatternMerge::<Vec<u8>>::new([1, 2], Some(0)).unwrap_err();
    assert_eq!(err, Error::InvalidTotal);
    assert_eq!(err.to_string(), "total must be at least 1");
}

#[test]
fn counts_follow_pattern() {
    let cases: [(&[usize], usize, &[usize]); 4] = [
        (&[5, 2, 3], 21, &[11, 4, 6]),
        (&[3, 10, 3], 30, &[6, 20, 4]),
        (&[1, 2, 3], 30, &[5, 10, 15]),
        (&[50, 20, 10], 300, &[200, 70, 30]),
    ];
    for (pattern, total, expected) in cases {
        let merger = PatternMerge::<Vec<u8>>::new(pattern, Some(total)).unwrap();
        assert_eq!(merger.counts(), Some(expected), "pattern {pattern:?}");
    }
}

#[test]
fn number_of_collections_must_match_pattern() {
    let mut merger = PatternMerge::<Vec<u8>>::new([5, 2, 3], Some(21)).unwrap();
    let err = merger.merge(vec![vec![1], vec![2]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "number of collections must match pattern; expected 3 collections, actual: 2"
    );
}

#[test]
fn number_of_elements_must_cover_total() {
    let mut merger = PatternMerge::<Vec<u8>>::new([5, 2, 3], Some(21)).unwrap();
    let err = merger.merge(vec![vec![1], vec![2], vec![3]]).unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientElements {
            expected: 21,
            actual: 3
        }
    );
    assert_eq!(
        err.to_string(),
        "total number of elements in collections must be >= provided total; expected 21 elements, actual: 3"
    );
}

#[test]
fn merges_collections_based_on_pattern() {
    let mut merger = merger(Some(21));
    let expected = [
        "One", "One", "One", "One", "One", "Two", "Two", "Three", "Three", "Three", "One", "One",
        "One", "One", "One", "Two", "Two", "Three", "Three", "Three", "One",
    ];
    assert_eq!(merger.merge(labels(20, 20, 20)).unwrap(), &expected);
}

#[test]
fn result_length_equals_total() {
    let mut merger = merger(Some(21));
    assert_eq!(merger.merge(labels(20, 20, 20)).unwrap().len(), 21);
}

#[test]
fn without_total_everything_is_merged() {
    let mut merger = merger(None);
    assert_eq!(merger.merge(labels(20, 20, 20)).unwrap().len(), 60);
}

#[test]
fn without_total_uneven_collections_are_all_merged() {
    let mut merger = merger(None);
    assert_eq!(merger.merge(labels(5, 20, 15)).unwrap().len(), 40);
}

#[test]
fn first_collection_with_fewer_elements() {
    let mut merger = merger(Some(21));
    let expected = [
        "One", "One", "One", "One", "One", "Two", "Two", "Three", "Three", "Three", "Two", "Two",
        "Three", "Three", "Three", "Two", "Two", "Three", "Three", "Three", "Two",
    ];
    assert_eq!(merger.merge(labels(5, 20, 20)).unwrap(), &expected);
}

#[test]
fn later_collections_with_fewer_elements() {
    let mut merger = merger(Some(21));
    let expected = [
        "One", "One", "One", "One", "One", "Two", "Two", "Three", "Three", "Three", "One", "One",
        "One", "One", "One", "Two", "One", "One", "One", "One", "One",
    ];
    assert_eq!(merger.merge(labels(20, 3, 3)).unwrap(), &expected);
}

#[test]
fn ignore_total_bypasses_element_check() {
    let mut merger = merger(Some(21));
    let out = merger
        .merge_with(labels(2, 1, 0), MergeOptions::new().ignore_total(true))
        .unwrap();
    assert_eq!(out, &["One", "One", "Two"]);
}

#[test]
fn ignore_total_merges_everything() {
    let mut merger = merger(Some(21));
    let out = merger
        .merge_with(labels(20, 20, 20), MergeOptions::new().ignore_total(true))
        .unwrap();
    assert_eq!(out.len(), 60);
}

#[test]
fn nested_sequences_stay_intact() {
    let mut merger = PatternMerge::<Vec<Vec<u8>>>::new([1, 1, 1], Some(7)).unwrap();
    let collections = vec![
        vec![vec![1, 1]; 3],
        vec![vec![2, 2]; 3],
        vec![vec![3, 3]; 3],
    ];
    let out = merger.merge(collections).unwrap();
    assert_eq!(out.len(), 7);
    assert!(out.iter().all(|item| item.len() == 2));
    assert_eq!(out[0], [1, 1]);
    assert_eq!(out[1], [2, 2]);
    assert_eq!(out[6], [1, 1]);
}

#[test]
fn construction_is_deterministic() {
    let a = PatternMerge::<Vec<u8>>::new([4, 2, 1], Some(25)).unwrap();
    let b = PatternMerge::<Vec<u8>>::new([4, 2, 1], Some(25)).unwrap();
    assert_eq!(a.counts(), b.counts());
    assert_eq!(a.counts(), Some(&[16, 6, 3][..]));
}

#[test]
fn repeated_merges_into_fresh_wrappers_agree() {
    let merger = merger(Some(21));
    let mut first = Vec::new();
    let mut second = Vec::new();
    merger
        .merge_into(labels(20, 20, 20), &mut first, MergeOptions::new())
        .unwrap();
    merger
        .merge_into(labels(20, 20, 20), &mut second, MergeOptions::new())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn whole_policy_trims_reused_wrapper() {
    let mut merger = PatternMerge::<Vec<u8>>::new([1, 1], None).unwrap();
    merger.merge(vec![vec![1], vec![2]]).unwrap();
    merger.merge(vec![vec![3], vec![4]]).unwrap();
    assert_eq!(merger.wrapper(), &[1, 2]);
}

#[test]
fn appended_policy_accumulates() {
    let mut merger = PatternMerge::<Vec<u8>>::builder([1, 1])
        .truncate(TruncatePolicy::Appended)
        .build()
        .unwrap();
    merger.merge(vec![vec![1], vec![2]]).unwrap();
    merger.merge(vec![vec![3], vec![4]]).unwrap();
    assert_eq!(merger.wrapper(), &[1, 2, 3, 4]);
}

#[test]
fn caller_supplied_wrapper_keeps_identity() {
    let merger = PatternMerge::<Vec<u8>>::new([2, 1], Some(3)).unwrap();
    let mut out: VecDeque<u8> = VecDeque::new();
    let returned = merger
        .merge_into(vec![vec![1, 1], vec![2]], &mut out, MergeOptions::new())
        .unwrap();
    returned.push_back(9);
    assert_eq!(out, [1, 1, 2, 9]);
}

#[test]
fn iter_matches_merge() {
    let mut merger = merger(Some(21));
    let lazy: Vec<_> = merger
        .iter(labels(5, 20, 20), MergeOptions::new())
        .unwrap()
        .collect();
    assert_eq!(merger.merge(labels(5, 20, 20)).unwrap(), &lazy);
}

#[test]
fn iter_validates_like_merge() {
    let merger = merger(Some(21));
    let err = merger
        .iter(labels(1, 1, 1), MergeOptions::new())
        .unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientElements {
            expected: 21,
            actual: 3
        }
    );
}

proptest! {
    /// Property: the lazy iterator, the stream and the wrapper-based merge
    /// agree on every input.
    #[test]
    fn iter_and_merge_agree(
        sizes in proptest::collection::vec(1usize..6, 2..5),
        lens in proptest::collection::vec(0usize..30, 4),
        total in proptest::option::of(1usize..40),
    ) {
        let merger = PatternMerge::<Vec<(usize, usize)>>::new(sizes.clone(), total).unwrap();
        let collections: Vec<Vec<(usize, usize)>> = sizes
            .iter()
            .enumerate()
            .map(|(i, _)| (0..lens[i]).map(|n| (i, n)).collect())
            .collect();
        let available: usize = collections.iter().map(Vec::len).sum();

        let mut merged = Vec::new();
        let result = merger.merge_into(collections.clone(), &mut merged, MergeOptions::new());
        match total {
            Some(total) if available < total => {
                prop_assert!(result.is_err());
                prop_assert!(merged.is_empty());
            }
            _ => {
                result.unwrap();
                let lazy: Vec<_> = merger.iter(collections.clone(), MergeOptions::new()).unwrap().collect();
                prop_assert_eq!(&merged, &lazy);

                let streams = collections.into_iter().map(stream::iter);
                let streamed: Vec<_> =
                    future::block_on(merger.stream(streams, MergeOptions::new()).unwrap().collect());
                prop_assert_eq!(&merged, &streamed);
                prop_assert_eq!(merged.len(), total.unwrap_or(available));
            }
        }
    }

    /// Property: every collection keeps its internal order in the output.
    #[test]
    fn source_order_is_preserved(
        sizes in proptest::collection::vec(1usize..6, 2..5),
        len in 0usize..30,
    ) {
        let merger = PatternMerge::<Vec<(usize, usize)>>::new(sizes.clone(), None).unwrap();
        let collections: Vec<Vec<(usize, usize)>> = (0..sizes.len())
            .map(|i| (0..len).map(|n| (i, n)).collect())
            .collect();
        let mut out = Vec::new();
        merger.merge_into(collections, &mut out, MergeOptions::new()).unwrap();

        for source in 0..sizes.len() {
            let seen: Vec<usize> = out.iter().filter(|(i, _)| *i == source).map(|(_, n)| *n).collect();
            prop_assert_eq!(seen, (0..len).collect::<Vec<_>>());
        }
    }
}
