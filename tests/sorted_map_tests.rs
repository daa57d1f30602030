//! Integration tests for TreeSortedMap.

use rich_collections::prelude::*;
use rstest::rstest;

fn fruits() -> TreeSortedMap<&'static str, u32> {
    [("pear", 4), ("apple", 7), ("fig", 2), ("kiwi", 7)]
        .into_iter()
        .collect()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_map_is_empty() {
    let map: TreeSortedMap<i32, i32> = TreeSortedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.first_key(), None);
    assert_eq!(map.to_string(), "{}");
}

#[rstest]
fn test_pairs_are_ordered_by_key() {
    let map: TreeSortedMap<i32, &str> = [(3, "3"), (1, "1"), (2, "2")].into_iter().collect();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(map.first_key(), Some(&1));
    assert_eq!(map.last_key(), Some(&3));
}

#[rstest]
fn test_custom_comparator_orders_keys() {
    let by_length = Comparator::by(|word: &&str| word.len());
    let map = TreeSortedMap::from_pairs_with_comparator(
        by_length,
        [("ccc", 3), ("a", 1), ("bb", 2), ("dd", 20)],
    );
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "bb", "ccc"]);
    assert_eq!(map.get(&"xx"), Some(&20));
}

#[rstest]
fn test_new_empty_keeps_comparator() {
    let map: TreeSortedMap<i32, i32> =
        TreeSortedMap::with_comparator(Comparator::<i32>::natural().reversed());
    let mut empty: TreeSortedMap<i32, String> = map.new_empty();
    empty.put(1, "one".into());
    empty.put(2, "two".into());
    assert_eq!(empty.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
}

// =============================================================================
// Fluent Mutation Tests
// =============================================================================

#[rstest]
fn test_fluent_mutation_returns_same_map() {
    let mut map = TreeSortedMap::new();
    let address: *const TreeSortedMap<i32, char> = map.with_key_value(1, 'a');
    assert!(std::ptr::eq(address, &map));

    map.with_all_key_values([(2, 'b'), (3, 'c'), (4, 'd')])
        .without_key(&1)
        .without_all_keys(&[2, 9]);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 4]);
}

#[rstest]
fn test_collect_keys_and_values() {
    let mut map = TreeSortedMap::new();
    map.collect_keys_and_values(["bb", "a", "ccc"], |word| word.len(), |word| word.to_uppercase());
    assert_eq!(map.to_string(), "{1: A, 2: BB, 3: CCC}");
}

#[rstest]
fn test_remove_key_and_get_mut() {
    let mut map = fruits();
    *map.get_mut(&"fig").unwrap() += 10;
    assert_eq!(map.get(&"fig"), Some(&12));
    assert_eq!(map.remove_key(&"fig"), Some(12));
    assert_eq!(map.remove_key(&"fig"), None);
    assert!(!map.contains_key(&"fig"));
    assert!(map.contains_value(&7));
}

// =============================================================================
// Derived Map Tests
// =============================================================================

#[rstest]
fn test_select_and_reject_entries_keep_order() {
    let map = fruits();
    let popular = map.select_entries(|_, count| *count > 5);
    assert_eq!(popular.keys().copied().collect::<Vec<_>>(), vec!["apple", "kiwi"]);
    let rest = map.reject_entries(|_, count| *count > 5);
    assert_eq!(rest.keys().copied().collect::<Vec<_>>(), vec!["fig", "pear"]);
    assert_eq!(map.len(), 4);
}

#[rstest]
fn test_collect_values_keeps_keys() {
    let map = fruits();
    let labels = map.collect_values(|fruit, count| format!("{fruit}={count}"));
    assert_eq!(labels.keys().copied().collect::<Vec<_>>(), map.keys().copied().collect::<Vec<_>>());
    assert_eq!(labels.get(&"fig"), Some(&"fig=2".to_string()));
}

#[rstest]
fn test_flip_groups_keys_by_value() {
    let flipped = fruits().flip();
    assert_eq!(flipped.get(&7), &["apple", "kiwi"]);
    assert_eq!(flipped.get(&4), &["pear"]);
    assert_eq!(flipped.size(), 4);
    assert_eq!(flipped.size_distinct(), 3);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Colour {
    Red,
    Green,
}

#[rstest]
fn test_flip_accepts_values_without_ordering() {
    let map: TreeSortedMap<&str, Colour> = [("cherry", Colour::Red), ("lime", Colour::Green), ("apple", Colour::Red)]
        .into_iter()
        .collect();
    let flipped = map.flip();
    assert_eq!(flipped.get(&Colour::Red), &["apple", "cherry"]);
    assert_eq!(flipped.get(&Colour::Green), &["lime"]);
}

#[rstest]
#[case::middle("b", "l", vec!["fig", "kiwi"])]
#[case::everything("a", "z", vec!["apple", "fig", "kiwi", "pear"])]
#[case::nothing("q", "r", vec![])]
fn test_sub_map(#[case] from: &'static str, #[case] to: &'static str, #[case] expected: Vec<&str>) {
    let sub = fruits().sub_map(&from, &to).unwrap();
    assert_eq!(sub.keys().copied().collect::<Vec<_>>(), expected);
}

#[rstest]
fn test_head_and_tail_split_the_map() {
    let map = fruits();
    let head = map.head_map(&"kiwi");
    let tail = map.tail_map(&"kiwi");
    assert_eq!(head.len() + tail.len(), map.len());
    assert_eq!(tail.first_key(), Some(&"kiwi"));
}

// =============================================================================
// Value Protocol Tests
// =============================================================================

#[rstest]
fn test_protocol_runs_over_values_in_key_order() {
    let map = fruits();
    assert_eq!(map.to_list(), vec![7, 2, 7, 4]);
    assert_eq!(map.select(|count| *count > 3), vec![7, 7, 4]);
    assert_eq!(map.max_element(), Ok(&7));
    assert_eq!(map.inject_into(0, |sum, count| sum + count), 20);
    assert_eq!(map.get_first(), Some(&7));
    assert_eq!(map.get_last(), Some(&4));
    assert_eq!(map.detect_entry(|_, count| *count == 7), Some((&"apple", &7)));
}

#[rstest]
#[case::index_of("index_of")]
#[case::detect_index("detect_index")]
#[case::detect_last_index("detect_last_index")]
#[case::for_each_in_range("for_each_in_range")]
#[case::corresponds("corresponds")]
#[case::to_stack("to_stack")]
fn test_positional_operations_are_not_supported(#[case] operation: &str) {
    let map = fruits();
    let error = match operation {
        "index_of" => map.index_of(&7).unwrap_err(),
        "detect_index" => map.detect_index(|_| true).unwrap_err(),
        "detect_last_index" => map.detect_last_index(|_| true).unwrap_err(),
        "for_each_in_range" => map.for_each_in_range(0, 1, |_| {}).unwrap_err(),
        "corresponds" => map.corresponds(&[1, 2], |_, _| true).unwrap_err(),
        _ => map.to_stack().unwrap_err(),
    };
    assert_eq!(error.kind(), ErrorKind::NotSupported);
    assert_eq!(error.operation(), operation);
    assert_eq!(error.to_string(), format!("TreeSortedMap::{operation} is not supported"));
}

#[rstest]
fn test_equality_is_entry_wise() {
    let left: TreeSortedMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
    let right: TreeSortedMap<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
    assert_eq!(left, right);
    let mut different = right.clone();
    different.put(2, 3);
    assert_ne!(left, different);
}

#[rstest]
fn test_owned_iteration_yields_entries_in_order() {
    let entries: Vec<(&str, u32)> = fruits().into_iter().collect();
    assert_eq!(entries[0], ("apple", 7));
    assert_eq!(entries.len(), 4);

    let map = fruits();
    assert_eq!(map.keys().next_back(), Some(&"pear"));
    assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), vec![4, 7, 2, 7]);
    assert_eq!((&map).into_iter().len(), 4);
}
