//! Integration tests for the RichIterable protocol over standard and
//! library containers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use rich_collections::prelude::*;
use rstest::rstest;

// =============================================================================
// Extrema
// =============================================================================

#[rstest]
fn test_min_and_max_of_one_to_five() {
    let source = vec![1, 2, 3, 4, 5];
    assert_eq!(source.max_element(), Ok(&5));
    assert_eq!(source.min_element(), Ok(&1));
}

#[rstest]
fn test_extrema_of_empty_source_fail() {
    let source: Vec<i32> = Vec::new();
    let error = source.max_element().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::EmptySource);
    assert_eq!(error.operation(), "max_element");
    assert_eq!(source.min_by(|value| -value).unwrap_err().kind(), ErrorKind::EmptySource);
    assert_eq!(source.min_element_optional(), None);
}

#[rstest]
fn test_ties_resolve_to_first_encountered() {
    let source = vec![("a", 2), ("b", 3), ("c", 3), ("d", 2)];
    assert_eq!(source.max_by(|pair| pair.1), Ok(&("b", 3)));
    assert_eq!(source.min_by(|pair| pair.1), Ok(&("a", 2)));
    let by_count = Comparator::by(|pair: &(&str, i32)| pair.1);
    assert_eq!(source.max_with(&by_count), Ok(&("b", 3)));
    assert_eq!(source.min_with(&by_count), Ok(&("a", 2)));
}

#[rstest]
fn test_null_safe_comparator_orders_absent_values() {
    let source = vec![Some(3), None, Some(1)];
    let nulls_low = Comparator::nulls_low(Comparator::natural());
    assert_eq!(source.min_with(&nulls_low), Ok(&None));
    assert_eq!(source.max_with(&nulls_low), Ok(&Some(3)));
    assert_eq!(source.checked_max().unwrap_err().kind(), ErrorKind::NullElement);
}

// =============================================================================
// Targets
// =============================================================================

#[rstest]
fn test_select_into_returns_the_supplied_target() {
    let source = vec![1, 2, 3, 4, 5, 6];
    let mut target = HashSet::new();
    let returned = source.select_into(|value| value % 3 == 0, &mut target);
    returned.insert(100);
    assert_eq!(target, HashSet::from([3, 6, 100]));
}

#[rstest]
fn test_collect_into_sorted_set_enforces_uniqueness() {
    let source = VecDeque::from(vec!["pear", "fig", "plum", "kiwi"]);
    let mut lengths = TreeSortedSet::new();
    source.collect_into(|word| word.len(), &mut lengths);
    assert_eq!(lengths.as_slice(), &[3, 4]);
}

#[rstest]
fn test_group_by_into_std_multimap() {
    let source = vec![1, 2, 3, 4, 5];
    let mut target: HashMap<bool, Vec<i32>> = HashMap::new();
    source.group_by_into(|value| value % 2 == 0, &mut target);
    assert_eq!(target[&true], vec![2, 4]);
    assert_eq!(target[&false], vec![1, 3, 5]);
}

#[rstest]
fn test_to_map_into_btree_map() {
    let source = vec!["one", "three", "five"];
    let mut target = BTreeMap::new();
    source.to_map_into(|word| word.len(), |word| word.to_uppercase(), &mut target);
    assert_eq!(
        target.into_iter().collect::<Vec<_>>(),
        vec![(3, "ONE".to_string()), (4, "FIVE".to_string()), (5, "THREE".to_string())]
    );
}

// =============================================================================
// Grouping
// =============================================================================

#[rstest]
fn test_group_by_unique_key_identity() {
    let source = vec![1, 2, 3];
    let grouped = source.group_by_unique_key(|value| *value).unwrap();
    assert_eq!(grouped.len(), 3);
    for key in 1..=3 {
        assert_eq!(grouped.get(&key), Some(&key));
    }
}

#[rstest]
fn test_group_by_unique_key_collision_fails() {
    let source = vec![1, 2, 3];
    let error = source.group_by_unique_key(|_| 2).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateKey);
    assert_eq!(error.operation(), "group_by_unique_key");
}

#[rstest]
fn test_group_by_unique_key_into_leaves_target_untouched_on_failure() {
    let source = vec![10, 20, 30, 11];
    let mut target: HashMap<i32, i32> = HashMap::from([(99, 99)]);
    let result = source.group_by_unique_key_into(|value| value % 10, &mut target);
    assert!(result.is_err());
    assert_eq!(target, HashMap::from([(99, 99)]));
}

#[rstest]
fn test_group_by_each_associates_every_key() {
    let source = vec!["ab", "bc"];
    let grouped = source.group_by_each(|word| word.chars().collect::<Vec<_>>());
    assert_eq!(grouped.get(&'a'), &["ab"]);
    assert_eq!(grouped.get(&'b'), &["ab", "bc"]);
    assert_eq!(grouped.get(&'c'), &["bc"]);
    assert_eq!(grouped.size(), 4);
}

#[rstest]
fn test_count_by_each_counts_once_per_key() {
    let source = vec![vec!["red", "blue"], vec!["red"], vec!["green", "red"]];
    let counts = source.count_by_each(|colours| colours.clone());
    assert_eq!(counts.occurrences_of(&"red"), 3);
    assert_eq!(counts.occurrences_of(&"blue"), 1);
    assert_eq!(counts.size_distinct(), 3);
}

#[rstest]
fn test_count_by_with_parameter() {
    let source = vec![5, 15, 25, 6];
    let counts = source.count_by_with(|value, modulus| value % modulus, &10);
    assert_eq!(counts.occurrences_of(&5), 3);
    assert_eq!(counts.occurrences_of(&6), 1);
}

#[rstest]
fn test_aggregate_by_and_in_place() {
    let source = vec![("fruit", 3), ("veg", 2), ("fruit", 4)];
    let totals = source.aggregate_by(|item| item.0, || 0, |sum, item| sum + item.1);
    assert_eq!(totals[&"fruit"], 7);
    assert_eq!(totals[&"veg"], 2);

    let lists = source.aggregate_in_place_by(|item| item.0, Vec::new, |list, item| list.push(item.1));
    assert_eq!(lists[&"fruit"], vec![3, 4]);
}

// =============================================================================
// Numeric reductions
// =============================================================================

#[rstest]
fn test_sum_of_float_is_compensated() {
    let source = vec![1.0_f32 / 3.0; 99_999];
    let sum = source.sum_of_float(|value| *value);
    assert!((sum - 33_333.000_993_400_81).abs() < 1e-6, "sum was {sum}");
}

#[rstest]
fn test_summaries() {
    let source = vec![4, -2, 9];
    let statistics = source.summarize_int(|value| *value);
    assert_eq!(statistics.count(), 3);
    assert_eq!(statistics.sum(), 11);
    assert_eq!(statistics.min(), Some(-2));
    assert_eq!(statistics.max(), Some(9));

    let empty: Vec<f64> = Vec::new();
    let statistics = empty.summarize_double(|value| *value);
    assert_eq!(statistics.count(), 0);
    assert_eq!(statistics.max(), None);
}

#[rstest]
fn test_sum_by_groups() {
    let source = vec![("a", 1), ("b", 2), ("a", 3)];
    let sums = source.sum_by_int(|item| item.0, |item| item.1);
    assert_eq!(sums[&"a"], 4);
    assert_eq!(sums[&"b"], 2);
    let sums = source.sum_by_double(|item| item.0, |item| f64::from(item.1) / 2.0);
    assert!((sums[&"a"] - 2.0).abs() < f64::EPSILON);
}

#[rstest]
#[case::empty(vec![], None)]
#[case::one(vec![7], Some(7))]
#[case::many(vec![1, 2, 3, 4], Some(10))]
fn test_reduce(#[case] source: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(source.reduce(|sum, value| sum + value), expected);
}

// =============================================================================
// Chunk and zip
// =============================================================================

#[rstest]
fn test_chunk_seven_by_two() {
    let source: Vec<i32> = (1..=7).collect();
    let chunks = source.chunk(2).unwrap();
    assert_eq!(chunks.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 2, 1]);
    assert_eq!(chunks[3], vec![7]);
}

#[rstest]
fn test_chunk_of_empty_source_yields_no_chunks() {
    let source: Vec<i32> = Vec::new();
    assert!(source.chunk(3).unwrap().is_empty());
}

#[rstest]
fn test_chunk_zero_fails() {
    let error = vec![1].chunk(0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[rstest]
fn test_chunk_keeps_set_shape() {
    let source: BTreeSet<i32> = (1..=5).collect();
    let chunks = source.chunk(2).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], BTreeSet::from([1, 2]));
}

#[rstest]
fn test_zip_stops_at_shorter() {
    let source = vec!['a', 'b', 'c'];
    assert_eq!(source.zip([1, 2]), vec![('a', 1), ('b', 2)]);
    assert_eq!(source.zip_with_index(), vec![('a', 0), ('b', 1), ('c', 2)]);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_map_overwrites_and_to_unique_map_fails() {
    let source = vec!["ant", "bee", "cat"];
    let overwritten = source.to_map(|word| word.len(), |word| *word);
    assert_eq!(overwritten.len(), 1);
    assert_eq!(overwritten[&3], "cat");
    assert_eq!(
        source.to_unique_map(|word| word.len(), |word| *word).unwrap_err().kind(),
        ErrorKind::DuplicateKey
    );
}

#[rstest]
fn test_to_bi_map_rejects_value_collisions() {
    let source = vec![1, 2, 3];
    let bimap = source.to_bi_map(|value| *value, |value| value * 10).unwrap();
    assert_eq!(bimap.get_key(&20), Some(&2));

    let error = source.to_bi_map(|value| *value, |value| value % 2).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateValue);
    let error = source.to_bi_map(|_| 0, |value| *value).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateKey);
}

#[rstest]
fn test_sorted_conversions() {
    let source = vec![3, 1, 2, 3];
    assert_eq!(source.to_sorted_list(), vec![1, 2, 3, 3]);
    assert_eq!(source.to_sorted_set().as_slice(), &[1, 2, 3]);
    assert_eq!(source.to_sorted_bag().occurrences_of(&3), 2);
    assert_eq!(
        source.to_sorted_list_with(&Comparator::<i32>::natural().reversed()),
        vec![3, 3, 2, 1]
    );
    assert_eq!(source.to_sorted_set_by(|value| -value).as_slice(), &[3, 2, 1]);
}

#[rstest]
fn test_sorted_map_from_pairs_iterates_in_key_order() {
    let pairs = vec![(3, "3"), (1, "1"), (2, "2")];
    let map = pairs.to_sorted_map(|pair| pair.0, |pair| pair.1);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(map.to_list(), vec!["1", "2", "3"]);
}

#[rstest]
fn test_to_immutable_list_is_independent() {
    let mut source = vec![1, 2];
    let frozen = source.to_immutable_list();
    source.push(3);
    assert_eq!(&*frozen, &[1, 2]);
}

// =============================================================================
// Detection, predicates and rendering
// =============================================================================

#[rstest]
fn test_detect_family() {
    let source = vec![1, 4, 9, 16];
    assert_eq!(source.detect(|value| *value > 5), Some(&9));
    assert_eq!(source.detect(|value| *value > 50), None);
    assert_eq!(source.detect_if_none(|value| *value > 50, || -1), -1);
    assert_eq!(source.detect_with(|value, limit| value > limit, &10), Some(&16));
}

#[rstest]
fn test_vacuous_truth_on_empty() {
    let source: Vec<i32> = Vec::new();
    assert!(source.all_satisfy(|_| false));
    assert!(source.none_satisfy(|_| true));
    assert!(!source.any_satisfy(|_| true));
}

#[rstest]
fn test_get_only() {
    assert_eq!(vec![42].get_only(), Ok(&42));
    assert_eq!(vec![1, 2].get_only().unwrap_err().kind(), ErrorKind::IllegalState);
    assert_eq!(Vec::<i32>::new().get_only().unwrap_err().kind(), ErrorKind::IllegalState);
}

#[rstest]
fn test_make_string_variants() {
    let source = vec![1, 2, 3];
    assert_eq!(source.make_string(), "1, 2, 3");
    assert_eq!(source.make_string_with("/"), "1/2/3");
    assert_eq!(source.make_string_wrapped("<", "|", ">"), "<1|2|3>");
    let mut rendered = String::from("values: ");
    source.append_string(&mut rendered, "[", ", ", "]").unwrap();
    assert_eq!(rendered, "values: [1, 2, 3]");
}

#[rstest]
fn test_flat_collect_concatenates_in_order() {
    let source = vec![1, 2, 3];
    assert_eq!(
        source.flat_collect(|value| vec![*value; *value as usize]),
        vec![1, 2, 2, 3, 3, 3]
    );
}

#[rstest]
fn test_collect_if_filters_then_maps() {
    let source = vec![1, 2, 3, 4];
    assert_eq!(source.collect_if(|value| value % 2 == 0, |value| value * value), vec![4, 16]);
}

#[rstest]
fn test_with_variants_receive_parameter() {
    let source = vec![1, 5, 10];
    assert_eq!(source.select_with(|value, limit| value >= limit, &5), vec![5, 10]);
    assert_eq!(source.reject_with(|value, limit| value >= limit, &5), vec![1]);
    assert_eq!(source.count_with(|value, limit| value >= limit, &5), 2);
    assert_eq!(source.collect_with(|value, offset| value + offset, &1), vec![2, 6, 11]);
    let partition = source.partition_with(|value, limit| value > limit, &4);
    assert_eq!(partition.selected(), &vec![5, 10]);
}

#[rstest]
fn test_hash_set_select_keeps_set_shape() {
    let source: HashSet<i32> = (1..=6).collect();
    let evens = source.select(|value| value % 2 == 0);
    assert_eq!(evens, HashSet::from([2, 4, 6]));
}

#[rstest]
fn test_bag_protocol() {
    let bag: HashBag<&str> = ["a", "b", "a", "c", "a"].into_iter().collect();
    assert_eq!(bag.size(), 5);
    assert_eq!(bag.count(|word| *word == "a"), 3);
    assert_eq!(bag.select(|word| *word != "a").size(), 2);
}
