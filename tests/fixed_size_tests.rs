//! Integration tests for FixedSizeList and the MutableCollection interface.

use std::collections::HashSet;

use rich_collections::prelude::*;
use rstest::rstest;

// =============================================================================
// Fixed Size Operations
// =============================================================================

#[rstest]
fn test_of_and_empty() {
    let list = FixedSizeList::of(['x', 'y']);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1), Some(&'y'));
    assert_eq!(list.get(2), None);
    assert!(FixedSizeList::<i32>::empty().is_empty());
}

#[rstest]
fn test_set_out_of_bounds_is_invalid_argument() {
    let mut list = FixedSizeList::of([1, 2, 3]);
    let error = list.set(3, 9).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.operation(), "set");
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_sorting_in_place() {
    let mut list: FixedSizeList<&str> = ["pear", "fig", "banana"].into_iter().collect();
    list.sort_this_by(|word| word.len());
    assert_eq!(list.as_slice(), &["fig", "pear", "banana"]);
    list.sort_this_with(&Comparator::<&str>::natural().reversed());
    assert_eq!(list.as_slice(), &["pear", "fig", "banana"]);
    list.reverse_this().sort_this();
    assert_eq!(list.as_slice(), &["banana", "fig", "pear"]);
}

#[rstest]
fn test_with_and_without_return_new_lists() {
    let list = FixedSizeList::of([1, 2, 3, 2]);
    assert_eq!(list.with(5), vec![1, 2, 3, 2, 5]);
    assert_eq!(list.with_all([6, 7]), vec![1, 2, 3, 2, 6, 7]);
    assert_eq!(list.without(&2), vec![1, 3, 2]);
    assert_eq!(list.without_all(&[2, 3]), vec![1]);
    assert_eq!(list.len(), 4);
}

#[rstest]
fn test_display_and_debug() {
    let list = FixedSizeList::of([1, 2]);
    assert_eq!(list.to_string(), "[1, 2]");
    assert_eq!(format!("{list:?}"), "[1, 2]");
}

// =============================================================================
// Protocol Tests
// =============================================================================

#[rstest]
fn test_protocol_over_fixed_size_list() {
    let list = FixedSizeList::of([5, 3, 8, 3]);
    assert_eq!(list.select(|value| *value > 3), vec![5, 8]);
    assert_eq!(list.min_element(), Ok(&3));
    assert_eq!(list.index_of(&3), Ok(Some(1)));
    assert_eq!(list.detect_last_index(|value| *value == 3), Ok(Some(3)));
    let reversed: Vec<i32> = list.as_reversed().unwrap().copied().collect();
    assert_eq!(reversed, vec![3, 8, 3, 5]);
}

#[rstest]
#[case::forward(1, 3, vec![3, 8, 3])]
#[case::backward(2, 0, vec![8, 3, 5])]
#[case::single(0, 0, vec![5])]
fn test_for_each_in_range(#[case] from: usize, #[case] to: usize, #[case] expected: Vec<i32>) {
    let list = FixedSizeList::of([5, 3, 8, 3]);
    let mut visited = Vec::new();
    list.for_each_in_range(from, to, |value| visited.push(*value)).unwrap();
    assert_eq!(visited, expected);
}

// =============================================================================
// MutableCollection Tests
// =============================================================================

#[rstest]
#[case::add("add")]
#[case::remove("remove")]
#[case::remove_if("remove_if")]
#[case::clear("clear")]
#[case::add_all("add_all")]
#[case::remove_all("remove_all")]
#[case::retain_all("retain_all")]
fn test_fixed_size_list_rejects_mutation(#[case] operation: &str) {
    let mut list = FixedSizeList::of([1, 2, 3]);
    let error = match operation {
        "add" => list.try_add(4).map(|_| ()),
        "remove" => list.try_remove(&1).map(|_| ()),
        "remove_if" => list.try_remove_if(|_| true).map(|_| ()),
        "clear" => list.try_clear(),
        "add_all" => list.try_add_all([4, 5]).map(|_| ()),
        "remove_all" => list.try_remove_all(&[1]).map(|_| ()),
        _ => list.try_retain_all(&[1]).map(|_| ()),
    }
    .unwrap_err();
    assert_eq!(
        error,
        CollectionError::NotSupported {
            container: "FixedSizeList",
            operation: match operation {
                "add" => "add",
                "remove" => "remove",
                "remove_if" => "remove_if",
                "clear" => "clear",
                "add_all" => "add_all",
                "remove_all" => "remove_all",
                _ => "retain_all",
            },
        }
    );
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

fn fill<C>(collection: &mut C, values: Vec<i32>) -> CollectionResult<usize>
where
    C: MutableCollection<Element = i32>,
{
    collection.try_add_all(values)?;
    collection.try_remove_if(|value| value % 2 == 0)?;
    Ok(collection.size())
}

#[rstest]
fn test_uniform_mutation_across_containers() {
    let mut list: Vec<i32> = Vec::new();
    assert_eq!(fill(&mut list, vec![1, 2, 3, 3]), Ok(3));

    let mut set: HashSet<i32> = HashSet::new();
    assert_eq!(fill(&mut set, vec![1, 2, 3, 3]), Ok(2));

    let mut sorted = TreeSortedSet::new();
    assert_eq!(fill(&mut sorted, vec![5, 2, 1]), Ok(2));
    assert_eq!(sorted.as_slice(), &[1, 5]);

    let mut fixed = FixedSizeList::of([1, 2]);
    assert_eq!(
        fill(&mut fixed, vec![3]).unwrap_err().kind(),
        ErrorKind::NotSupported
    );
}

#[rstest]
fn test_retain_all_on_vec() {
    let mut list = vec![1, 2, 3, 4];
    assert_eq!(list.try_retain_all(&[2, 4, 6]), Ok(true));
    assert_eq!(list, vec![2, 4]);
    assert_eq!(list.try_remove_all(&[9]), Ok(false));
}
