//! Integration tests for the persistent binary search tree.

use exkit::domain::BinarySearchTree;
use rstest::rstest;

const WORDS: [&str; 9] = [
    "pear", "apple", "fig", "kiwi", "banana", "plum", "cherry", "apple", "date",
];

fn build(keys: &[&str]) -> BinarySearchTree {
    keys.iter()
        .fold(BinarySearchTree::new(), |tree, key| tree.insert(key))
}

#[test]
fn given_empty_tree_then_size_zero_contains_nothing_and_renders_nothing() {
    let tree = BinarySearchTree::new();

    assert_eq!(tree.size(), 0);
    assert!(!tree.contains(""));
    assert!(!tree.contains("anything"));
    assert_eq!(tree.to_string(), "");
}

#[test]
fn given_inserted_keys_then_contains_exactly_those_keys() {
    let tree = build(&WORDS);

    for word in WORDS {
        assert!(tree.contains(word), "missing {word}");
    }
    for absent in ["grape", "Apple", "", "pearl"] {
        assert!(!tree.contains(absent), "unexpected {absent}");
    }
}

#[test]
fn given_keys_with_duplicates_then_size_counts_distinct_keys() {
    let tree = build(&WORDS);

    assert_eq!(tree.size(), 8);
}

#[test]
fn given_existing_key_when_inserted_again_then_tree_is_unchanged() {
    let tree = build(&["m", "c", "x", "a"]);

    let again = tree.insert("c");

    assert!(again.shares_root_with(&tree));
    assert_eq!(again.size(), tree.size());
    assert_eq!(again.to_string(), tree.to_string());
}

#[test]
fn given_sequence_of_versions_then_every_version_keeps_its_own_keys() {
    let v0 = BinarySearchTree::new();
    let v1 = v0.insert("b");
    let v2 = v1.insert("a");
    let v3 = v2.insert("c");

    assert_eq!(
        [v0.size(), v1.size(), v2.size(), v3.size()],
        [0, 1, 2, 3]
    );
    assert!(!v1.contains("a"));
    assert!(!v2.contains("c"));
    assert_eq!(v1.to_string(), "(b)");
    assert_eq!(v2.to_string(), "((a)b)");
    assert_eq!(v3.to_string(), "((a)b(c))");
}

#[rstest]
#[case(&["b", "a", "c"], "((a)b(c))")]
#[case(&["a", "b", "c"], "(a(b(c)))")]
#[case(&["c", "b", "a"], "(((a)b)c)")]
#[case(&["d", "b", "f", "a", "c"], "(((a)b(c))d(f))")]
fn given_insertion_order_then_render_reflects_shape(
    #[case] keys: &[&str],
    #[case] expected: &str,
) {
    assert_eq!(build(keys).to_string(), expected);
}

#[test]
fn given_any_insertion_order_then_iteration_is_sorted() {
    let tree = build(&WORDS);

    let keys: Vec<&str> = tree.iter().collect();

    let mut expected: Vec<&str> = WORDS.to_vec();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(keys, expected);
}

#[test]
fn given_trees_built_in_different_orders_then_equal_as_sets() {
    let balanced = build(&["b", "a", "c"]);
    let chain = build(&["a", "b", "c"]);

    assert_eq!(balanced, chain);
    assert_ne!(balanced.to_string(), chain.to_string());
}

#[test]
fn given_string_iterator_when_collected_then_builds_tree() {
    let tree: BinarySearchTree = vec!["beta".to_string(), "alpha".to_string()]
        .into_iter()
        .collect();

    assert_eq!(tree.to_string(), "((alpha)beta)");
}
