use bstree::{EmptyTreeError, Node, Tree};

/// The worked example used throughout: a well-shaped seven-node tree.
///
/// ```text
///         5
///       /   \
///      3     8
///     / \   / \
///    1   4 7   9
/// ```
fn sample_tree() -> Tree<i32> {
    let mut tree = Tree::new();
    for value in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(value);
    }
    tree
}

fn copied(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}

#[test]
fn traversal_round_trip() {
    let tree = sample_tree();

    assert_eq!(copied(tree.dfs_in_order()), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(copied(tree.dfs_pre_order()), vec![5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(copied(tree.dfs_post_order()), vec![1, 4, 3, 7, 9, 8, 5]);
    assert_eq!(copied(tree.bfs()), vec![5, 3, 8, 1, 4, 7, 9]);
}

#[test]
fn finds_every_inserted_value_and_nothing_else() {
    let tree = sample_tree();

    for value in [5, 3, 8, 1, 4, 7, 9] {
        assert_eq!(tree.find(&value).map(Node::value), Some(&value));
        assert_eq!(tree.find_recursively(&value).map(Node::value), Some(&value));
    }
    for absent in [0, 2, 6, 10] {
        assert_eq!(tree.find(&absent), None);
        assert_eq!(tree.find_recursively(&absent), None);
    }
}

#[test]
fn removing_a_two_child_node_keeps_the_rest() {
    let mut tree = sample_tree();

    // 3 has both 1 and 4 below it.
    let removed = tree.remove(&3).expect("3 is in the tree");
    assert_eq!(removed.value(), &3);
    assert_eq!(removed.left(), None);
    assert_eq!(removed.right(), None);

    assert_eq!(tree.find(&3), None);
    assert_eq!(copied(tree.dfs_in_order()), vec![1, 4, 5, 7, 8, 9]);
}

#[test]
fn second_highest_of_sample_tree() {
    assert_eq!(sample_tree().find_second_highest(), Some(&8));
}

#[test]
fn sorted_insertions_are_not_balanced() {
    let mut tree = Tree::new();
    for value in 0..10 {
        tree.insert(value);
    }

    assert_eq!(tree.is_balanced(), Ok(false));
}

#[test]
fn sample_tree_is_balanced() {
    assert_eq!(sample_tree().is_balanced(), Ok(true));
}

#[test]
fn empty_tree_behaviors() {
    let tree: Tree<i32> = Tree::new();

    assert_eq!(tree.find(&1), None);
    assert_eq!(tree.find_recursively(&1), None);
    assert!(tree.dfs_pre_order().is_empty());
    assert!(tree.dfs_in_order().is_empty());
    assert!(tree.dfs_post_order().is_empty());
    assert!(tree.bfs().is_empty());
    assert_eq!(tree.is_balanced(), Err(EmptyTreeError));
    assert_eq!(tree.find_second_highest(), None);
}

#[test]
fn bfs_visits_each_node_once() {
    let tree = sample_tree();
    assert_eq!(tree.bfs().len(), 7);
}
