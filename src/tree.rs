//! A mutable BST of plain values. Operations that modify the tree take
//! `&mut self` and re-link owned nodes in place.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(2).insert(1).insert(3);
//! assert_eq!(tree.dfs_in_order(), vec![&1, &2, &3]);
//!
//! // Removing a node detaches it and hands it back.
//! let removed = tree.remove(&1);
//! assert_eq!(removed.map(|node| node.into_value()), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::EmptyTreeError;

/// An owned, optional edge to a child subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of values. This can be used for inserting, finding,
/// and removing values, traversing them in several orders, and asking two
/// structural questions ([`is_balanced`][Tree::is_balanced] and
/// [`find_second_highest`][Tree::find_second_highest]).
///
/// The tree never rebalances itself: its shape depends only on the order of
/// insertion. Equal values break ties to the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

/// A `Node` holds one value and owns up to two child `Node`s. Every node in a
/// [`Tree`] is owned by its parent (or by the tree, for the root), so a node
/// returned from [`Tree::remove`] is fully detached and carries no children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` recurses down the tree, and a degenerate
        // chain can be deeper than the call stack allows. Unlink the nodes
        // onto an explicit stack instead.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` around a pre-built root node.
    ///
    /// The caller is responsible for the ordering invariant of any hand-built
    /// subtree hanging off `root`; the tree's own operations assume it holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = Tree::with_root(root);
    ///
    /// assert_eq!(tree.dfs_in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Inserts the given value as a new leaf, iteratively. Descends left when
    /// the value is less than the current node's value and right otherwise,
    /// so duplicates end up in right subtrees. Returns the tree so inserts
    /// can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.bfs(), vec![&2, &1, &3]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self
    }

    /// Inserts the given value as a new leaf, recursively. Same routing rule
    /// as [`insert`][Tree::insert]: the two forms build structurally
    /// identical trees for the same insertion sequence.
    pub fn insert_recursively(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
        self
    }

    /// Potentially finds the node holding the given value, iteratively. If no
    /// node holds the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Node, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.find(&3).map(Node::value), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Potentially finds the node holding the given value, recursively, with
    /// the same outcome as [`find`][Tree::find]. An empty tree yields `None`.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|root| root.find(value))
    }

    /// Visits every value depth-first in pre-order: node, left subtree, then
    /// right subtree. An empty tree yields an empty vector.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut visited);
        }
        visited
    }

    /// Visits every value depth-first in-order: left subtree, node, then
    /// right subtree. For any tree built purely through insertion this yields
    /// the values in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1);
    ///
    /// assert_eq!(tree.dfs_in_order(), vec![&1, &3, &5, &8]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut visited);
        }
        visited
    }

    /// Visits every value depth-first in post-order: left subtree, right
    /// subtree, then node. An empty tree yields an empty vector.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut visited);
        }
        visited
    }

    /// Visits every value breadth-first: level by level, left to right. An
    /// empty tree yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1);
    ///
    /// assert_eq!(tree.bfs(), vec![&5, &3, &8, &1]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut visited = Vec::new();
        let Some(root) = self.root.as_deref() else {
            return visited;
        };
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
            visited.push(&node.value);
        }
        visited
    }

    /// Removes the first node found holding the given value and returns it,
    /// detached: the returned node owns its value and nothing else. Returns
    /// `None` when no node holds the value. Removing the root works like
    /// removing any other node.
    ///
    /// A removed leaf leaves an empty slot behind; a node with one child is
    /// replaced by that child; a node with two children is replaced by its
    /// in-order successor (the leftmost node of its right subtree), which is
    /// unlinked from its old position and adopts both children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1).insert(4);
    ///
    /// // 3 has two children, so its successor 4 takes its place.
    /// let removed = tree.remove(&3);
    /// assert_eq!(removed.map(|node| node.into_value()), Some(3));
    /// assert_eq!(tree.dfs_in_order(), vec![&1, &4, &5, &8]);
    ///
    /// assert_eq!(tree.remove(&42), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<Node<T>>
    where
        T: Ord,
    {
        remove_node(&mut self.root, value).map(|node| *node)
    }

    /// Reports whether the tree is balanced, by position rather than height:
    /// the tree counts as balanced when the number of values before the
    /// root's value in the in-order sequence and the number after it differ
    /// by at most 1. A taller-on-one-side tree can still pass this check as
    /// long as the root splits the values near the middle.
    ///
    /// The question is undefined on an empty tree, which is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{EmptyTreeError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.is_balanced(), Err(EmptyTreeError));
    ///
    /// tree.insert(2).insert(1).insert(3);
    /// assert_eq!(tree.is_balanced(), Ok(true));
    ///
    /// let mut chain = Tree::new();
    /// chain.insert(1).insert(2).insert(3);
    /// assert_eq!(chain.is_balanced(), Ok(false));
    /// ```
    pub fn is_balanced(&self) -> Result<bool, EmptyTreeError>
    where
        T: Ord,
    {
        let root = self.root.as_deref().ok_or(EmptyTreeError)?;
        let values = self.dfs_in_order();
        // Duplicates of the root's value sort to its right, so the first
        // occurrence in the in-order sequence is the root itself.
        let before = values.iter().take_while(|v| ***v != root.value).count();
        let after = values.len() - before - 1;
        Ok(before.abs_diff(after) <= 1)
    }

    /// Finds the second-highest value in the tree, if it exists: the parent
    /// of the maximum node, or the maximum's in-order predecessor (the
    /// rightmost node of its left subtree) when the maximum has one. Trees
    /// with fewer than two nodes have no second-highest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find_second_highest(), None);
    ///
    /// tree.insert(5).insert(3).insert(8).insert(9);
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        let mut parent_value = None;
        while let Some(right) = current.right.as_deref() {
            parent_value = Some(&current.value);
            current = right;
        }
        // `current` is now the maximum node.
        match current.left.as_deref() {
            Some(left) => Some(&left.rightmost().value),
            None => parent_value,
        }
    }
}

impl<T> Node<T> {
    /// Constructs a new leaf `Node` holding the given value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Constructs a `Node` with the given children, for handing a pre-built
    /// subtree to [`Tree::with_root`]. The children must respect the ordering
    /// invariant for tree operations to behave.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value this node holds.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Consumes this node, yielding its value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        if value < self.value {
            match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => self.left = Some(Box::new(Node::new(value))),
            }
        } else {
            match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => self.right = Some(Box::new(Node::new(value))),
            }
        }
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Equal => Some(self),
            Ordering::Less => self.left.as_deref().and_then(|left| left.find(value)),
            Ordering::Greater => self.right.as_deref().and_then(|right| right.find(value)),
        }
    }

    fn pre_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        visited.push(&self.value);
        if let Some(left) = self.left.as_deref() {
            left.pre_order(visited);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order(visited);
        }
    }

    fn in_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.in_order(visited);
        }
        visited.push(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(visited);
        }
    }

    fn post_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.post_order(visited);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order(visited);
        }
        visited.push(&self.value);
    }

    fn rightmost(&self) -> &Node<T> {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }
}

/// Descends to the link holding a node with the given value, using the same
/// three-way comparison as `find`, and detaches it.
fn remove_node<T: Ord>(link: &mut Link<T>, value: &T) -> Option<Box<Node<T>>> {
    let ordering = value.cmp(&link.as_deref()?.value);
    match ordering {
        Ordering::Less => remove_node(&mut link.as_mut()?.left, value),
        Ordering::Greater => remove_node(&mut link.as_mut()?.right, value),
        Ordering::Equal => detach(link),
    }
}

/// Takes the node out of `link` and repairs the tree around the hole. The
/// returned node has both child slots emptied.
fn detach<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node),
        (Some(child), None) | (None, Some(child)) => {
            *link = Some(child);
            Some(node)
        }
        (Some(left), Some(right)) => {
            let mut right_link = Some(right);
            // The right subtree is non-empty, so it has a minimum to take.
            let mut successor = take_min(&mut right_link)?;
            successor.left = Some(left);
            successor.right = right_link;
            *link = Some(successor);
            Some(node)
        }
    }
}

/// Unlinks and returns the leftmost node under `link`. Its right child, if
/// any, is promoted into the vacated slot.
fn take_min<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    if link.as_deref()?.left.is_some() {
        take_min(&mut link.as_mut()?.left)
    } else {
        let mut node = link.take()?;
        *link = node.right.take();
        Some(node)
    }
}
