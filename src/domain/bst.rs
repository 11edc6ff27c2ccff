//! Persistent binary search tree over string keys.
//!
//! Insertion never touches existing nodes: it rebuilds the path from the
//! root to the insertion point and shares every other subtree with the
//! previous version.
//!
//! Queries, insertion, `Display` and drop use explicit stacks rather than
//! recursing on tree height, so a spine built from sorted input is fine.
//! Only `to_tree_string` recurses.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::Arc;

use termtree::Tree;

/// An immutable set of unique strings, ordered by byte-wise comparison.
#[derive(Debug, Clone, Default)]
pub enum BinarySearchTree {
    #[default]
    Empty,
    Node(Arc<Node>),
}

#[derive(Debug)]
pub struct Node {
    key: String,
    left: BinarySearchTree,
    right: BinarySearchTree,
}

impl Node {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn left(&self) -> &BinarySearchTree {
        &self.left
    }

    pub fn right(&self) -> &BinarySearchTree {
        &self.right
    }
}

/// Iterative teardown: uniquely owned children are unlinked one at a time.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(tree) = pending.pop() {
            if let BinarySearchTree::Node(arc) = tree {
                // still shared with another version: only the count drops
                if let Ok(mut node) = Arc::try_unwrap(arc) {
                    pending.push(mem::take(&mut node.left));
                    pending.push(mem::take(&mut node.right));
                }
            }
        }
    }
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::Empty
    }

    fn node(key: String, left: BinarySearchTree, right: BinarySearchTree) -> Self {
        Self::Node(Arc::new(Node { key, left, right }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of keys in the tree.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest root-to-leaf path; an empty tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((tree, level)) = stack.pop() {
            if let Self::Node(node) = tree {
                deepest = deepest.max(level);
                stack.push((&node.left, level + 1));
                stack.push((&node.right, level + 1));
            }
        }
        deepest
    }

    /// Return a tree that also contains `key`.
    ///
    /// `self` is left untouched. Only the path from the root to the new leaf
    /// is rebuilt. When `key` is already present nothing is rebuilt and the
    /// very same root comes back (see [`BinarySearchTree::shares_root_with`]).
    pub fn insert(&self, key: &str) -> Self {
        let mut path: Vec<(&Node, Ordering)> = Vec::new();
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return self.clone(),
                Ordering::Less => {
                    path.push((node.as_ref(), Ordering::Less));
                    cursor = &node.left;
                }
                Ordering::Greater => {
                    path.push((node.as_ref(), Ordering::Greater));
                    cursor = &node.right;
                }
            }
        }

        let leaf = Self::node(key.to_string(), Self::Empty, Self::Empty);
        path.into_iter()
            .rev()
            .fold(leaf, |child, (parent, side)| match side {
                Ordering::Less => Self::node(parent.key.clone(), child, parent.right.clone()),
                _ => Self::node(parent.key.clone(), parent.left.clone(), child),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            cursor = match key.cmp(node.key.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// True if both trees are rooted at the same allocation.
    /// Two empty trees trivially share their root.
    pub fn shares_root_with(&self, other: &BinarySearchTree) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(a), Self::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// In-order (ascending) iteration over the keys.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Convert to a `termtree::Tree` for indented terminal display.
    /// Children are listed left before right; empty subtrees are omitted.
    pub fn to_tree_string(&self) -> Tree<String> {
        match self {
            Self::Empty => Tree::new("(empty)".to_string()),
            Self::Node(node) => {
                let leaves: Vec<_> = [&node.left, &node.right]
                    .into_iter()
                    .filter(|child| !child.is_empty())
                    .map(|child| child.to_tree_string())
                    .collect();
                Tree::new(node.key.clone()).with_leaves(leaves)
            }
        }
    }
}

/// Stack-based in-order traversal; the stack holds the pending left spine.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut tree: &'a BinarySearchTree) {
        while let BinarySearchTree::Node(node) = tree {
            self.stack.push(node.as_ref());
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.key.as_str())
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BinarySearchTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::Empty, |tree, key| tree.insert(key.as_ref()))
    }
}

enum RenderStep<'a> {
    Tree(&'a BinarySearchTree),
    Text(&'a str),
}

/// Renders `(left key right)`; an empty tree renders as nothing.
impl fmt::Display for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps = vec![RenderStep::Tree(self)];
        while let Some(step) = steps.pop() {
            match step {
                RenderStep::Text(text) => f.write_str(text)?,
                RenderStep::Tree(Self::Empty) => {}
                RenderStep::Tree(Self::Node(node)) => {
                    steps.push(RenderStep::Text(")"));
                    steps.push(RenderStep::Tree(&node.right));
                    steps.push(RenderStep::Text(&node.key));
                    steps.push(RenderStep::Tree(&node.left));
                    steps.push(RenderStep::Text("("));
                }
            }
        }
        Ok(())
    }
}

/// Set equality: same keys regardless of shape.
impl PartialEq for BinarySearchTree {
    fn eq(&self, other: &Self) -> bool {
        self.shares_root_with(other) || self.iter().eq(other.iter())
    }
}

impl Eq for BinarySearchTree {}
