//! The clue index
//!
//! An unbalanced binary search tree over clue text. Clues arrive in
//! whatever order the player stumbles onto them; the tree keeps them
//! sorted for the end-of-case report. The invariants are the usual BST
//! ones: everything in a node's left subtree compares below its text,
//! everything in the right subtree above, and no text is stored twice.
//!
//! No balancing is done. The clue set is a handful of strings, so the
//! O(n) worst-case shape is accepted.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A node in the clue index
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClueRecord {
    text: String,
    left: Option<Box<ClueRecord>>,
    right: Option<Box<ClueRecord>>,
}

impl ClueRecord {
    fn new(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Sorted set of every clue collected so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueIndex {
    root: Option<Box<ClueRecord>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Record a clue, keeping the index sorted
    ///
    /// Returns `true` if the clue was new; inserting a text that is
    /// already present changes nothing and returns `false`.
    pub fn insert(&mut self, text: &str) -> bool {
        let inserted = insert_at(&mut self.root, text);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut node = &self.root;
        while let Some(n) = node {
            match text.cmp(n.text.as_str()) {
                Ordering::Less => node = &n.left,
                Ordering::Equal => return true,
                Ordering::Greater => node = &n.right,
            }
        }
        false
    }

    /// Iterate over the clues in ascending lexicographic order
    ///
    /// The iterator is lazy and borrows the index, so it can be re-run
    /// any number of times.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Count the clues for which `pred` holds, visiting each node once
    ///
    /// Subtrees are visited independently; no ordering is promised.
    pub fn count_matching<F>(&self, pred: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        count_at(&self.root, &pred)
    }
}

fn insert_at(node: &mut Option<Box<ClueRecord>>, text: &str) -> bool {
    match node {
        None => {
            *node = Some(ClueRecord::new(text));
            true
        }
        Some(n) => match text.cmp(n.text.as_str()) {
            Ordering::Less => insert_at(&mut n.left, text),
            Ordering::Equal => false,
            Ordering::Greater => insert_at(&mut n.right, text),
        },
    }
}

fn count_at<F>(node: &Option<Box<ClueRecord>>, pred: &F) -> usize
where
    F: Fn(&str) -> bool,
{
    match node {
        None => 0,
        Some(n) => {
            let here = usize::from(pred(&n.text));
            here + count_at(&n.left, pred) + count_at(&n.right, pred)
        }
    }
}

/// In-order (sorted) iterator over a [`ClueIndex`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueRecord>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueRecord>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.text)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn index_of(texts: &[&str]) -> ClueIndex {
        let mut index = ClueIndex::new();
        for t in texts {
            index.insert(t);
        }
        index
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = ClueIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
        assert_eq!(index.count_matching(|_| true), 0);
    }

    #[test]
    fn iteration_is_sorted() {
        let index = index_of(&["knife", "almonds", "receipt", "footprints"]);
        let clues: Vec<&str> = index.iter().collect();
        assert_eq!(clues, vec!["almonds", "footprints", "knife", "receipt"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let index = index_of(&["b", "a", "c"]);
        let first: Vec<&str> = index.iter().collect();
        let second: Vec<&str> = index.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut index = index_of(&["knife", "almonds"]);
        assert!(!index.insert("knife"));
        assert_eq!(index.len(), 2);
        let clues: Vec<&str> = index.iter().collect();
        assert_eq!(clues, vec!["almonds", "knife"]);
    }

    #[test]
    fn count_matching_visits_every_node_once() {
        let index = index_of(&["a", "b", "c", "d", "e"]);
        assert_eq!(index.count_matching(|_| true), 5);
        assert_eq!(index.count_matching(|t| t > "c"), 2);
        assert_eq!(index.count_matching(|_| false), 0);
    }

    quickcheck! {
        fn inorder_is_strictly_ascending(texts: Vec<String>) -> bool {
            let mut index = ClueIndex::new();
            for t in &texts {
                index.insert(t);
            }
            let clues: Vec<&str> = index.iter().collect();
            clues.windows(2).all(|w| w[0] < w[1])
        }

        fn insertion_order_is_irrelevant(texts: Vec<String>) -> bool {
            let mut forward = ClueIndex::new();
            for t in &texts {
                forward.insert(t);
            }
            let mut backward = ClueIndex::new();
            for t in texts.iter().rev() {
                backward.insert(t);
            }
            forward.iter().eq(backward.iter())
        }

        fn reinsertion_changes_nothing(texts: Vec<String>) -> bool {
            let mut index = ClueIndex::new();
            for t in &texts {
                index.insert(t);
            }
            let before: Vec<String> = index.iter().map(String::from).collect();
            let len_before = index.len();
            for t in &texts {
                index.insert(t);
            }
            index.len() == len_before && index.iter().eq(before.iter().map(String::as_str))
        }

        fn len_matches_distinct_inputs(texts: Vec<String>) -> bool {
            let mut index = ClueIndex::new();
            for t in &texts {
                index.insert(t);
            }
            let mut distinct: Vec<&String> = texts.iter().collect();
            distinct.sort();
            distinct.dedup();
            index.len() == distinct.len() && index.iter().count() == distinct.len()
        }
    }
}
