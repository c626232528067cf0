// crates/streetmap-core/src/trie.rs

//! # Prefix Index
//!
//! A character trie over cleaned location names. Children are kept in a
//! `BTreeMap`, so every traversal visits them in ascending character order
//! and enumeration results are reproducible for identical input.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TrieNode {
    is_word: bool,
    children: BTreeMap<char, TrieNode>,
}

/// Set of canonical keys supporting prefix enumeration.
///
/// Insertion and point lookups are `O(key length)`. Enumerating the keys
/// under a prefix costs `O(prefix length + total length of the matches)`.
///
/// # Examples
///
/// ```rust
/// use streetmap_core::trie::PrefixIndex;
///
/// let index: PrefixIndex = ["main street", "maine ave", "market"].into_iter().collect();
///
/// assert_eq!(index.words_with_prefix("mai"), vec!["main street", "maine ave"]);
/// assert!(index.contains_prefix("mar"));
/// assert!(!index.contains("mai"));
/// ```
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`. Inserting a key that is already present is a no-op.
    pub fn insert(&mut self, key: &str) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if `key` was inserted as a complete key.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some_and(|n| n.is_word)
    }

    /// `true` if `prefix` lies on the path of some inserted key.
    ///
    /// The root is always present, so `""` is contained even in an empty index.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// All stored keys starting with `prefix`, `prefix` itself included when
    /// it was stored. An unknown prefix yields an empty `Vec`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.iter_prefix(prefix).collect()
    }

    /// Lazy version of [`PrefixIndex::words_with_prefix`].
    pub fn iter_prefix<'a>(&'a self, prefix: &str) -> PrefixWords<'a> {
        let stack = match self.find(prefix) {
            Some(node) => vec![Frame {
                node,
                edge: None,
                base: prefix.len(),
            }],
            None => Vec::new(),
        };
        PrefixWords {
            stack,
            path: prefix.to_owned(),
        }
    }

    /// Every stored key, in ascending order.
    pub fn words(&self) -> PrefixWords<'_> {
        self.iter_prefix("")
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

// The derived drop would recurse once per character of the longest key.
impl Drop for PrefixIndex {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.root.children)];
        while let Some(children) = pending.pop() {
            for (_, mut child) in children {
                pending.push(std::mem::take(&mut child.children));
            }
        }
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

/// Depth-first, pre-order walk over a trie subtree.
///
/// Uses an explicit work list instead of recursion, so arbitrarily long keys
/// cannot exhaust the call stack. Children are pushed in reverse so they pop
/// in ascending character order. A single path buffer is shared by all
/// frames; each frame records the buffer length it must be cut back to.
pub struct PrefixWords<'a> {
    stack: Vec<Frame<'a>>,
    path: String,
}

struct Frame<'a> {
    node: &'a TrieNode,
    edge: Option<char>,
    base: usize,
}

impl Iterator for PrefixWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(Frame { node, edge, base }) = self.stack.pop() {
            self.path.truncate(base);
            if let Some(c) = edge {
                self.path.push(c);
            }
            let depth = self.path.len();
            for (c, child) in node.children.iter().rev() {
                self.stack.push(Frame {
                    node: child,
                    edge: Some(*c),
                    base: depth,
                });
            }
            if node.is_word {
                return Some(self.path.clone());
            }
        }
        None
    }
}
