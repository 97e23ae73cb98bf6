use std::collections::BTreeMap;

use sod_core::NodeId;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<NodeId, usize>,
    terminal: bool,
}

/// Prefix tree over sorted member lists answering exact-set membership.
///
/// Paths spell node ids in ascending order and a terminal flag marks the
/// sets that were inserted, so a prefix of an inserted set is not a member.
#[derive(Debug, Clone)]
pub struct Trie {
    arena: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            arena: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie holding every set in `edges`.
    pub fn build<I, E, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        let mut trie = Self::new();
        for edge in edges {
            trie.insert(edge);
        }
        trie
    }

    /// Inserts a set, returning `false` when it was already present.
    pub fn insert<E, T>(&mut self, edge: E) -> bool
    where
        E: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        let path = sorted_path(edge);
        let mut cursor = 0;
        for node in path {
            cursor = match self.arena[cursor].children.get(&node) {
                Some(child) => *child,
                None => {
                    let child = self.arena.len();
                    self.arena.push(TrieNode::default());
                    self.arena[cursor].children.insert(node, child);
                    child
                }
            };
        }
        let fresh = !self.arena[cursor].terminal;
        self.arena[cursor].terminal = true;
        if fresh {
            self.len += 1;
        }
        fresh
    }

    /// Returns whether `candidate`, in any order, equals an inserted set.
    pub fn contains<E, T>(&self, candidate: E) -> bool
    where
        E: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.contains_sorted(&sorted_path(candidate))
    }

    /// Membership test for a candidate already sorted and duplicate free.
    pub fn contains_sorted(&self, candidate: &[NodeId]) -> bool {
        let mut cursor = 0;
        for node in candidate {
            match self.arena[cursor].children.get(node) {
                Some(child) => cursor = *child,
                None => return false,
            }
        }
        self.arena[cursor].terminal
    }

    /// Number of distinct sets inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no set has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn sorted_path<E, T>(edge: E) -> Vec<NodeId>
where
    E: IntoIterator<Item = T>,
    T: Into<NodeId>,
{
    let mut path: Vec<NodeId> = edge.into_iter().map(Into::into).collect();
    path.sort_unstable();
    path.dedup();
    path
}
