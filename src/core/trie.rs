// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct PrefixNode {
    children: HashMap<char, usize>,
    value: Option<String>,
}

impl PrefixNode {
    fn new() -> Self {
        Self { children: HashMap::new(), value: None }
    }
}

/// A longest-prefix index over lowercase keys, built once per tier.
/// Nodes live in a flat arena; index 0 is the root.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    len: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self { nodes: vec![PrefixNode::new()], len: 0 }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` (expected lowercase) mapping to `value`, replacing any
    /// previous value. Empty keys are ignored: they would match without
    /// consuming input.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        let mut node_idx = 0;
        for ch in key.chars() {
            node_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(PrefixNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
        }
        if self.nodes[node_idx].value.replace(value.to_string()).is_none() {
            self.len += 1;
        }
    }

    /// Finds the longest key equal to a case-folded prefix of `text`.
    /// Returns the number of bytes of `text` the key covers, and its value.
    /// O(m) where m is the length of the longest key walked.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let mut node_idx = 0;
        let mut best = None;
        for (offset, ch) in text.char_indices() {
            for lower in ch.to_lowercase() {
                match self.nodes[node_idx].children.get(&lower) {
                    Some(&next_idx) => node_idx = next_idx,
                    None => return best,
                }
            }
            if let Some(value) = &self.nodes[node_idx].value {
                best = Some((offset + ch.len_utf8(), value.as_str()));
            }
        }
        best
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        for (key, value) in iter {
            index.insert(key.as_ref(), value.as_ref());
        }
        index
    }
}
