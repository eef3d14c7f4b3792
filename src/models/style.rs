//! Ordered, duplicate-free list of style name tokens.

use serde::{Deserialize, Serialize};

/// Style names of a component.
///
/// Tokens keep first-insertion order and appear at most once. Input strings
/// are split on whitespace, so `"a b"` adds two tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleList(Vec<String>);

impl StyleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all tokens with the ones in `styles`.
    pub fn set(&mut self, styles: &str) {
        self.0.clear();
        self.add(styles);
    }

    /// Add each whitespace-separated token not already present.
    /// Returns true if anything was added.
    pub fn add(&mut self, styles: &str) -> bool {
        let mut changed = false;
        for token in styles.split_whitespace() {
            if !self.contains(token) {
                self.0.push(token.to_string());
                changed = true;
            }
        }
        changed
    }

    /// Remove each whitespace-separated token. Returns true if anything was removed.
    pub fn remove(&mut self, styles: &str) -> bool {
        let before = self.0.len();
        for token in styles.split_whitespace() {
            self.0.retain(|s| s != token);
        }
        self.0.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|s| s == token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Space-joined form sent to the client.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}
