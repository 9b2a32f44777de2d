//! Hint highlighting relation
//!
//! Maps a lower-cased token to the clue that asked for it to be highlighted.
//! A later hint overwrites an earlier mapping for the same token.

use super::ClueId;
use rustc_hash::FxHashMap;

/// Token → clue relation used to highlight hinted words and red herrings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintTable {
    entries: FxHashMap<String, ClueId>,
}

impl HintTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from `(token, clue)` pairs; later pairs win
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, ClueId)>) -> Self {
        let mut table = Self::new();
        for (token, clue_id) in pairs {
            table.assign(&token, clue_id);
        }
        table
    }

    /// Highlight `token` for `clue_id`, replacing any previous owner
    pub fn assign(&mut self, token: &str, clue_id: ClueId) {
        self.entries.insert(token.to_lowercase(), clue_id);
    }

    /// Clue currently highlighting `token`, if any
    #[must_use]
    pub fn owner(&self, token: &str) -> Option<ClueId> {
        self.entries.get(&token.to_lowercase()).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.owner(token).is_some()
    }

    /// Tokens currently mapped to `clue_id`, sorted
    #[must_use]
    pub fn tokens_for(&self, clue_id: ClueId) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .entries
            .iter()
            .filter(|&(_, &owner)| owner == clue_id)
            .map(|(token, _)| token.clone())
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// Drop every entry owned by `clue_id` and return the dropped tokens
    pub fn release(&mut self, clue_id: ClueId) -> Vec<String> {
        let released = self.tokens_for(clue_id);
        self.entries.retain(|_, owner| *owner != clue_id);
        released
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ClueId)> {
        self.entries.iter().map(|(token, &id)| (token.as_str(), id))
    }

    /// Entries as pairs sorted by token, for serialization
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, ClueId)> {
        let mut pairs: Vec<(String, ClueId)> = self
            .entries
            .iter()
            .map(|(token, &id)| (token.clone(), id))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_lowercases_tokens() {
        let mut table = HintTable::new();
        table.assign("Apple", 1);
        assert_eq!(table.owner("apple"), Some(1));
        assert_eq!(table.owner("APPLE"), Some(1));
    }

    #[test]
    fn last_assignment_wins() {
        let mut table = HintTable::new();
        table.assign("river", 0);
        table.assign("river", 2);
        assert_eq!(table.owner("river"), Some(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn release_removes_only_that_clue() {
        let mut table = HintTable::new();
        table.assign("big", 1);
        table.assign("pie", 1);
        table.assign("river", 1);
        table.assign("bond", 0);

        let released = table.release(1);
        assert_eq!(released, ["big", "pie", "river"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.owner("bond"), Some(0));
        assert!(!table.contains("river"));
    }

    #[test]
    fn release_unknown_clue_is_empty() {
        let mut table = HintTable::new();
        table.assign("bond", 0);
        assert!(table.release(3).is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn pairs_are_sorted_and_rebuild_the_table() {
        let mut table = HintTable::new();
        table.assign("pie", 1);
        table.assign("apple", 1);
        table.assign("bond", 0);

        let pairs = table.to_pairs();
        assert_eq!(
            pairs,
            [
                ("apple".to_string(), 1),
                ("bond".to_string(), 0),
                ("pie".to_string(), 1)
            ]
        );
        assert_eq!(HintTable::from_pairs(pairs), table);
    }

    #[test]
    fn from_pairs_keeps_last_duplicate() {
        let table = HintTable::from_pairs([("river".to_string(), 0), ("river".to_string(), 3)]);
        assert_eq!(table.owner("river"), Some(3));
    }
}
