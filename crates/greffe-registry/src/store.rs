//! # Table — Generic Row Storage
//!
//! One [`Table`] per entity kind, keyed by the entity's typed identifier.
//! Each row remembers the store-wide insertion sequence number it was
//! created with, which is what gives list endpoints their deterministic
//! insertion order without a B-tree.
//!
//! Tables know nothing about constraints; foreign keys, uniqueness, and
//! delete semantics live on [`crate::Registry`], which owns all tables
//! under one lock.

use std::collections::HashMap;

use greffe_model::Record;

struct Row<R> {
    seq: u64,
    value: R,
}

/// Row storage for one entity kind.
pub(crate) struct Table<R: Record> {
    rows: HashMap<R::Id, Row<R>>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<R: Record> Table<R> {
    /// Insert a freshly created row under the given store sequence.
    pub(crate) fn insert(&mut self, seq: u64, value: R) {
        self.rows.insert(value.id(), Row { seq, value });
    }

    /// Replace an existing row in place, keeping its sequence number.
    /// Returns false when the id is absent.
    pub(crate) fn replace(&mut self, value: R) -> bool {
        match self.rows.get_mut(&value.id()) {
            Some(row) => {
                row.value = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn get(&self, id: &R::Id) -> Option<&R> {
        self.rows.get(id).map(|row| &row.value)
    }

    pub(crate) fn contains(&self, id: &R::Id) -> bool {
        self.rows.contains_key(id)
    }

    pub(crate) fn remove(&mut self, id: &R::Id) -> Option<R> {
        self.rows.remove(id).map(|row| row.value)
    }

    /// Remove every row matching the predicate, returning the removed
    /// values. Used by cascading deletes.
    pub(crate) fn remove_where(&mut self, pred: impl Fn(&R) -> bool) -> Vec<R> {
        let doomed: Vec<R::Id> = self
            .rows
            .values()
            .filter(|row| pred(&row.value))
            .map(|row| row.value.id())
            .collect();
        doomed
            .into_iter()
            .filter_map(|id| self.rows.remove(&id).map(|row| row.value))
            .collect()
    }

    /// Mutate every row in place. Used by nullifying deletes.
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(&mut R)) {
        for row in self.rows.values_mut() {
            f(&mut row.value);
        }
    }

    /// Unordered scan, for constraint checks.
    pub(crate) fn values(&self) -> impl Iterator<Item = &R> {
        self.rows.values().map(|row| &row.value)
    }

    /// Rows in insertion order.
    pub(crate) fn in_order(&self) -> Vec<&R> {
        let mut rows: Vec<&Row<R>> = self.rows.values().collect();
        rows.sort_by_key(|row| row.seq);
        rows.into_iter().map(|row| &row.value).collect()
    }

    /// Rows newest first. Creation order is monotonic in the sequence, so
    /// descending sequence is descending creation time.
    pub(crate) fn newest_first(&self) -> Vec<&R> {
        let mut rows: Vec<&Row<R>> = self.rows.values().collect();
        rows.sort_by_key(|row| std::cmp::Reverse(row.seq));
        rows.into_iter().map(|row| &row.value).collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greffe_core::{NoteId, Timestamp};
    use greffe_model::Note;

    fn note(body: &str) -> Note {
        Note {
            id: NoteId::new(),
            created_at: Timestamp::now(),
            modified_at: Timestamp::now(),
            active: true,
            dossier: greffe_core::DossierId::new(),
            author: None,
            body: body.to_string(),
            public: false,
        }
    }

    #[test]
    fn test_in_order_follows_sequence_not_map_order() {
        let mut table: Table<Note> = Table::default();
        for (seq, body) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            table.insert(seq as u64, note(body));
        }
        let bodies: Vec<&str> = table.in_order().iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["a", "b", "c", "d", "e"]);
        let reversed: Vec<&str> = table
            .newest_first()
            .iter()
            .map(|n| n.body.as_str())
            .collect();
        assert_eq!(reversed, ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_replace_keeps_sequence() {
        let mut table: Table<Note> = Table::default();
        let first = note("first");
        let second = note("second");
        table.insert(0, first.clone());
        table.insert(1, second);
        let mut renamed = first.clone();
        renamed.body = "renamed".to_string();
        assert!(table.replace(renamed));
        let bodies: Vec<&str> = table.in_order().iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["renamed", "second"]);
    }

    #[test]
    fn test_remove_where_returns_removed() {
        let mut table: Table<Note> = Table::default();
        table.insert(0, note("keep"));
        table.insert(1, note("drop"));
        table.insert(2, note("drop"));
        let removed = table.remove_where(|n| n.body == "drop");
        assert_eq!(removed.len(), 2);
        assert_eq!(table.len(), 1);
    }
}
