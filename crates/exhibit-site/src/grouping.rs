//! Bucketing of records by navigation group key.

use std::collections::HashMap;

use crate::record::ContentRecord;

/// Records bucketed by [`group key`](ContentRecord::group_key).
///
/// Groups keep the order in which their key was first seen, and members keep
/// input order within a group. Companions stay in the buckets; it is up to the
/// consumer to hide them.
#[derive(Debug, Default)]
pub struct RecordGroups<'a> {
    keys: Vec<String>,
    members: Vec<Vec<&'a ContentRecord>>,
    index: HashMap<String, usize>,
}

impl<'a> RecordGroups<'a> {
    /// Group records by their navigation group key.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ContentRecord>,
    {
        let mut groups = Self::default();
        for record in records {
            groups.push(record);
        }
        groups
    }

    fn push(&mut self, record: &'a ContentRecord) {
        let key = record.group_key();
        if let Some(&idx) = self.index.get(&key) {
            self.members[idx].push(record);
        } else {
            self.index.insert(key.clone(), self.keys.len());
            self.keys.push(key);
            self.members.push(vec![record]);
        }
    }

    /// Members of a group, `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[&'a ContentRecord]> {
        self.index.get(key).map(|&idx| self.members[idx].as_slice())
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
