//! Content index.
//!
//! Records are stored in a flat `Vec` in load order with an identifier
//! `HashMap` for O(1) lookups. Load order matters: it is the tie-break for
//! group ordering and routing.

use std::collections::HashMap;

use crate::record::{ContentRecord, DemoRecord};

/// Immutable snapshot of the content a [`Site`](crate::Site) works on.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    records: Vec<ContentRecord>,
    demos: Vec<DemoRecord>,
    identifier_index: HashMap<String, usize>,
}

impl ContentIndex {
    /// Start building an index.
    #[must_use]
    pub fn builder() -> ContentIndexBuilder {
        ContentIndexBuilder::default()
    }

    /// All content records in load order.
    #[must_use]
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// All demos in load order.
    #[must_use]
    pub fn demos(&self) -> &[DemoRecord] {
        &self.demos
    }

    /// Get a record by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&ContentRecord> {
        self.identifier_index
            .get(identifier)
            .map(|&idx| &self.records[idx])
    }

    /// Number of content records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index has no content records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builder for [`ContentIndex`].
#[derive(Debug, Default)]
pub struct ContentIndexBuilder {
    records: Vec<ContentRecord>,
    demos: Vec<DemoRecord>,
    identifier_index: HashMap<String, usize>,
}

impl ContentIndexBuilder {
    /// Add a record.
    ///
    /// Identifiers are unique: a record whose identifier is already present
    /// is dropped with a warning and the first one is kept.
    ///
    /// # Returns
    ///
    /// `true` if the record was added.
    pub fn add_record(&mut self, record: ContentRecord) -> bool {
        if self.identifier_index.contains_key(record.identifier()) {
            tracing::warn!(
                identifier = %record.identifier(),
                "Duplicate content identifier, keeping first record"
            );
            return false;
        }
        self.identifier_index
            .insert(record.identifier().to_owned(), self.records.len());
        self.records.push(record);
        true
    }

    /// Add every record from an iterator.
    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = ContentRecord>) -> Self {
        for record in records {
            self.add_record(record);
        }
        self
    }

    /// Add a demo.
    pub fn add_demo(&mut self, demo: DemoRecord) {
        self.demos.push(demo);
    }

    /// Add every demo from an iterator.
    #[must_use]
    pub fn demos(mut self, demos: impl IntoIterator<Item = DemoRecord>) -> Self {
        self.demos.extend(demos);
        self
    }

    /// Build the index.
    #[must_use]
    pub fn build(self) -> ContentIndex {
        ContentIndex {
            records: self.records,
            demos: self.demos,
            identifier_index: self.identifier_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_load_order() {
        let index = ContentIndex::builder()
            .records([
                ContentRecord::new("/en/examples/line/basic", "Basic"),
                ContentRecord::new("/en/examples/bar/basic", "Bar"),
            ])
            .build();

        let ids: Vec<_> = index.records().iter().map(ContentRecord::identifier).collect();
        assert_eq!(ids, vec!["/en/examples/line/basic", "/en/examples/bar/basic"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let mut builder = ContentIndex::builder();

        assert!(builder.add_record(ContentRecord::new("/en/examples/line/basic", "First")));
        assert!(!builder.add_record(ContentRecord::new("/en/examples/line/basic", "Second")));
        let index = builder.build();

        assert_eq!(index.len(), 1);
        let record = index.get("/en/examples/line/basic").unwrap();
        assert_eq!(record.label("en"), "First");
    }

    #[test]
    fn test_get_unknown_identifier() {
        let index = ContentIndex::builder().build();

        assert!(index.get("/en/examples/none").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_demos_are_stored_in_order() {
        let mut builder = ContentIndex::builder().demos([DemoRecord::new("a/demo/x.js")]);
        builder.add_demo(DemoRecord::new("b/demo/y.js"));
        let index = builder.build();

        let paths: Vec<_> = index.demos().iter().map(|d| d.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["a/demo/x.js", "b/demo/y.js"]);
    }
}
