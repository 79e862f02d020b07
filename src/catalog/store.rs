//! In-memory record store
//!
//! Records are keyed by `Name` and kept in insertion order, which is the
//! order they are written back to the data file. The store owns the catalog
//! view and marks it stale on every mutation.

use indexmap::IndexMap;

use super::errors::{CatalogError, CatalogResult};
use super::record::Record;
use super::view::CatalogView;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: IndexMap<String, Record>,
    view: CatalogView,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records in file order.
    ///
    /// A later record with an already seen name replaces the earlier one in
    /// place.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.put(record.name().to_string(), record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Inserts or overwrites. An overwrite keeps the record's position.
    pub fn put(&mut self, name: String, record: Record) {
        self.records.insert(name, record);
        self.view.mark_stale();
    }

    /// Removes a record, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            self.view.mark_stale();
        }
        removed
    }

    /// Rekeys a record under `new_name` and updates its `Name` value.
    ///
    /// The record moves to the end of the insertion order. Fails if
    /// `old_name` is absent or `new_name` is taken.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> CatalogResult<()> {
        if self.records.contains_key(new_name) {
            return Err(CatalogError::new_name_taken());
        }
        let mut record = self
            .records
            .shift_remove(old_name)
            .ok_or(CatalogError::NotFound)?;

        record.set_name(new_name);
        self.records.insert(new_name.to_string(), record);
        self.view.mark_stale();
        Ok(())
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Page `index` of the sorted catalog
    pub fn page(&mut self, index: usize) -> &[Record] {
        self.view.page(self.records.values(), index)
    }

    pub fn is_catalog_stale(&self) -> bool {
        self.view.is_stale()
    }
}
