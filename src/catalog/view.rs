//! Sorted, paginated projection of the record store
//!
//! The sorted copy is rebuilt lazily: any store mutation marks it stale and
//! the next page read recomputes it.

use super::record::Record;

/// Fixed page size of the catalog
pub const ENTRIES_PER_PAGE: usize = 50;

/// Cached catalog order: `#` ascending, then `Name` ascending.
#[derive(Debug)]
pub struct CatalogView {
    sorted: Vec<Record>,
    stale: bool,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            sorted: Vec::new(),
            stale: true,
        }
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Returns page `index` of the catalog, recomputing it from `records`
    /// first if stale.
    ///
    /// Pages past the end are empty.
    pub fn page<'r>(&mut self, records: impl IntoIterator<Item = &'r Record>, index: usize) -> &[Record] {
        if self.stale {
            self.rebuild(records);
        }

        let len = self.sorted.len();
        let start = index.saturating_mul(ENTRIES_PER_PAGE).min(len);
        let end = start.saturating_add(ENTRIES_PER_PAGE).min(len);
        &self.sorted[start..end]
    }

    fn rebuild<'r>(&mut self, records: impl IntoIterator<Item = &'r Record>) {
        self.sorted = records.into_iter().cloned().collect();
        self.sorted
            .sort_by(|a, b| a.number().cmp(&b.number()).then_with(|| a.name().cmp(b.name())));
        self.stale = false;
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
