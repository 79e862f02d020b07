//! Catalog service: reads, mutations and persistence
//!
//! Every mutation runs to completion before returning:
//! 1. Validate the submitted fields
//! 2. Check key existence / conflicts
//! 3. Mutate the store (which marks the catalog view stale)
//! 4. Rewrite the whole data file
//!
//! A failed rewrite is reported to the caller; the in-memory change stays.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{validate_for_create, validate_for_update, NAME_COLUMN};

use super::codec::{decode_file, encode_file};
use super::errors::{CatalogError, CatalogResult};
use super::record::Record;
use super::store::RecordStore;

/// Counts from loading a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub skipped: usize,
}

/// The Pokemon catalog backed by a delimited data file.
#[derive(Debug)]
pub struct PokemonCatalog {
    path: PathBuf,
    store: RecordStore,
    summary: LoadSummary,
}

impl PokemonCatalog {
    /// Loads the catalog from `path`.
    ///
    /// The file must exist. Rows that cannot be decoded are skipped.
    pub fn load(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Load {
            path: path.display().to_string(),
            source,
        })?;

        let decoded = decode_file(&content);
        let store = RecordStore::from_records(decoded.records);
        let summary = LoadSummary {
            records: store.len(),
            skipped: decoded.skipped,
        };

        log_event_with_fields(
            Event::CatalogLoaded,
            &[
                ("path", &path.display().to_string()),
                ("records", &summary.records.to_string()),
                ("skipped", &summary.skipped.to_string()),
            ],
        );

        Ok(Self { path, store, summary })
    }

    /// Creates a catalog over an existing store without reading the file.
    pub fn with_store(path: impl Into<PathBuf>, store: RecordStore) -> Self {
        let summary = LoadSummary {
            records: store.len(),
            skipped: 0,
        };
        Self {
            path: path.into(),
            store,
            summary,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_summary(&self) -> LoadSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Looks up a record by name.
    pub fn get(&self, name: &str) -> CatalogResult<&Record> {
        self.store.get(name).ok_or(CatalogError::NotFound)
    }

    /// Page `index` of the sorted catalog; empty past the end.
    pub fn page(&mut self, index: usize) -> &[Record] {
        self.store.page(index)
    }

    /// Creates a record from a complete set of fields.
    pub fn create(&mut self, data: &Map<String, Value>) -> CatalogResult<()> {
        validate_for_create(data)?;

        let record = Record::from_json(data);
        let name = record.name().to_string();
        if self.store.contains(&name) {
            return Err(CatalogError::name_taken());
        }

        self.store.put(name.clone(), record);
        self.persist()?;

        log_event_with_fields(Event::RecordCreated, &[("name", &name)]);
        Ok(())
    }

    /// Updates the fields of `name` present in `data`, renaming if `Name`
    /// changes.
    pub fn update(&mut self, name: &str, data: &Map<String, Value>) -> CatalogResult<()> {
        let mut record = self.get(name)?.clone();
        validate_for_update(data)?;

        let new_name = data
            .get(NAME_COLUMN)
            .and_then(Value::as_str)
            .filter(|new_name| *new_name != name);
        if let Some(new_name) = new_name {
            self.store.rename(name, new_name)?;
        }

        record.apply(data);
        let key = record.name().to_string();
        self.store.put(key.clone(), record);
        self.persist()?;

        log_event_with_fields(Event::RecordUpdated, &[("name", name), ("new_name", &key)]);
        Ok(())
    }

    /// Deletes the record `name`.
    pub fn delete(&mut self, name: &str) -> CatalogResult<()> {
        self.store.remove(name).ok_or(CatalogError::NotFound)?;
        self.persist()?;

        log_event_with_fields(Event::RecordDeleted, &[("name", name)]);
        Ok(())
    }

    /// Rewrites the data file from the store, in insertion order.
    pub fn persist(&self) -> CatalogResult<()> {
        let content = encode_file(self.store.records());
        fs::write(&self.path, content).map_err(|source| {
            let path = self.path.display().to_string();
            log_event_with_fields(
                Event::PersistFailed,
                &[("path", &path), ("error", &source.to_string())],
            );
            CatalogError::Persistence { path, source }
        })
    }
}
