//! Pokemon catalog
//!
//! - `codec`: delimited text rows <-> records
//! - `store`: insertion-ordered records keyed by `Name`
//! - `view`: lazily sorted, paginated projection of the store
//! - `service`: validated mutations with full-file persistence

pub mod codec;
mod errors;
mod record;
mod service;
mod store;
mod view;

pub use errors::{CatalogError, CatalogResult};
pub use record::Record;
pub use service::{LoadSummary, PokemonCatalog};
pub use store::RecordStore;
pub use view::{CatalogView, ENTRIES_PER_PAGE};
