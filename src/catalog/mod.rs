//! Built-in definition catalogs
//!
//! - [`gedcomx`] - The GEDCOM X Person and Search resources

pub mod gedcomx;

pub use gedcomx::GedcomxCatalog;
