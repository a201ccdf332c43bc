//! Data ingestion — CSV quote files with a per-record parse report.

pub mod loader;

pub use loader::{load_csv, load_from_reader, LoadError, ParseWarning, QuoteLoad};
