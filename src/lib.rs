//! xlsxport - Streaming export of typed records to XLSX
//!
//! Builds single-sheet XLSX documents from sequences of typed records:
//! dotted-path column mapping, automatic column discovery over nested
//! record structures, and per-cell type-based formatting with a fixed
//! set of styles (default/wrap, date, date-time).

pub mod config;
pub mod discover;
pub mod error;
pub mod exporter;
pub mod model;
pub mod path;
pub mod sheet;

pub use config::{ExportField, ExportOptions};
pub use error::ExportError;
pub use exporter::Exporter;
pub use model::{Column, ColumnSet, Record, Value};
