//! Export error types

use thiserror::Error;

/// Errors raised while configuring or running an export.
///
/// Path and discovery errors are raised eagerly, before any row is written;
/// writer errors abort the export on first failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A dotted path referenced a field that does not exist on its owning type.
    #[error("type `{type_name}` has no field `{field}`")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// An intermediate path segment landed on a leaf field, which cannot be
    /// traversed further.
    #[error("field `{field}` on type `{type_name}` is not a nested record and cannot be traversed")]
    NotNested {
        type_name: &'static str,
        field: &'static str,
    },

    /// The final path segment names a nested record instead of a leaf field.
    #[error("path `{path}` ends on a nested record; column paths must end on a leaf field")]
    NonLeafPath { path: String },

    /// Automatic column discovery found a cycle among nested record types.
    #[error("cyclic nested record structure detected at type `{type_name}`")]
    CyclicStructure { type_name: &'static str },

    /// The workbook writer failed to serialize the document.
    #[error("failed to write workbook")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// The output sink failed.
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
