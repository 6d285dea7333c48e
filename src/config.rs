//! Configuration for export sessions

use serde::{Deserialize, Serialize};

/// Configuration for one export session.
///
/// Built with `with_*` methods; read-only once the export starts.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Text written for boolean `true` cells.
    pub true_text: String,
    /// Text written for boolean `false` cells.
    pub false_text: String,
    /// Number format applied to date cells.
    pub date_format: String,
    /// Number format applied to date-time cells.
    pub datetime_format: String,
    /// Column width in character units for columns without an explicit width.
    pub default_width: u16,
    /// Explicit sheet name; the writer's default name is used when unset.
    pub sheet_name: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            true_text: "yes".to_string(),
            false_text: "no".to_string(),
            date_format: "yyyy-mm-dd".to_string(),
            datetime_format: "yyyy-mm-dd hh:mm:ss".to_string(),
            default_width: 30,
            sheet_name: None,
        }
    }
}

impl ExportOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word pair used for boolean cells.
    pub fn with_bool_text(
        mut self,
        true_text: impl Into<String>,
        false_text: impl Into<String>,
    ) -> Self {
        self.true_text = true_text.into();
        self.false_text = false_text.into();
        self
    }

    /// Set the number format for date cells.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the number format for date-time cells.
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Set the default column width in character units.
    pub fn with_default_width(mut self, width: u16) -> Self {
        self.default_width = width;
        self
    }

    /// Set an explicit sheet name.
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }
}

/// A pre-resolved (field path, display label) pair from an external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
    /// Dotted field path on the record type.
    pub name: String,
    /// Header text for the column.
    pub label: String,
}

impl ExportField {
    /// Create a field mapping.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}
