//! Column definitions and ordered column sets

use crate::error::ExportError;
use crate::path;

use super::record::Record;
use super::value::Value;

/// Maximum column width in character units; wider requests are clamped.
pub const MAX_COLUMN_WIDTH: u16 = 255;

/// One output column: header text, value extractor, optional width.
///
/// Immutable once created.
pub struct Column<T> {
    header: String,
    width: Option<u16>,
    extract: Box<dyn Fn(&T) -> Value>,
}

impl<T: Record + 'static> Column<T> {
    /// Create a column from a header and an extractor closure.
    pub fn new<V, F>(header: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<Value> + 'static,
    {
        Self {
            header: header.into(),
            width: None,
            extract: Box::new(move |record: &T| extract(record).into()),
        }
    }

    /// Create a column with an explicit width in character units.
    pub fn with_width<V, F>(header: impl Into<String>, extract: F, width: u16) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<Value> + 'static,
    {
        let mut column = Self::new(header, extract);
        column.width = Some(width);
        column
    }

    /// Create a column from a dotted field path.
    ///
    /// The path is resolved eagerly; a bad path fails here, before any row
    /// is written. Without an explicit label the path itself is the header.
    pub fn from_path(dotted_path: &str, label: Option<&str>) -> Result<Self, ExportError> {
        let extractor = path::resolve::<T>(dotted_path)?;
        Ok(Self {
            header: label.unwrap_or(dotted_path).to_string(),
            width: None,
            extract: Box::new(move |record: &T| extractor.extract(record)),
        })
    }

}

impl<T> Column<T> {
    /// Header text.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Explicit width, if one was set.
    pub fn width(&self) -> Option<u16> {
        self.width
    }

    /// Width to render: explicit or default, clamped to [`MAX_COLUMN_WIDTH`].
    pub fn render_width(&self, default_width: u16) -> u16 {
        self.width.unwrap_or(default_width).min(MAX_COLUMN_WIDTH)
    }

    /// Extract this column's value from a record.
    pub fn value(&self, record: &T) -> Value {
        (self.extract)(record)
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Ordered set of columns; insertion order is output order.
#[derive(Debug)]
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column.
    pub fn push(&mut self, column: Column<T>) {
        self.columns.push(column);
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    /// Header texts in output order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header()).collect()
    }
}

impl<T> Default for ColumnSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
