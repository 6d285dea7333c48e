//! Export session: builder API and workbook finalization

use std::io::Write;

use rust_xlsxwriter::Workbook;

use crate::config::{ExportField, ExportOptions};
use crate::discover;
use crate::error::ExportError;
use crate::model::{Column, ColumnSet, Record, Value};
use crate::sheet::{self, SheetStyles};

/// Builder for one export session over records of type `T`.
///
/// Columns are registered explicitly (closures or dotted paths) or, when
/// none are registered, discovered from `T`'s metadata when the export
/// starts. The builder is consumed by [`export`](Exporter::export) or
/// [`export_to`](Exporter::export_to); each session owns its workbook and
/// styles.
pub struct Exporter<T: Record + 'static> {
    columns: ColumnSet<T>,
    data: Option<Box<dyn Iterator<Item = T>>>,
    options: ExportOptions,
}

impl<T: Record + 'static> Exporter<T> {
    /// Start a session with no columns, no data, and default options.
    pub fn new() -> Self {
        Self {
            columns: ColumnSet::new(),
            data: None,
            options: ExportOptions::default(),
        }
    }

    /// Register a column with a header and an extractor closure.
    pub fn column<V, F>(mut self, header: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<Value> + 'static,
    {
        self.columns.push(Column::new(header, extract));
        self
    }

    /// Register a column with an explicit width in character units.
    pub fn column_with_width<V, F>(
        mut self,
        header: impl Into<String>,
        extract: F,
        width: u16,
    ) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<Value> + 'static,
    {
        self.columns.push(Column::with_width(header, extract, width));
        self
    }

    /// Register a column from a dotted field path; the path is the header.
    pub fn path_column(mut self, dotted_path: &str) -> Result<Self, ExportError> {
        self.columns.push(Column::from_path(dotted_path, None)?);
        Ok(self)
    }

    /// Register a column from a catalog (path, label) pair.
    pub fn field(mut self, field: &ExportField) -> Result<Self, ExportError> {
        self.columns
            .push(Column::from_path(&field.name, Some(&field.label))?);
        Ok(self)
    }

    /// Register columns from a catalog of (path, label) pairs, in order.
    pub fn fields<'a, I>(mut self, fields: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = &'a ExportField>,
    {
        for field in fields {
            self = self.field(field)?;
        }
        Ok(self)
    }

    /// Set the data source. Consumed lazily, one record at a time.
    pub fn with_data<I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        self.data = Some(Box::new(data.into_iter()));
        self
    }

    /// Set the session options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the export and return the finished document as bytes.
    pub fn export(self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = self.into_workbook()?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Run the export and write the finished document into `writer`.
    pub fn export_to<W: Write>(self, mut writer: W) -> Result<(), ExportError> {
        let bytes = self.export()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    fn into_workbook(self) -> Result<Workbook, ExportError> {
        let Self {
            mut columns,
            data,
            options,
        } = self;

        // Discovery runs at most once, only when no columns were registered.
        if columns.is_empty() {
            for path in discover::leaf_paths::<T>()? {
                columns.push(Column::from_path(&path, None)?);
            }
        }

        let styles = SheetStyles::new(&options);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        if let Some(name) = &options.sheet_name {
            worksheet.set_name(name)?;
        }

        let data = data.unwrap_or_else(|| Box::new(std::iter::empty()));
        sheet::build(worksheet, &columns, data, &styles, &options)?;

        Ok(workbook)
    }
}

impl<T: Record + 'static> Default for Exporter<T> {
    fn default() -> Self {
        Self::new()
    }
}
