//! Sheet building: header, styles, and streaming row materialization

use rust_xlsxwriter::{Format, Worksheet, XlsxError};

use crate::config::ExportOptions;
use crate::error::ExportError;
use crate::model::{ColumnSet, Record, Value};

/// The three cell styles of an export session, created once and reused for
/// every cell of their kind.
pub struct SheetStyles {
    /// Wrapped text; applied to every non-blank cell without a number format.
    pub default: Format,
    /// Default style plus the date number format.
    pub date: Format,
    /// Default style plus the date-time number format.
    pub datetime: Format,
}

impl SheetStyles {
    /// Build the style set from the session options.
    pub fn new(options: &ExportOptions) -> Self {
        let default = Format::new().set_text_wrap();
        let date = default.clone().set_num_format(&options.date_format);
        let datetime = default.clone().set_num_format(&options.datetime_format);
        Self {
            default,
            date,
            datetime,
        }
    }
}

/// Render one extracted value into a worksheet cell.
///
/// Dispatch is an exhaustive match over the value kinds; there is no
/// unrecognized case. Null leaves the cell unwritten, which the format
/// reads back as blank.
pub fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
    styles: &SheetStyles,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Date(date) => {
            worksheet.write_datetime_with_format(row, col, date, &styles.date)?;
        }
        Value::DateTime(datetime) => {
            worksheet.write_datetime_with_format(row, col, datetime, &styles.datetime)?;
        }
        Value::Int(int) => {
            worksheet.write_number_with_format(row, col, *int as f64, &styles.default)?;
        }
        Value::Float(float) => {
            worksheet.write_number_with_format(row, col, *float, &styles.default)?;
        }
        Value::Bool(flag) => {
            let text = if *flag {
                &options.true_text
            } else {
                &options.false_text
            };
            worksheet.write_string_with_format(row, col, text, &styles.default)?;
        }
        Value::Str(text) => {
            worksheet.write_string_with_format(row, col, text.as_ref(), &styles.default)?;
        }
        Value::Other(text) => {
            worksheet.write_string_with_format(row, col, text, &styles.default)?;
        }
    }
    Ok(())
}

/// Write the header row, freeze it, set column widths, then stream the data
/// source into rows.
///
/// Row order equals data source order; column order equals set order. Any
/// extraction or write failure aborts the whole export. Returns the number
/// of data rows written.
pub fn build<T: Record>(
    worksheet: &mut Worksheet,
    columns: &ColumnSet<T>,
    data: impl Iterator<Item = T>,
    styles: &SheetStyles,
    options: &ExportOptions,
) -> Result<u32, ExportError> {
    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.header(), &styles.default)?;
        worksheet.set_column_width(
            col as u16,
            f64::from(column.render_width(options.default_width)),
        )?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut row: u32 = 1;
    for record in data {
        for (col, column) in columns.iter().enumerate() {
            let value = column.value(&record);
            write_cell(worksheet, row, col as u16, &value, styles, options)?;
        }
        row += 1;
    }

    Ok(row - 1)
}
