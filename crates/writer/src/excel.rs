//! Excel output: one workbook with a sheet per table
//!
//! Sheets are "Params", "Req Body", and "Res Body". Mandatory rows get
//! their identifying cells in bold (Name for parameters, Path and Property
//! for bodies), and column widths track the longest cell up to a cap so
//! the sheet opens readable without manual resizing.

use apitab_common::{
    BodyRow, ParamRow, ResponseRow, Result, TableError, PARAMS_HEADERS, REQUEST_HEADERS,
    RESPONSE_HEADERS,
};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const MAX_COLUMN_WIDTH: usize = 60;

struct SheetLayout<'a> {
    name: &'a str,
    headers: &'a [&'a str],
    /// Column carrying the "true"/"false" mandatory flag
    mandatory_column: usize,
    /// Columns bolded on mandatory rows
    bold_columns: &'a [usize],
}

const PARAMS_LAYOUT: SheetLayout<'static> = SheetLayout {
    name: "Params",
    headers: &PARAMS_HEADERS,
    mandatory_column: 1,
    bold_columns: &[0],
};

const REQUEST_LAYOUT: SheetLayout<'static> = SheetLayout {
    name: "Req Body",
    headers: &REQUEST_HEADERS,
    mandatory_column: 2,
    bold_columns: &[0, 1],
};

const RESPONSE_LAYOUT: SheetLayout<'static> = SheetLayout {
    name: "Res Body",
    headers: &RESPONSE_HEADERS,
    mandatory_column: 3,
    bold_columns: &[1, 2],
};

/// Write the three tables as one Excel workbook
pub fn write_excel<P: AsRef<Path>>(
    path: P,
    params: &[ParamRow],
    request: &[BodyRow],
    responses: &[ResponseRow],
) -> Result<()> {
    let path = path.as_ref();
    write_workbook(path, params, request, responses)
        .map_err(|e| TableError::Write(format!("failed to write {}: {e}", path.display())))
}

fn write_workbook(
    path: &Path,
    params: &[ParamRow],
    request: &[BodyRow],
    responses: &[ResponseRow],
) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let records: Vec<Vec<String>> = params.iter().map(ParamRow::to_record).collect();
    write_sheet(workbook.add_worksheet(), &PARAMS_LAYOUT, &records)?;

    let records: Vec<Vec<String>> = request.iter().map(BodyRow::to_record).collect();
    write_sheet(workbook.add_worksheet(), &REQUEST_LAYOUT, &records)?;

    let records: Vec<Vec<String>> = responses.iter().map(ResponseRow::to_record).collect();
    write_sheet(workbook.add_worksheet(), &RESPONSE_LAYOUT, &records)?;

    workbook.save(path)?;
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    layout: &SheetLayout<'_>,
    records: &[Vec<String>],
) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(layout.name)?;
    let bold = Format::new().set_bold();

    for (column, header) in layout.headers.iter().enumerate() {
        worksheet.write_string(0, column as u16, *header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        let mandatory = record
            .get(layout.mandatory_column)
            .is_some_and(|cell| cell == "true");
        for (column, cell) in record.iter().enumerate() {
            if mandatory && layout.bold_columns.contains(&column) {
                worksheet.write_string_with_format(row, column as u16, cell, &bold)?;
            } else {
                worksheet.write_string(row, column as u16, cell)?;
            }
        }
    }

    for (column, header) in layout.headers.iter().enumerate() {
        let widest = records
            .iter()
            .filter_map(|record| record.get(column))
            .map(|cell| cell.len())
            .max()
            .unwrap_or(0)
            .max(header.len());
        let width = widest.saturating_add(2).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(column as u16, width as f64)?;
    }

    Ok(())
}
