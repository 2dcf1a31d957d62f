//! CSV output: one file per table
//!
//! `<base>_params.csv`, `<base>_req_body.csv`, and `<base>_res_body.csv`
//! next to each other. Empty tables still get their header row, so a
//! missing file always means the run failed rather than "nothing matched".

use apitab_common::{
    BodyRow, ParamRow, ResponseRow, Result, TableError, PARAMS_HEADERS, REQUEST_HEADERS,
    RESPONSE_HEADERS,
};

/// Write the three tables as sibling CSV files sharing a base name
pub fn write_csv(
    base_name: &str,
    params: &[ParamRow],
    request: &[BodyRow],
    responses: &[ResponseRow],
) -> Result<()> {
    write_table(
        &format!("{base_name}_params.csv"),
        &PARAMS_HEADERS,
        params.iter().map(ParamRow::to_record),
    )?;
    write_table(
        &format!("{base_name}_req_body.csv"),
        &REQUEST_HEADERS,
        request.iter().map(BodyRow::to_record),
    )?;
    write_table(
        &format!("{base_name}_res_body.csv"),
        &RESPONSE_HEADERS,
        responses.iter().map(ResponseRow::to_record),
    )?;
    Ok(())
}

fn write_table(
    path: &str,
    headers: &[&str],
    records: impl Iterator<Item = Vec<String>>,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;
    writer
        .write_record(headers)
        .map_err(|e| csv_error(path, e))?;
    for record in records {
        writer.write_record(&record).map_err(|e| csv_error(path, e))?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(path: &str, error: csv::Error) -> TableError {
    TableError::Write(format!("failed to write {path}: {error}"))
}
