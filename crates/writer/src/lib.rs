//! Output adapters for the generated tables
//!
//! Two formats: sibling CSV files (one per table) and a single Excel
//! workbook with one sheet per table. Both consume the same row records
//! and share the column-order contract from `apitab-common`.

pub mod csv_writer;
pub mod excel;

pub use csv_writer::write_csv;
pub use excel::write_excel;
