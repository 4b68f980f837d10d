//! Input/output layer for CSV transport
//!
//! Pure format code (record conversion, report writers) lives in
//! csv_format; sync_reader streams expense records from disk.

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{
    convert_csv_record, write_balances_csv, write_summary_csv, write_transfers_csv, CsvRecord,
};
pub use sync_reader::SyncReader;
