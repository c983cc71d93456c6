pub mod csv_table;
pub mod error;
pub mod layout;
pub mod records;

pub use csv_table::{CsvRecord, CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use layout::{DataFile, DataLayout};
pub use records::{
    load_case_details, load_case_index, load_daily_cases, load_daily_filings, load_hearings,
    parse_flag,
};
