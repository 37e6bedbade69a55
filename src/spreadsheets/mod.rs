pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{export_comparison_csv, CSV_FILENAME};
pub use export_xlsx::{export_comparison_xlsx, XLSX_FILENAME};
