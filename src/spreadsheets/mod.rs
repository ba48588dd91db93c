pub mod drive;
pub mod import_csv;

pub use drive::download_csv;
pub use import_csv::parse_records;
