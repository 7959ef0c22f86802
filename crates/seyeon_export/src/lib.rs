pub mod error;
pub mod format;
pub mod row;
pub mod writer;

pub use error::ExportError;
pub use format::Accounting;
pub use row::{HEADER, ListingRow, build_rows};
pub use writer::{export_csv, write_csv};
