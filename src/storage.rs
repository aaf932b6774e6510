pub mod fleet;
/// Bulk loading and saving of record files.
pub mod file;
/// Flat-file record parsing.
pub mod record;

pub use file::{FileError, LoadReport, SkipReason, SkippedLine, load, read_fleet, save, write_fleet};
pub use fleet::{CAPACITY, CapacityError, Fleet};
pub use record::{RecordError, parse_record};
