pub mod check;
pub mod logging;
pub mod skiplist;

pub use check::{CheckError, CheckResult};
pub use logging::LoggingError;
pub use skiplist::{SkipListError, SkipListResult};
