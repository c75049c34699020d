/// Configuration loaded from the environment.
pub mod config;
/// Error types: skip list, spell check, logging.
pub mod error;
/// Logging setup (formatting, filters, sinks).
pub mod logging;
/// Probabilistic ordered index: comparators, level generator, SkipList.
pub mod skiplist;
/// Dictionary spell check built on top of the SkipList.
pub mod spell;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use config::Settings;
/// Operation errors and result types.
pub use error::{CheckError, CheckResult, LoggingError, SkipListError, SkipListResult};
/// Logging entry point.
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingHandle};
/// SkipList and its comparators.
pub use skiplist::{
    Ascending, CaseInsensitive, Comparator, FloatAscending, LevelGenerator, SkipList,
    SkipListStatistics, ValidationError,
};
/// Spell check API.
pub use spell::{find_errors, Dictionary, FindReport, FinderOptions, LoadPolicy, LoadReport, Words};
