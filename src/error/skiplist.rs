use thiserror::Error;

pub type SkipListResult<T> = Result<T, SkipListError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipListError {
    // ==== Invalid argument ====
    #[error("max_height must be >= 1, got {0}")]
    InvalidMaxHeight(usize),

    // ==== Allocation ====
    #[error("Unable to allocate memory for {0}")]
    Allocation(&'static str),
}
