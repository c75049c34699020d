use std::{io, str::Utf8Error};

use thiserror::Error;

use super::SkipListError;

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
    // ==== System / External ====
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Skip list error: {0}")]
    SkipList(#[from] SkipListError),

    // ==== Malformed input ====
    #[error("Dictionary line {line} is empty")]
    EmptyLine { line: usize },

    #[error("Dictionary line {line} is not valid UTF-8: {source}")]
    InvalidUtf8 { line: usize, source: Utf8Error },
}
