//! Проверка орфографии по словарю на базе SkipList.

pub mod dictionary;
pub mod finder;
pub mod tokenizer;

pub use dictionary::*;
pub use finder::*;
pub use tokenizer::*;
