//! SkipList - вероятностный упорядоченный индекс.
//!
//! # Модули
//!
//! - `compare`: контракт компаратора и стандартные порядки.
//! - `level`: генератор высоты башни с явным источником случайности.
//! - `node`: узел и его башня ссылок (индексы в арене).
//! - `skiplist_base`: сам список (insert/search/clear).
//! - `safety`: валидация инвариантов и статистика уровней.

pub mod compare;
pub mod level;
mod node;
pub mod safety;
pub mod skiplist_base;

// Publicly re-export the public types of the submodules to simplify access
// from external code.
pub use compare::*;
pub use level::*;
pub use safety::*;
pub use skiplist_base::*;
