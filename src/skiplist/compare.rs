//! Компараторы для SkipList.
//!
//! Порядок элементов задаётся значением, реализующим [`Comparator`].
//! Любое замыкание вида `Fn(&T, &T) -> Ordering` уже является компаратором,
//! а для типовых случаев есть готовые реализации: [`Ascending`],
//! [`FloatAscending`] и [`CaseInsensitive`].

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// Полный порядок над двумя элементами.
///
/// Реализация обязана быть согласованной, транзитивной и антисимметричной.
/// SkipList не проверяет это во время вставки и поиска: нарушение контракта
/// молча портит порядок (обнаружить его можно через `validate_invariants`).
pub trait Comparator<T: ?Sized> {
    fn compare(
        &self,
        left: &T,
        right: &T,
    ) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(
        &self,
        left: &T,
        right: &T,
    ) -> Ordering {
        self(left, right)
    }
}

/// Возрастающий порядок для любого `Ord` (целые числа, строки как есть).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

/// Возрастающий порядок для `f32`/`f64`.
///
/// Сравнение идёт через [`OrderedFloat`], поэтому NaN больше любого числа и
/// порядок остаётся полным.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatAscending;

/// Лексикографический порядок строк без учёта регистра.
///
/// Символы сравниваются после Unicode-приведения к нижнему регистру; для
/// ASCII поведение совпадает с `strcasecmp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl CaseInsensitive {
    /// Сравнивает две строки без учёта регистра, не выделяя память.
    pub fn compare_str(
        left: &str,
        right: &str,
    ) -> Ordering {
        left.chars()
            .flat_map(char::to_lowercase)
            .cmp(right.chars().flat_map(char::to_lowercase))
    }
}

impl<T: Ord> Comparator<T> for Ascending {
    #[inline]
    fn compare(
        &self,
        left: &T,
        right: &T,
    ) -> Ordering {
        left.cmp(right)
    }
}

impl Comparator<f64> for FloatAscending {
    #[inline]
    fn compare(
        &self,
        left: &f64,
        right: &f64,
    ) -> Ordering {
        OrderedFloat(*left).cmp(&OrderedFloat(*right))
    }
}

impl Comparator<f32> for FloatAscending {
    #[inline]
    fn compare(
        &self,
        left: &f32,
        right: &f32,
    ) -> Ordering {
        OrderedFloat(*left).cmp(&OrderedFloat(*right))
    }
}

impl<S> Comparator<S> for CaseInsensitive
where
    S: AsRef<str> + ?Sized,
{
    #[inline]
    fn compare(
        &self,
        left: &S,
        right: &S,
    ) -> Ordering {
        Self::compare_str(left.as_ref(), right.as_ref())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
