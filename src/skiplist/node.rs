use crate::error::SkipListError;

/// Ссылка на следующий узел уровня: индекс в арене или `None`.
pub(crate) type Link = Option<usize>;

/// Узел пропускного списка.
///
/// Элемент принадлежит узлу (а значит, и списку) с момента вставки.
/// Длина `next` и есть высота башни; она выбирается при вставке и больше не
/// меняется.
#[derive(Debug)]
pub(crate) struct Node<T> {
    item: T,
    next: Vec<Link>,
}

impl<T> Node<T> {
    /// Создаёт узел с башней заданной высоты, все ссылки пустые.
    pub(crate) fn new(
        item: T,
        height: usize,
    ) -> Result<Self, SkipListError> {
        let mut next = Vec::new();
        next.try_reserve_exact(height)
            .map_err(|_| SkipListError::Allocation("node tower"))?;
        next.resize(height, None);

        Ok(Self { item, next })
    }

    #[inline]
    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.next.len()
    }

    #[inline]
    pub(crate) fn next(
        &self,
        level: usize,
    ) -> Link {
        self.next[level]
    }

    #[inline]
    pub(crate) fn set_next(
        &mut self,
        level: usize,
        link: Link,
    ) {
        self.next[level] = link;
    }
}
