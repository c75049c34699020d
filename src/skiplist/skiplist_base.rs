use std::{cmp::Ordering, fmt};

use rand::{rngs::StdRng, RngCore};
use tracing::{debug, trace};

use super::{
    node::{Link, Node},
    Comparator, LevelGenerator, SkipListStatistics, ValidationError,
};
use crate::{debug_assert_invariant, error::SkipListError, validate};

/// Позиция, от которой ведётся просмотр уровня: массив голов или башня узла.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Head,
    Node(usize),
}

/// SkipList — упорядоченный индекс с вероятностной балансировкой.
///
/// Узлы живут в арене (`Vec`), а ссылки между ними — индексы в этой арене.
/// Порядок задаёт компаратор `C`, высоты башен выбирает [`LevelGenerator`]
/// поверх собственного источника случайности `R`.
pub struct SkipList<T, C, R = StdRng> {
    /// Арена узлов.
    nodes: Vec<Node<T>>,
    /// `heads[i]` — первый узел уровня `i`.
    heads: Vec<Link>,
    /// Сколько уровней сейчас занято.
    max_level: usize,
    compare: C,
    levels: LevelGenerator<R>,
}

/// Итератор по элементам нулевого уровня в порядке возрастания.
pub struct SkipListIter<'a, T> {
    nodes: &'a [Node<T>],
    current: Link,
}

/// Итератор по высотам башен в порядке нулевого уровня.
pub struct HeightIter<'a, T> {
    nodes: &'a [Node<T>],
    current: Link,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T, C> SkipList<T, C, StdRng>
where
    C: Comparator<T>,
{
    /// Создаёт пустой список; генератор уровней засевается из энтропии ОС.
    pub fn new(
        max_height: usize,
        compare: C,
    ) -> Result<Self, SkipListError> {
        Self::with_levels(compare, LevelGenerator::from_entropy(max_height))
    }

    /// Создаёт пустой список с детерминированным генератором уровней.
    pub fn with_seed(
        max_height: usize,
        compare: C,
        seed: u64,
    ) -> Result<Self, SkipListError> {
        Self::with_levels(compare, LevelGenerator::seeded(seed, max_height))
    }
}

impl<T, C, R> SkipList<T, C, R>
where
    C: Comparator<T>,
    R: RngCore,
{
    /// Создаёт пустой список с переданным источником случайности.
    pub fn with_rng(
        max_height: usize,
        compare: C,
        rng: R,
    ) -> Result<Self, SkipListError> {
        Self::with_levels(compare, LevelGenerator::new(rng, max_height))
    }

    fn with_levels(
        compare: C,
        levels: LevelGenerator<R>,
    ) -> Result<Self, SkipListError> {
        let max_height = levels.max_height();

        if max_height < 1 {
            return Err(SkipListError::InvalidMaxHeight(max_height));
        }

        let mut heads = Vec::new();
        heads
            .try_reserve_exact(max_height)
            .map_err(|_| SkipListError::Allocation("heads array"))?;
        heads.resize(max_height, None);

        debug!(max_height, "SkipList created");

        Ok(Self {
            nodes: Vec::new(),
            heads,
            max_level: 0,
            compare,
            levels,
        })
    }

    #[inline(always)]
    fn link(
        &self,
        anchor: Anchor,
        level: usize,
    ) -> Link {
        match anchor {
            Anchor::Head => self.heads[level],
            Anchor::Node(id) => self.nodes[id].next(level),
        }
    }

    #[inline(always)]
    fn set_link(
        &mut self,
        anchor: Anchor,
        level: usize,
        link: Link,
    ) {
        match anchor {
            Anchor::Head => self.heads[level] = link,
            Anchor::Node(id) => self.nodes[id].set_next(level, link),
        }
    }

    /// Вставляет элемент; список становится его единственным владельцем.
    ///
    /// Дубликаты не отвергаются: равный элемент встаёт после всех ранее
    /// вставленных равных ему.
    pub fn insert(
        &mut self,
        item: T,
    ) -> Result<(), SkipListError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| SkipListError::Allocation("node"))?;

        let height = self.levels.next_height();
        debug_assert_invariant!(
            height >= 1 && height <= self.max_height(),
            "height {} outside [1, {}]",
            height,
            self.max_height()
        );

        let id = self.nodes.len();
        self.nodes.push(Node::new(item, height)?);

        if height > self.max_level {
            self.max_level = height;
        }

        let mut anchor = Anchor::Head;

        for level in (0..self.max_level).rev() {
            while let Some(next) = self.link(anchor, level) {
                let order = self
                    .compare
                    .compare(self.nodes[id].item(), self.nodes[next].item());

                if order == Ordering::Less {
                    break;
                }

                anchor = Anchor::Node(next);
            }

            if level < height {
                let successor = self.link(anchor, level);
                self.nodes[id].set_next(level, successor);
                self.set_link(anchor, level, Some(id));
            }
        }

        trace!(id, height, max_level = self.max_level, "node inserted");

        Ok(())
    }

    /// Ищет элемент, равный `item` с точки зрения компаратора.
    ///
    /// При наличии дубликатов какой именно из них вернётся — не определено.
    pub fn search(
        &self,
        item: &T,
    ) -> Option<&T> {
        self.search_by(|stored| self.compare.compare(stored, item))
    }

    /// Поиск по пробе: `probe(stored)` сообщает, как хранимый элемент
    /// соотносится с искомым.
    ///
    /// Проба должна быть согласована с компаратором списка.
    pub fn search_by<F>(
        &self,
        mut probe: F,
    ) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        if self.heads[0].is_none() {
            return None;
        }

        let mut anchor = Anchor::Head;

        for level in (0..self.max_level).rev() {
            while let Some(next) = self.link(anchor, level) {
                if probe(self.nodes[next].item()) == Ordering::Greater {
                    break;
                }

                anchor = Anchor::Node(next);
            }
        }

        match anchor {
            Anchor::Node(id) if probe(self.nodes[id].item()) == Ordering::Equal => {
                Some(self.nodes[id].item())
            }
            _ => None,
        }
    }

    /// Проверяет, содержится ли элемент в списке.
    pub fn contains(
        &self,
        item: &T,
    ) -> bool {
        self.search(item).is_some()
    }

    /// Проверяет инварианты структуры.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        let max_height = self.levels.max_height();
        let count = self.nodes.len();

        validate!(
            self.heads.len() == max_height,
            ValidationError::HeadsMismatch {
                expected: max_height,
                actual: self.heads.len()
            }
        );

        let mut tallest = 0;

        for node in &self.nodes {
            validate!(
                (1..=max_height).contains(&node.height()),
                ValidationError::InvalidLevel {
                    node_level: node.height(),
                    max_level: max_height
                }
            );
            tallest = tallest.max(node.height());
        }

        validate!(
            tallest == self.max_level,
            ValidationError::MaxLevelMismatch {
                expected: tallest,
                actual: self.max_level
            }
        );

        // Нулевой уровень: полнота и порядок.
        let mut seen = 0;
        let mut prev: Option<usize> = None;
        let mut current = self.heads[0];

        while let Some(id) = current {
            validate!(
                seen < count,
                ValidationError::CyclicReference { level: 0 }
            );

            if let Some(prev) = prev {
                validate!(
                    self.compare
                        .compare(self.nodes[prev].item(), self.nodes[id].item())
                        != Ordering::Greater,
                    ValidationError::SortOrderViolation { position: seen }
                );
            }

            seen += 1;
            prev = Some(id);
            current = self.nodes[id].next(0);
        }

        validate!(
            seen == count,
            ValidationError::LengthMismatch {
                expected: count,
                actual: seen
            }
        );

        // Верхние уровни: каждый — подпоследовательность предыдущего.
        for level in 1..max_height {
            let expected = self.nodes.iter().filter(|n| n.height() > level).count();
            let mut linked = 0;
            let mut lower = self.heads[level - 1];
            let mut current = self.heads[level];

            while let Some(id) = current {
                validate!(
                    linked < count,
                    ValidationError::CyclicReference { level }
                );
                validate!(
                    self.nodes[id].height() > level,
                    ValidationError::ForwardVectorMismatch {
                        level,
                        height: self.nodes[id].height()
                    }
                );

                loop {
                    match lower {
                        Some(l) if l == id => break,
                        Some(l) => lower = self.nodes[l].next(level - 1),
                        None => return Err(ValidationError::ContainmentViolation { level }),
                    }
                }

                linked += 1;
                current = self.nodes[id].next(level);
            }

            validate!(
                linked == expected,
                ValidationError::LevelCountMismatch {
                    level,
                    expected,
                    actual: linked
                }
            );
        }

        Ok(())
    }
}

impl<T, C, R> SkipList<T, C, R> {
    /// Возвращает текущее число элементов в списке.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Проверяет на пустоту.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Сколько уровней сейчас занято (0 у пустого списка).
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Потолок высоты башни, заданный при создании.
    pub fn max_height(&self) -> usize {
        self.heads.len()
    }

    /// Возвращает итератор по элементам в порядке возрастания.
    pub fn iter(&self) -> SkipListIter<'_, T> {
        SkipListIter {
            nodes: &self.nodes,
            current: self.heads.first().copied().flatten(),
        }
    }

    /// Высоты башен в порядке нулевого уровня.
    pub fn heights(&self) -> HeightIter<'_, T> {
        HeightIter {
            nodes: &self.nodes,
            current: self.heads.first().copied().flatten(),
        }
    }

    /// Собирает статистику распределения узлов по уровням.
    pub fn statistics(&self) -> SkipListStatistics {
        let mut stats = SkipListStatistics::empty(self.max_height());

        for height in self.heights() {
            stats.level_distribution[height - 1] += 1;
        }

        stats.node_count = self.len();
        stats.current_max_level = self.max_level;
        stats.compute_average_level();

        stats
    }

    /// Удаляет все элементы вместе с башнями.
    ///
    /// После очистки список пуст и пригоден для повторного использования.
    pub fn clear(&mut self) {
        let released = self.nodes.len();

        self.nodes = Vec::new();
        self.heads.iter_mut().for_each(|head| *head = None);
        self.max_level = 0;

        debug!(released, "SkipList cleared");
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для SkipList
////////////////////////////////////////////////////////////////////////////////

impl<T, C, R> fmt::Debug for SkipList<T, C, R>
where
    T: fmt::Debug,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len())
            .field("max_level", &self.max_level)
            .field("max_height", &self.max_height())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T, C, R> IntoIterator for &'a SkipList<T, C, R> {
    type Item = &'a T;
    type IntoIter = SkipListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for SkipListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];

        self.current = node.next(0);

        Some(node.item())
    }
}

impl<T> Iterator for HeightIter<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];

        self.current = node.next(0);

        Some(node.height())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
