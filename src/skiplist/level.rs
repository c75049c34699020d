use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Генератор высоты башни нового узла.
///
/// Высота начинается с 1 и растёт на единицу при каждом выпадении "орла",
/// пока не достигнет `max_height`. Отсюда `P(height = k) = 2^-k` для
/// `k < max_height`, а оставшаяся вероятность приходится на `max_height`.
///
/// Источник случайности принадлежит генератору, поэтому поведение
/// воспроизводимо при фиксированном seed.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R = StdRng> {
    rng: R,
    max_height: usize,
}

impl LevelGenerator<StdRng> {
    /// Генератор с `StdRng`, засеянным из энтропии ОС.
    pub fn from_entropy(max_height: usize) -> Self {
        Self::new(StdRng::from_entropy(), max_height)
    }

    /// Детерминированный генератор.
    pub fn seeded(
        seed: u64,
        max_height: usize,
    ) -> Self {
        Self::new(StdRng::seed_from_u64(seed), max_height)
    }
}

impl<R: RngCore> LevelGenerator<R> {
    pub fn new(
        rng: R,
        max_height: usize,
    ) -> Self {
        Self { rng, max_height }
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Честная монетка: `true` означает "расти дальше".
    #[inline]
    fn flip_coin(&mut self) -> bool {
        self.rng.next_u32() & 1 == 1
    }

    /// Возвращает высоту в диапазоне `[1, max_height]`.
    pub fn next_height(&mut self) -> usize {
        let mut height = 1;

        while height < self.max_height && self.flip_coin() {
            height += 1;
        }

        height
    }
}
