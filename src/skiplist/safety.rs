/// Макрос для debug-time проверки инвариантов.
///
/// В release-сборках компилируется в no-op.
#[macro_export]
macro_rules! debug_assert_invariant {
    ($cond:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if !$cond {
                panic!("Invariant violation: {}", format!($($arg)*));
            }
        }
    };
}

/// Макрос для валидации условий с возвратом ошибки.
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Высота узла вне диапазона `[1, max_height]`
    InvalidLevel { node_level: usize, max_level: usize },
    /// Узел связан на уровне, которого нет в его башне
    ForwardVectorMismatch { level: usize, height: usize },
    /// Массив голов не соответствует `max_height`
    HeadsMismatch { expected: usize, actual: usize },
    /// Нарушен порядок сортировки на нулевом уровне
    SortOrderViolation { position: usize },
    /// Длина списка не соответствует реальному кол-ву узлов
    LengthMismatch { expected: usize, actual: usize },
    /// Кол-во узлов на уровне не совпадает с кол-вом достаточно высоких башен
    LevelCountMismatch {
        level: usize,
        expected: usize,
        actual: usize,
    },
    /// Уровень не является подпоследовательностью нижележащего
    ContainmentViolation { level: usize },
    /// `max_level` не равен максимальной высоте башни
    MaxLevelMismatch { expected: usize, actual: usize },
    /// Обнаружена циклическая ссылка
    CyclicReference { level: usize },
}

/// Статистика структуры SkipList.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipListStatistics {
    /// Количество узлов
    pub node_count: usize,
    /// Распределение по высоте: `level_distribution[h - 1]` узлов высоты `h`
    pub level_distribution: Vec<usize>,
    /// Текущий максимальный уровень
    pub current_max_level: usize,
    /// Максимально возможный уровень
    pub max_possible_level: usize,
    /// Средний уровень узла
    pub average_level: f64,
}

impl SkipListStatistics {
    /// Создает пустую статистику.
    pub fn empty(max_level: usize) -> Self {
        Self {
            node_count: 0,
            level_distribution: vec![0; max_level],
            current_max_level: 0,
            max_possible_level: max_level,
            average_level: 0.0,
        }
    }

    /// Вычисляет средний уровень.
    pub fn compute_average_level(&mut self) {
        if self.node_count == 0 {
            self.average_level = 0.0;
            return;
        }

        let total_levels: usize = self
            .level_distribution
            .iter()
            .enumerate()
            .map(|(level, &count)| (level + 1) * count)
            .sum();

        self.average_level = total_levels as f64 / self.node_count as f64;
    }

    /// Доля узлов, участвующих в уровне `level` (нумерация с нуля).
    ///
    /// Для идеального генератора это примерно `2^-level`.
    pub fn participation(
        &self,
        level: usize,
    ) -> f64 {
        if self.node_count == 0 {
            return 0.0;
        }

        let on_level: usize = self.level_distribution.iter().skip(level).sum();

        on_level as f64 / self.node_count as f64
    }

    /// Форматирует статистику для вывода.
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        report.push_str("SkipList Statistics:\n");
        report.push_str(&format!("  Total nodes: {}\n", self.node_count));
        report.push_str(&format!(
            "  Current max level: {}\n",
            self.current_max_level
        ));
        report.push_str(&format!(
            "  Max possible level: {}\n",
            self.max_possible_level
        ));
        report.push_str(&format!("  Average level: {:.2}\n", self.average_level));
        report.push_str("  Level distribution:\n");

        for (level, &count) in self.level_distribution.iter().enumerate() {
            if count > 0 {
                let percentage = (count as f64 / self.node_count as f64) * 100.0;
                report.push_str(&format!(
                    "    Level {}: {} nodes ({:.1}%)\n",
                    level + 1,
                    count,
                    percentage
                ));
            }
        }

        report
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ValidationError::InvalidLevel {
                node_level,
                max_level,
            } => {
                write!(
                    f,
                    "Node level {node_level} is outside of [1, {max_level}]"
                )
            }
            ValidationError::ForwardVectorMismatch { level, height } => {
                write!(
                    f,
                    "Node of height {height} is linked on level {level}"
                )
            }
            ValidationError::HeadsMismatch { expected, actual } => {
                write!(
                    f,
                    "Heads array size mismatch: expected {expected}, got {actual}"
                )
            }
            ValidationError::SortOrderViolation { position } => {
                write!(f, "Sort order violation at position {position}")
            }
            ValidationError::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {expected}, got {actual}")
            }
            ValidationError::LevelCountMismatch {
                level,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Level {level} links {actual} nodes, expected {expected}"
                )
            }
            ValidationError::ContainmentViolation { level } => {
                write!(
                    f,
                    "Level {level} is not a subsequence of level {}",
                    level.saturating_sub(1)
                )
            }
            ValidationError::MaxLevelMismatch { expected, actual } => {
                write!(f, "Max level mismatch: expected {expected}, got {actual}")
            }
            ValidationError::CyclicReference { level } => {
                write!(f, "Cyclic reference detected on level {level}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_empty() {
        let stats = SkipListStatistics::empty(16);

        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.current_max_level, 0);
        assert_eq!(stats.level_distribution.len(), 16);
        assert_eq!(stats.average_level, 0.0);
        assert_eq!(stats.participation(0), 0.0);
    }

    #[test]
    fn test_statistics_compute_average() {
        let mut stats = SkipListStatistics {
            node_count: 3,
            level_distribution: vec![1, 1, 1, 0],
            current_max_level: 3,
            max_possible_level: 4,
            average_level: 0.0,
        };

        stats.compute_average_level();
        assert_eq!(stats.average_level, 2.0); // (1*1 + 2*1 + 3*1) / 3 = 2.0
    }

    #[test]
    fn test_participation() {
        let stats = SkipListStatistics {
            node_count: 4,
            level_distribution: vec![2, 1, 1],
            current_max_level: 3,
            max_possible_level: 3,
            average_level: 1.75,
        };

        assert_eq!(stats.participation(0), 1.0);
        assert_eq!(stats.participation(1), 0.5);
        assert_eq!(stats.participation(2), 0.25);
        assert_eq!(stats.participation(3), 0.0);
    }

    #[test]
    fn test_format_report_lists_populated_levels() {
        let mut stats = SkipListStatistics::empty(3);
        stats.node_count = 2;
        stats.level_distribution = vec![1, 0, 1];
        stats.current_max_level = 3;
        stats.compute_average_level();

        let report = stats.format_report();

        assert!(report.contains("Total nodes: 2"));
        assert!(report.contains("Level 1: 1 nodes (50.0%)"));
        assert!(!report.contains("Level 2:"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidLevel {
            node_level: 20,
            max_level: 16,
        };
        assert!(err.to_string().contains("outside of [1, 16]"));
    }
}
