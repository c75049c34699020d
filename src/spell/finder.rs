use std::io::{BufRead, Write};

use tracing::{info, info_span};

use super::{Dictionary, LoadPolicy, LoadReport, Words};
use crate::{error::CheckResult, skiplist::SkipListStatistics};

/// Параметры проверки текста.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOptions {
    /// Потолок высоты башни для словаря (>= 1).
    pub max_height: usize,
    /// Seed генератора уровней; `None` — энтропия ОС.
    pub seed: Option<u64>,
    pub policy: LoadPolicy,
}

impl FinderOptions {
    pub fn new(max_height: usize) -> Self {
        Self {
            max_height,
            seed: None,
            policy: LoadPolicy::default(),
        }
    }
}

/// Итог проверки.
#[derive(Debug, Clone, PartialEq)]
pub struct FindReport {
    pub load: LoadReport,
    pub words_checked: usize,
    pub unmatched: usize,
    /// Статистика уровней словаря на момент окончания проверки.
    pub statistics: SkipListStatistics,
}

/// Печатает в `out` слова текста, которых нет в словаре.
///
/// Формат вывода: строка `Errors found:`, затем по строке `  - <слово>` на
/// каждое ненайденное слово в порядке появления, без дедупликации.
pub fn find_errors<D, I, W>(
    dict: D,
    text: I,
    options: &FinderOptions,
    out: &mut W,
) -> CheckResult<FindReport>
where
    D: BufRead,
    I: BufRead,
    W: Write,
{
    let _span = info_span!("find_errors", max_height = options.max_height).entered();

    let mut dictionary = match options.seed {
        Some(seed) => Dictionary::with_seed(options.max_height, seed)?,
        None => Dictionary::new(options.max_height)?,
    };

    info!("Loading dictionary...");
    let load = dictionary.load(dict, options.policy)?;

    info!("Finding errors...");
    writeln!(out, "Errors found:")?;

    let mut words_checked = 0;
    let mut unmatched = 0;
    let words = Words::new(text).inspect(|_| words_checked += 1);

    for word in dictionary.unmatched_words(words) {
        let word = word?;
        unmatched += 1;
        writeln!(out, "  - {word}")?;
    }

    out.flush()?;

    let statistics = dictionary.statistics();
    dictionary.clear();

    info!(words_checked, unmatched, "Check finished");

    Ok(FindReport {
        load,
        words_checked,
        unmatched,
        statistics,
    })
}
