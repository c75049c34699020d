use std::io::{self, BufRead};

use rand::{rngs::StdRng, RngCore};
use serde::Deserialize;
use tracing::{info, warn};

use super::Words;
use crate::{
    error::{CheckError, CheckResult, SkipListError},
    skiplist::{CaseInsensitive, SkipList, SkipListStatistics},
};

/// Что делать с пустыми строками словаря.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Пропустить строку, записать её номер в отчёт.
    #[default]
    Skip,
    /// Прервать загрузку с `CheckError::EmptyLine`.
    Reject,
}

/// Итог загрузки словаря.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Сколько слов вставлено.
    pub inserted: usize,
    /// Номера (с 1) пропущенных пустых строк.
    pub skipped: Vec<usize>,
    /// Номера (с 1) пропущенных строк с некорректным UTF-8.
    pub invalid: Vec<usize>,
}

/// Словарь слов без учёта регистра поверх SkipList.
#[derive(Debug)]
pub struct Dictionary<R = StdRng> {
    words: SkipList<String, CaseInsensitive, R>,
}

impl Dictionary<StdRng> {
    pub fn new(max_height: usize) -> Result<Self, SkipListError> {
        Ok(Self {
            words: SkipList::new(max_height, CaseInsensitive)?,
        })
    }

    pub fn with_seed(
        max_height: usize,
        seed: u64,
    ) -> Result<Self, SkipListError> {
        Ok(Self {
            words: SkipList::with_seed(max_height, CaseInsensitive, seed)?,
        })
    }
}

impl<R: RngCore> Dictionary<R> {
    /// Оборачивает уже созданный список.
    pub fn from_list(words: SkipList<String, CaseInsensitive, R>) -> Self {
        Self { words }
    }

    pub fn insert(
        &mut self,
        word: impl Into<String>,
    ) -> Result<(), SkipListError> {
        self.words.insert(word.into())
    }

    /// Загружает словарь: одна строка — одно слово.
    ///
    /// Перевод строки (`\n` или `\r\n`) отрезается, остальное содержимое
    /// строки становится словом как есть. Пустые строки и строки, не
    /// являющиеся корректным UTF-8, обрабатываются согласно `policy`.
    pub fn load<B: BufRead>(
        &mut self,
        mut reader: B,
        policy: LoadPolicy,
    ) -> CheckResult<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();

            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            number += 1;

            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

            if bytes.is_empty() {
                match policy {
                    LoadPolicy::Skip => {
                        warn!(line = number, "Skipping empty dictionary line");
                        report.skipped.push(number);
                        continue;
                    }
                    LoadPolicy::Reject => return Err(CheckError::EmptyLine { line: number }),
                }
            }

            let word = match std::str::from_utf8(bytes) {
                Ok(word) => word,
                Err(source) => match policy {
                    LoadPolicy::Skip => {
                        warn!(line = number, error = %source, "Skipping non UTF-8 dictionary line");
                        report.invalid.push(number);
                        continue;
                    }
                    LoadPolicy::Reject => {
                        return Err(CheckError::InvalidUtf8 {
                            line: number,
                            source,
                        })
                    }
                },
            };

            self.words.insert(word.to_owned())?;
            report.inserted += 1;
        }

        info!(
            inserted = report.inserted,
            skipped = report.skipped.len(),
            invalid = report.invalid.len(),
            max_level = self.words.max_level(),
            "Dictionary loaded"
        );

        Ok(report)
    }

    /// Есть ли слово в словаре (без учёта регистра).
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words
            .search_by(|stored| CaseInsensitive::compare_str(stored, word))
            .is_some()
    }

    /// Слова текста, которых нет в словаре, в порядке появления.
    ///
    /// Повторы не схлопываются; ошибки чтения пробрасываются как есть.
    pub fn unmatched<'a, B>(
        &'a self,
        text: B,
    ) -> impl Iterator<Item = io::Result<String>> + 'a
    where
        B: BufRead + 'a,
    {
        self.unmatched_words(Words::new(text))
    }

    /// То же, что [`Dictionary::unmatched`], но по готовому потоку слов.
    pub fn unmatched_words<'a, I>(
        &'a self,
        words: I,
    ) -> impl Iterator<Item = io::Result<String>> + 'a
    where
        I: IntoIterator<Item = io::Result<String>>,
        I::IntoIter: 'a,
    {
        words.into_iter().filter(move |word| match word {
            Ok(word) => !self.contains(word),
            Err(_) => true,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn statistics(&self) -> SkipListStatistics {
        self.words.statistics()
    }

    /// Доступ к нижележащему списку.
    pub fn words(&self) -> &SkipList<String, CaseInsensitive, R> {
        &self.words
    }

    /// Освобождает все слова.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}
