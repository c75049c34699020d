use std::{
    io::{self, BufRead},
    iter::FusedIterator,
};

/// Ленивый итератор по словам текста.
///
/// Слово — максимальная последовательность алфавитных символов
/// (`char::is_alphabetic`); всё остальное считается разделителем и
/// отбрасывается. Текст читается построчно, длина слова не ограничена.
/// Байты, не образующие корректный UTF-8, заменяются на U+FFFD и работают
/// как разделитель: одна битая последовательность не прерывает проверку.
/// Итератор одноразовый: после `None` он больше ничего не вернёт.
pub struct Words<B> {
    reader: B,
    buf: Vec<u8>,
    line: String,
    pos: usize,
    done: bool,
}

impl<B: BufRead> Words<B> {
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: String::new(),
            pos: 0,
            done: false,
        }
    }

    /// Вынимает следующее слово из уже прочитанной строки.
    fn take_word(&mut self) -> Option<String> {
        let rest = &self.line[self.pos..];
        let start = rest.find(char::is_alphabetic)?;
        let tail = &rest[start..];
        let len = tail
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(tail.len());

        let word = tail[..len].to_owned();
        self.pos += start + len;

        Some(word)
    }
}

impl<B: BufRead> Iterator for Words<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.take_word() {
                return Some(Ok(word));
            }

            if self.done {
                return None;
            }

            self.buf.clear();
            self.line.clear();
            self.pos = 0;

            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => self.line.push_str(&String::from_utf8_lossy(&self.buf)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<B: BufRead> FusedIterator for Words<B> {}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn words(text: &str) -> Vec<String> {
        Words::new(Cursor::new(text))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_splits_on_non_alpha() {
        assert_eq!(
            words("Apple eats an Orange"),
            vec!["Apple", "eats", "an", "Orange"]
        );
        assert_eq!(words("it's 42nd-street!"), vec!["it", "s", "nd", "street"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert!(words("").is_empty());
        assert!(words("  123 ,.;\n\n\t--\n").is_empty());
    }

    #[test]
    fn test_words_across_lines() {
        assert_eq!(words("one\ntwo\r\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(words("café naïve—Straße"), vec!["café", "naïve", "Straße"]);
    }

    #[test]
    fn test_long_word_not_truncated() {
        let long = "a".repeat(1000);
        let text = format!("x {long} y");

        assert_eq!(words(&text), vec!["x".to_string(), long, "y".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_acts_as_separator() {
        let text = b"good caf\xE9 x\nbad\xFF\xFEwords here\n".to_vec();

        let words: Vec<_> = Words::new(Cursor::new(text))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(words, vec!["good", "caf", "x", "bad", "words", "here"]);
    }

    #[test]
    fn test_read_error_ends_iteration() {
        struct Broken;

        impl io::Read for Broken {
            fn read(
                &mut self,
                _buf: &mut [u8],
            ) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut it = Words::new(io::BufReader::new(Broken));

        assert!(matches!(it.next(), Some(Err(_))));
        assert!(it.next().is_none());
    }
}
