/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::wordle::prelude::*;
use rust_embed::RustEmbed;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::Utf8Error;
use thiserror::Error;

// The word list compiled into the binary, used when no dictionary file is given
pub const EMBED_DATA_DIRECTORY: &str = "txt_data/";
pub const BUNDLED_WORDS_FILE_NAME: &str = "words.txt";

#[derive(RustEmbed)]
#[folder = "txt_data/"]
struct RawData;

/// An ordered list of lowercase words (of any length). Loaded once, then only ever borrowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

#[derive(Error, Debug)]
pub enum LoadDictionaryErr {
    #[error("missing bundled word list '{0}'")]
    MissingBundledFile(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Encoding(#[from] Utf8Error),
    #[error("no usable words in dictionary")]
    NoWords,
}

impl Dictionary {
    ///
    /// Builds a dictionary from any words. Each is trimmed and lowercased, and anything which still
    /// isn't made of a-z letters after that is dropped.
    ///
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item=S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| is_word(w))
            .collect();

        Self { words }
    }

    /// Reads one word per line. Fails if nothing usable was found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadDictionaryErr> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        let out = Self::from_words(lines);
        log::debug!("got {} words from dictionary", out.len());
        if out.is_empty() {
            return Err(LoadDictionaryErr::NoWords);
        }

        Ok(out)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadDictionaryErr> {
        let path = path.as_ref();
        log::debug!("reading dictionary from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// The word list embedded in the binary
    pub fn bundled() -> Result<Self, LoadDictionaryErr> {
        let f = RawData::get(BUNDLED_WORDS_FILE_NAME)
            .ok_or(LoadDictionaryErr::MissingBundledFile(BUNDLED_WORDS_FILE_NAME))?;

        let raw = std::str::from_utf8(&f.data)?;
        Self::from_reader(raw.as_bytes())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item=&str> {
        self.words.iter().map(String::as_str)
    }

    /// Only the words with exactly `word_length` letters
    pub fn iter_len(&self, word_length: usize) -> impl Iterator<Item=&str> {
        self.iter().filter(move |w| w.len() == word_length)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_normalizes_and_filters() {
        let dict = Dictionary::from_words(["Crane ", "slate", "tr4ce", "", "  ", "grape\r"]);
        assert_eq!(dict.words(), &["crane", "slate", "grape"]);
    }

    #[test]
    fn test_from_reader() {
        let raw = "crane\nslate\n\nplanet\nhello world\n";
        let dict = Dictionary::from_reader(raw.as_bytes()).expect("should read");
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.iter_len(5).collect::<Vec<_>>(), vec!["crane", "slate"]);
        assert_eq!(dict.iter_len(6).collect::<Vec<_>>(), vec!["planet"]);
        assert!(dict.contains("planet"));
        assert!(!dict.contains("hello"));
    }

    #[test]
    fn test_from_reader_without_words() {
        let err = Dictionary::from_reader("123\n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadDictionaryErr::NoWords), "got {:?}", err);
    }

    #[test]
    fn test_from_missing_path() {
        let err = Dictionary::from_path("definitely/not/a/dictionary.txt").unwrap_err();
        assert!(matches!(err, LoadDictionaryErr::Io(_)), "got {:?}", err);
    }

    #[test]
    fn test_bundled_has_default_length_words() {
        let dict = Dictionary::bundled().expect("bundled word list should load");
        assert!(dict.iter_len(DEFAULT_WORD_LENGTH).count() > 50);
        assert!(dict.iter_len(5).any(|w| w == "trace"));
    }
}
