//! Loading and querying the Romanian wordform/MWE/abbreviation lexicon.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::LexiconError;

/// Where the three lexicon resources live on disk. The loader is otherwise
/// path-agnostic; resolving these paths (relative to a data directory, an
/// installed package, etc.) is the caller's job.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    pub wordforms: PathBuf,
    pub mwes: PathBuf,
    pub abbrs: PathBuf,
}

impl LexiconPaths {
    /// Convenience constructor for the common case of three files that live
    /// side by side in one directory, named `wordforms.txt`, `mwes.txt`,
    /// and `abbrs.txt`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        LexiconPaths {
            wordforms: dir.join("wordforms.txt"),
            mwes: dir.join("mwes.txt"),
            abbrs: dir.join("abbrs.txt"),
        }
    }
}

/// Immutable, shareable view of the Romanian lexicon. Construct once via
/// [`Lexicon::load`]; every classification method takes `&self`.
#[derive(Debug)]
pub struct Lexicon {
    words: HashSet<String>,
    mwe_first: HashSet<String>,
    abbr_first: HashSet<String>,
    max_word_len: usize,
    max_mwe_parts: usize,
    max_abbr_parts: usize,
}

const DEFAULT_MAX_WORD_LEN: usize = 25;
const DEFAULT_MAX_MWE_PARTS: usize = 2;
const DEFAULT_MAX_ABBR_PARTS: usize = 2;

impl Lexicon {
    /// Reads the three lexicon files and builds the combined lexicon. Each
    /// file is one entry per line; blank lines are skipped. MWE entries use
    /// `_` as their part separator, ABBR entries use `.`. Both kinds are
    /// folded into the same surface-form set as the plain wordforms, so that
    /// `is_lex_word` recognizes them too.
    pub fn load(paths: &LexiconPaths) -> Result<Self, LexiconError> {
        let mut words = HashSet::new();
        let mut max_word_len = DEFAULT_MAX_WORD_LEN;

        let wordform_count = read_lines(&paths.wordforms, |line| {
            if line.chars().count() > max_word_len {
                max_word_len = line.chars().count();
            }
            words.insert(line.to_string());
        })?;
        info!(path = %paths.wordforms.display(), count = wordform_count, "loaded wordforms");

        let mut mwe_first = HashSet::new();
        let mut max_mwe_parts = DEFAULT_MAX_MWE_PARTS;

        let mwe_count = read_lines(&paths.mwes, |line| {
            let parts: Vec<&str> = line.split('_').collect();
            if parts.len() > max_mwe_parts {
                max_mwe_parts = parts.len();
            }
            if let Some(first) = parts.first() {
                mwe_first.insert((*first).to_string());
            }
            if line.chars().count() > max_word_len {
                max_word_len = line.chars().count();
            }
            words.insert(line.to_string());
        })?;
        info!(path = %paths.mwes.display(), count = mwe_count, "loaded MWEs");

        let mut abbr_first = HashSet::new();
        let mut max_abbr_parts = DEFAULT_MAX_ABBR_PARTS;

        let abbr_count = read_lines(&paths.abbrs, |line| {
            let parts: Vec<&str> = line.split('.').collect();
            if parts.len() > max_abbr_parts {
                max_abbr_parts = parts.len();
            }
            if let Some(first) = parts.first() {
                abbr_first.insert((*first).to_string());
            }
            if line.chars().count() > max_word_len {
                max_word_len = line.chars().count();
            }
            words.insert(line.to_string());
        })?;
        info!(path = %paths.abbrs.display(), count = abbr_count, "loaded abbreviations");

        Ok(Lexicon {
            words,
            mwe_first,
            abbr_first,
            max_word_len,
            max_mwe_parts,
            max_abbr_parts,
        })
    }

    /// Builds a lexicon directly from in-memory entries, bypassing the
    /// filesystem. Used by tests and by callers that embed their word lists.
    pub fn from_entries<I, J, K>(wordforms: I, mwes: J, abbrs: K) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let mut words = HashSet::new();
        let mut max_word_len = DEFAULT_MAX_WORD_LEN;

        for w in wordforms {
            let w = w.as_ref();
            if w.chars().count() > max_word_len {
                max_word_len = w.chars().count();
            }
            words.insert(w.to_string());
        }

        let mut mwe_first = HashSet::new();
        let mut max_mwe_parts = DEFAULT_MAX_MWE_PARTS;
        for m in mwes {
            let m = m.as_ref();
            let parts: Vec<&str> = m.split('_').collect();
            if parts.len() > max_mwe_parts {
                max_mwe_parts = parts.len();
            }
            if let Some(first) = parts.first() {
                mwe_first.insert((*first).to_string());
            }
            if m.chars().count() > max_word_len {
                max_word_len = m.chars().count();
            }
            words.insert(m.to_string());
        }

        let mut abbr_first = HashSet::new();
        let mut max_abbr_parts = DEFAULT_MAX_ABBR_PARTS;
        for a in abbrs {
            let a = a.as_ref();
            let parts: Vec<&str> = a.split('.').collect();
            if parts.len() > max_abbr_parts {
                max_abbr_parts = parts.len();
            }
            if let Some(first) = parts.first() {
                abbr_first.insert((*first).to_string());
            }
            if a.chars().count() > max_word_len {
                max_word_len = a.chars().count();
            }
            words.insert(a.to_string());
        }

        Lexicon {
            words,
            mwe_first,
            abbr_first,
            max_word_len,
            max_mwe_parts,
            max_abbr_parts,
        }
    }

    /// Matches a surface form exactly, or lowercased, against the combined
    /// lexicon (wordforms ∪ MWEs ∪ abbreviations).
    pub fn is_lex_word(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn is_mwe_first_word(&self, word: &str) -> bool {
        self.mwe_first.contains(word) || self.mwe_first.contains(&word.to_lowercase())
    }

    pub fn is_abbr_first_word(&self, word: &str) -> bool {
        self.abbr_first.contains(word) || self.abbr_first.contains(&word.to_lowercase())
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn max_mwe_parts(&self) -> usize {
        self.max_mwe_parts
    }

    pub fn max_abbr_parts(&self) -> usize {
        self.max_abbr_parts
    }
}

fn read_lines(path: &Path, mut on_line: impl FnMut(&str)) -> Result<usize, LexiconError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        error!(path = %path.display(), error = %source, "failed to read lexicon file");
        LexiconError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut count = 0;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        on_line(line);
        count += 1;
    }

    if count == 0 {
        error!(path = %path.display(), "lexicon file has no usable entries");
        return Err(LexiconError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(count)
}
