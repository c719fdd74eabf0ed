//! Latin-to-Cyrillic transliteration.
//!
//! Input is processed line by line and word by word. Each word is walked
//! with the greedy matcher, advancing the cursor by the number of characters
//! each match consumed. Words are re-joined with one space and lines with
//! one newline; original whitespace runs are not preserved.

mod matcher;
pub mod trace;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead};

use tracing::{debug, debug_span};

use crate::table::MappingTable;

pub use matcher::{MatchResult, MatchSource, Matcher};
pub use trace::{NoTrace, Trace, WriterTrace};

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

#[derive(Default)]
struct Stats {
    lines: usize,
    chars_out: usize,
    unknown: usize,
}

/// Owns a mapping table and runs the greedy tokenizer over text.
///
/// Immutable after construction; one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    table: MappingTable,
}

impl Transliterator {
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.table)
    }

    /// Translate a whole line-oriented source.
    ///
    /// Fails as a unit: on a read error (including invalid UTF-8) nothing
    /// is returned.
    pub fn translate<R: BufRead>(&self, reader: R) -> Result<String, TranslateError> {
        self.translate_traced(reader, &mut NoTrace)
    }

    /// Like [`translate`](Self::translate), reporting every emitted
    /// character to `trace`.
    pub fn translate_traced<R: BufRead, T: Trace>(
        &self,
        reader: R,
        trace: &mut T,
    ) -> Result<String, TranslateError> {
        let _span = debug_span!("translate").entered();
        let mut out = String::new();
        let mut stats = Stats::default();
        for line in reader.lines() {
            let line = line?;
            self.push_line(&line, &mut out, trace, &mut stats);
        }
        debug!(
            lines = stats.lines,
            chars_out = stats.chars_out,
            unknown = stats.unknown
        );
        Ok(out)
    }

    /// Translate in-memory text. Same line and word handling as
    /// [`translate`](Self::translate), without the I/O error path.
    pub fn translate_str(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut stats = Stats::default();
        for line in text.lines() {
            self.push_line(line, &mut out, &mut NoTrace, &mut stats);
        }
        out
    }

    /// Translate a single word. Whitespace inside `word` is matched like any
    /// other unknown character.
    pub fn translate_word(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let mut out = String::with_capacity(word.len() * 2);
        self.push_word(&chars, &mut out, &mut NoTrace, &mut Stats::default());
        out
    }

    fn push_line<T: Trace>(
        &self,
        line: &str,
        out: &mut String,
        trace: &mut T,
        stats: &mut Stats,
    ) {
        if stats.lines > 0 {
            out.push('\n');
        }
        stats.lines += 1;

        let mut chars = Vec::new();
        for (j, word) in line.split_whitespace().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            chars.clear();
            chars.extend(word.chars());
            self.push_word(&chars, out, trace, stats);
        }
    }

    fn push_word<T: Trace>(
        &self,
        word: &[char],
        out: &mut String,
        trace: &mut T,
        stats: &mut Stats,
    ) {
        let matcher = self.matcher();
        let mut pos = 0;
        while let Some(m) = matcher.match_at(word, pos) {
            trace.step(word[pos], m.output);
            out.push(m.output);
            stats.chars_out += 1;
            if m.is_unknown() {
                stats.unknown += 1;
            }
            pos += m.consumed;
        }
    }
}
