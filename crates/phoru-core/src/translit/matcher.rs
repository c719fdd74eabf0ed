use tracing::warn;

use crate::table::{LengthClass, MappingTable};

/// Bytes needed for the widest lowered window: three 4-byte chars.
const KEY_BUF: usize = 12;

/// Where a match's output character came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Table(LengthClass),
    /// No key matched; the input character is passed through.
    Unknown,
}

/// One step of the tokenizer: a single output character and how many input
/// characters it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub output: char,
    pub consumed: usize,
    pub source: MatchSource,
}

impl MatchResult {
    pub fn is_unknown(&self) -> bool {
        self.source == MatchSource::Unknown
    }
}

/// Greedy longest-match lookup against a `MappingTable`.
#[derive(Clone, Copy)]
pub struct Matcher<'t> {
    table: &'t MappingTable,
}

impl<'t> Matcher<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    /// Match the longest table key starting at `word[pos]`.
    ///
    /// Classes are tried triple → double → single, skipping any class wider
    /// than the characters left in the word. Lookup uses the lowercased
    /// window; the output is uppercased when the leading character is.
    /// Returns `None` once `pos` is past the end of the word.
    pub fn match_at(&self, word: &[char], pos: usize) -> Option<MatchResult> {
        let rest = word.get(pos..)?;
        let &lead = rest.first()?;
        let upper = lead.is_uppercase();

        let mut buf = [0u8; KEY_BUF];
        for class in LengthClass::LONGEST_FIRST {
            let width = class.width();
            if rest.len() < width {
                continue;
            }
            let Some(key) = lower_key(&rest[..width], &mut buf) else {
                continue;
            };
            if let Some(out) = self.table.get(class, key) {
                return Some(MatchResult {
                    output: if upper { to_upper(out) } else { out },
                    consumed: width,
                    source: MatchSource::Table(class),
                });
            }
        }

        warn!(ch = %lead, "unknown character, passing through");
        Some(MatchResult {
            output: lead,
            consumed: 1,
            source: MatchSource::Unknown,
        })
    }
}

/// Lowercase `window` into `buf`.
///
/// `None` when a character lowercases to more than one character: the
/// lowered text is then longer than the class width and no key can match.
fn lower_key<'b>(window: &[char], buf: &'b mut [u8; KEY_BUF]) -> Option<&'b str> {
    let mut len = 0;
    for &c in window {
        let lower = single(c.to_lowercase())?;
        len += lower.encode_utf8(&mut buf[len..]).len();
    }
    std::str::from_utf8(&buf[..len]).ok()
}

/// Uppercase a single character, keeping it as-is when the uppercase form
/// is not a single character.
fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Match every position of `word` and return the formatted log output.
    fn logged_while_matching(word: &str) -> String {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let table = MappingTable::builtin();
            let matcher = Matcher::new(&table);
            let word = chars(word);
            let mut pos = 0;
            while let Some(m) = matcher.match_at(&word, pos) {
                pos += m.consumed;
            }
        });
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn first(word: &str) -> MatchResult {
        let table = MappingTable::builtin();
        Matcher::new(&table).match_at(&chars(word), 0).unwrap()
    }

    #[test]
    fn single_match() {
        let m = first("a");
        assert_eq!(m.output, 'а');
        assert_eq!(m.consumed, 1);
        assert_eq!(m.source, MatchSource::Table(LengthClass::Single));
    }

    #[test]
    fn double_beats_single() {
        let m = first("shto");
        assert_eq!(m.output, 'ш');
        assert_eq!(m.consumed, 2);
    }

    #[test]
    fn triple_beats_double() {
        let m = first("shhto");
        assert_eq!(m.output, 'щ');
        assert_eq!(m.consumed, 3);
        assert_eq!(m.source, MatchSource::Table(LengthClass::Triple));
    }

    #[test]
    fn falls_back_to_shorter_class() {
        // "ts" has no double mapping and "tsa" no triple one
        let m = first("tsar");
        assert_eq!(m.output, 'т');
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn short_remainder_skips_wide_classes() {
        let table = MappingTable::builtin();
        let matcher = Matcher::new(&table);
        let word = chars("mish");
        let m = matcher.match_at(&word, 2).unwrap();
        assert_eq!(m.output, 'ш');
        assert_eq!(m.consumed, 2);
        let m = matcher.match_at(&word, 3).unwrap();
        assert!(m.is_unknown());
        assert_eq!(m.output, 'h');
    }

    #[test]
    fn unknown_passes_through() {
        let m = first("5");
        assert!(m.is_unknown());
        assert_eq!(m.output, '5');
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn unknown_emits_warning() {
        let logs = logged_while_matching("5");
        let warnings: Vec<&str> = logs.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "logs={logs}");
        assert!(warnings[0].contains("ch=5"), "logs={logs}");
    }

    #[test]
    fn one_warning_per_unknown_char() {
        let logs = logged_while_matching("a5h");
        assert_eq!(logs.lines().filter(|l| l.contains("WARN")).count(), 2);
        assert!(logs.contains("ch=h"));
    }

    #[test]
    fn mapped_chars_do_not_warn() {
        let logs = logged_while_matching("a");
        assert!(!logs.contains("WARN"), "logs={logs}");
        assert!(logged_while_matching("shhto").is_empty());
    }

    #[test]
    fn unknown_keeps_case() {
        let m = first("W");
        assert_eq!(m.output, 'W');
        assert!(m.is_unknown());
    }

    #[test]
    fn uppercase_lead() {
        let m = first("Privet");
        assert_eq!(m.output, 'П');
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn uppercase_window_is_lowered_for_lookup() {
        let m = first("SHH");
        assert_eq!(m.output, 'Щ');
        assert_eq!(m.consumed, 3);

        let m = first("sH");
        assert_eq!(m.output, 'ш');
        assert_eq!(m.consumed, 2);
    }

    #[test]
    fn accented_singles() {
        assert_eq!(first("ï").output, 'й');
        assert_eq!(first("Ï").output, 'Й');
        assert_eq!(first("î").output, 'ы');
        assert_eq!(first("è").output, 'э');
    }

    #[test]
    fn past_end_is_none() {
        let table = MappingTable::builtin();
        let matcher = Matcher::new(&table);
        assert!(matcher.match_at(&[], 0).is_none());
        assert!(matcher.match_at(&chars("ab"), 2).is_none());
        assert!(matcher.match_at(&chars("ab"), 7).is_none());
    }

    #[test]
    fn lower_key_folds_case() {
        let mut buf = [0u8; KEY_BUF];
        assert_eq!(lower_key(&['S', 'h', 'H'], &mut buf), Some("shh"));
        assert_eq!(lower_key(&['Ï'], &mut buf), Some("ï"));
        assert_eq!(lower_key(&['`', 'E'], &mut buf), Some("`e"));
    }

    #[test]
    fn lower_key_fits_wide_chars() {
        let mut buf = [0u8; KEY_BUF];
        let wide = ['\u{1F600}', '\u{1F601}', '\u{1F602}'];
        assert_eq!(lower_key(&wide, &mut buf), Some("\u{1F600}\u{1F601}\u{1F602}"));
    }

    #[test]
    fn lower_key_rejects_expanding_chars() {
        let mut buf = [0u8; KEY_BUF];
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(lower_key(&['İ'], &mut buf), None);
        let m = first("İ");
        assert!(m.is_unknown());
        assert_eq!(m.output, 'İ');
    }

    #[test]
    fn to_upper_single_char_only() {
        assert_eq!(to_upper('я'), 'Я');
        // 'ß' uppercases to "SS"; keep the original
        assert_eq!(to_upper('ß'), 'ß');
    }
}
