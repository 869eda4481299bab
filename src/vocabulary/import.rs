//! Plain-text word list import.
//!
//! One entry per line: the word, a run of whitespace, then the definition.
//! Blank lines and lines starting with `#` are skipped:
//!
//! ```text
//! # fruits
//! apple 苹果
//! banana
//! ```
//!
//! Lines are handled independently. A line that cannot be decoded or
//! inserted is recorded in the [`ImportReport`] and the rest of the batch
//! continues.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::trie::Trie;

/// A line that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFailure {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of a batch import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Lines that inserted or updated a word.
    pub inserted: usize,
    pub failures: Vec<LineFailure>,
    #[serde(skip)]
    preview: usize,
}

impl ImportReport {
    fn new(preview: usize) -> Self {
        ImportReport {
            inserted: 0,
            failures: Vec::new(),
            preview,
        }
    }

    /// Number of failed lines.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Imported {} words", self.inserted)?;
        if !self.failures.is_empty() {
            let shown: Vec<String> = self
                .failures
                .iter()
                .take(self.preview)
                .map(LineFailure::to_string)
                .collect();
            write!(f, ", {} failed: {}", self.failures.len(), shown.join("; "))?;
        }
        Ok(())
    }
}

/// Split a line into `(word, definition)`.
///
/// Returns `None` for blank and comment lines. The definition is empty when
/// the line holds only a word.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(split) => Some((&line[..split], line[split..].trim_start())),
        None => Some((line, "")),
    }
}

/// Split raw file content on `\n`, `\r\n` or a lone `\r`.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += 1;
                if content.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Insert every entry found in `content` into `trie`.
///
/// `preview` bounds how many failures the report's message spells out.
pub fn import_bytes(trie: &mut Trie, content: &[u8], preview: usize) -> ImportReport {
    let mut report = ImportReport::new(preview);

    for (index, raw) in split_lines(content).into_iter().enumerate() {
        let line_no = index + 1;
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("import line {line_no} is not valid UTF-8: {e}");
                report.failures.push(LineFailure {
                    line: line_no,
                    reason: "invalid UTF-8".to_string(),
                });
                continue;
            }
        };

        let Some((word, definition)) = parse_line(line) else {
            continue;
        };

        if trie.insert(word, definition) {
            report.inserted += 1;
        } else {
            debug!("import line {line_no} rejected word '{word}'");
            report.failures.push(LineFailure {
                line: line_no,
                reason: format!("'{word}' could not be imported"),
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("apple 苹果"), Some(("apple", "苹果")));
        assert_eq!(parse_line("  apple \t  a red  fruit  "), Some(("apple", "a red  fruit")));
        assert_eq!(parse_line("banana"), Some(("banana", "")));
        assert_eq!(parse_line("book 书籍\r"), Some(("book", "书籍")));
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# comment"), None);
        assert_eq!(parse_line("  # indented comment"), None);
    }

    #[test]
    fn test_import_skips_comments_and_blanks() {
        let mut trie = Trie::new();
        let report = import_bytes(&mut trie, "apple 苹果\n# comment\n\nbook 书籍\n".as_bytes(), 3);

        assert_eq!(report.inserted, 2);
        assert_eq!(report.failed(), 0);
        assert_eq!(trie.search("apple").unwrap().definition, "苹果");
        assert_eq!(trie.search("book").unwrap().definition, "书籍");
        assert_eq!(report.to_string(), "Imported 2 words");
    }

    #[test]
    fn test_import_continues_past_bad_lines() {
        let mut content = "apple 苹果\n".as_bytes().to_vec();
        for _ in 0..4 {
            content.extend_from_slice(b"\xff\xfe broken\n");
        }
        content.extend_from_slice("book 书籍\n".as_bytes());

        let mut trie = Trie::new();
        let report = import_bytes(&mut trie, &content, 3);

        assert_eq!(report.inserted, 2);
        assert_eq!(report.failed(), 4);
        assert_eq!(report.failures[0].line, 2);
        assert!(trie.contains("book"));

        let message = report.to_string();
        assert!(message.starts_with("Imported 2 words, 4 failed: "));
        assert!(message.contains("line 4: invalid UTF-8"));
        assert!(!message.contains("line 5"));
    }

    #[test]
    fn test_split_lines_handles_every_line_ending() {
        let lines = split_lines(b"a 1\r\nb 2\rc 3\nd 4");
        assert_eq!(lines, vec![&b"a 1"[..], b"b 2", b"c 3", b"d 4"]);
        assert!(split_lines(b"").is_empty());
        assert_eq!(split_lines(b"\r\r"), vec![&b""[..], b""]);
    }

    #[test]
    fn test_import_carriage_return_only_file() {
        let mut trie = Trie::new();
        let report = import_bytes(&mut trie, "apple 苹果\rbook 书籍\r".as_bytes(), 3);

        assert_eq!(report.inserted, 2);
        assert_eq!(trie.search("apple").unwrap().definition, "苹果");
        assert_eq!(trie.search("book").unwrap().definition, "书籍");
    }
}
