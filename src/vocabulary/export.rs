//! Vocabulary export in text, JSON and CSV form.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordhoardError};
use crate::storage::json::WordSnapshot;
use crate::storage::write_atomically;
use crate::trie::Entry;

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `<word> <definition>` per line
    #[value(alias = "txt")]
    Text,
    /// `{"words": [...]}` document
    Json,
    /// Quoted `word,definition` rows
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = WordhoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(WordhoardError::format(s.to_string())),
        }
    }
}

/// Render entries in `format` into `out`.
pub fn write_entries<W: Write>(entries: &[Entry], format: ExportFormat, out: &mut W) -> Result<()> {
    match format {
        ExportFormat::Text => {
            for entry in entries {
                writeln!(out, "{} {}", entry.word, entry.definition)?;
            }
        }
        ExportFormat::Json => {
            let json = WordSnapshot::from_entries(entries).to_json_pretty()?;
            out.write_all(json.as_bytes())?;
        }
        ExportFormat::Csv => {
            out.write_all(b"word,definition\n")?;
            let mut writer = WriterBuilder::new()
                .quote_style(QuoteStyle::Always)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut *out);
            for entry in entries {
                writer.write_record([entry.word.as_str(), entry.definition.as_str()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write entries to `path` in `format`, replacing any existing file.
pub fn export_entries(entries: &[Entry], format: ExportFormat, path: &Path) -> Result<()> {
    write_atomically(path, |w| write_entries(entries, format, w))
}
