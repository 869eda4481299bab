//! Command line argument parsing for the Wordhoard CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::storage::BackendKind;
use crate::vocabulary::ExportFormat;

/// Wordhoard - a personal vocabulary notebook
#[derive(Parser, Debug, Clone)]
#[command(name = "wordhoard")]
#[command(about = "Collect words and definitions in a prefix-searchable notebook")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct WordhoardArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Vocabulary file to load and save
    #[arg(short, long, env = "WORDHOARD_STORE", default_value = "vocabulary.json")]
    pub store: PathBuf,

    /// Storage backend (overrides the config file)
    #[arg(short, long, env = "WORDHOARD_BACKEND")]
    pub backend: Option<BackendKind>,

    /// Manager configuration file (JSON)
    #[arg(short, long, env = "WORDHOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordhoardArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a word or update its definition
    Add(AddArgs),

    /// Look up a word
    Search(SearchArgs),

    /// List words starting with a prefix
    Prefix(PrefixArgs),

    /// List every word
    List,

    /// Delete a word
    Delete(DeleteArgs),

    /// Import a plain-text word list
    Import(ImportArgs),

    /// Export the vocabulary
    Export(ExportArgs),

    /// Show vocabulary statistics
    Stats,
}

impl Command {
    /// Whether the command changes the vocabulary and must be saved.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Delete(_) | Command::Import(_))
    }
}

/// Arguments for adding a word
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Definition (remaining arguments are joined with spaces)
    #[arg(value_name = "DEFINITION", num_args = 0..)]
    pub definition: Vec<String>,
}

/// Arguments for looking up a word
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for prefix search
#[derive(Parser, Debug, Clone)]
pub struct PrefixArgs {
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

/// Arguments for deleting a word
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for importing a word list
#[derive(Parser, Debug, Clone)]
pub struct ImportArgs {
    /// Text file with one `word definition` per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for exporting the vocabulary
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Export format
    #[arg(short = 'a', long = "as", default_value = "text")]
    pub format: ExportFormat,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_multiword_definition() {
        let args =
            WordhoardArgs::try_parse_from(["wordhoard", "add", "apple", "a", "red", "fruit"]).unwrap();
        match args.command {
            Command::Add(add) => {
                assert_eq!(add.word, "apple");
                assert_eq!(add.definition.join(" "), "a red fruit");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_globals() {
        let args = WordhoardArgs::try_parse_from([
            "wordhoard", "-q", "--store", "words.bin", "--backend", "binary", "-f", "json", "stats",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.backend, Some(BackendKind::Binary));
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.store, PathBuf::from("words.bin"));
        assert!(!args.command.is_mutating());
    }

    #[test]
    fn test_parse_export_format() {
        let args =
            WordhoardArgs::try_parse_from(["wordhoard", "export", "out.csv", "--as", "csv"]).unwrap();
        match args.command {
            Command::Export(export) => assert_eq!(export.format, ExportFormat::Csv),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
