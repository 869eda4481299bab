//! Command implementations for the Wordhoard CLI.
//!
//! Each invocation loads the store named by `--store` (if it exists), runs
//! one manager operation and saves the store again after mutating commands.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WordhoardError};
use crate::vocabulary::{ManagerConfig, VocabularyManager};

/// Execute a CLI command.
pub fn execute_command(args: WordhoardArgs) -> Result<()> {
    let mut manager = open_manager(&args)?;

    match &args.command {
        Command::Add(add_args) => add_word(&mut manager, add_args, &args)?,
        Command::Search(search_args) => search_word(&manager, search_args, &args)?,
        Command::Prefix(prefix_args) => prefix_search(&manager, prefix_args, &args)?,
        Command::List => output_result(&manager.list_all_words(), &args)?,
        Command::Delete(delete_args) => {
            let message = manager.delete_word(&delete_args.word)?;
            output_result(&MessageResult::new(message), &args)?;
        }
        Command::Import(import_args) => {
            let report = manager.import_from_file(&import_args.file)?;
            output_result(&report, &args)?;
        }
        Command::Export(export_args) => {
            let message = manager.export_as(&export_args.file, export_args.format)?;
            output_result(&MessageResult::new(message), &args)?;
        }
        Command::Stats => output_result(&manager.stats(), &args)?,
    }

    if args.command.is_mutating() {
        let message = manager.save(&args.store)?;
        info!("{message}");
    }

    Ok(())
}

/// Build the manager from config and flags, then load the store if present.
fn open_manager(args: &WordhoardArgs) -> Result<VocabularyManager> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            ManagerConfig::from_json_file(path)?
        }
        None => ManagerConfig::default(),
    };
    if let Some(backend) = args.backend {
        config = config.with_backend(backend);
    }

    let mut manager = VocabularyManager::with_config(config);
    if args.store.exists() {
        let message = manager.load(&args.store)?;
        debug!("{message} from {}", args.store.display());
    } else {
        debug!(
            "store {} does not exist, starting empty with {} backend",
            args.store.display(),
            manager.backend_kind()
        );
    }
    Ok(manager)
}

fn add_word(manager: &mut VocabularyManager, args: &AddArgs, cli_args: &WordhoardArgs) -> Result<()> {
    let definition = args.definition.join(" ");
    let message = manager.add_word(&args.word, &definition)?;
    output_result(&MessageResult::new(message), cli_args)
}

fn search_word(
    manager: &VocabularyManager,
    args: &SearchArgs,
    cli_args: &WordhoardArgs,
) -> Result<()> {
    match manager.lookup(&args.word) {
        Some(entry) => output_result(entry, cli_args),
        None => Err(WordhoardError::not_found(format!(
            "word '{}'",
            args.word.trim()
        ))),
    }
}

fn prefix_search(
    manager: &VocabularyManager,
    args: &PrefixArgs,
    cli_args: &WordhoardArgs,
) -> Result<()> {
    let listing = manager.prefix_search(&args.prefix)?;
    output_result(&listing, cli_args)
}
