//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordhoardArgs};
use crate::error::Result;

/// Plain status message, used by commands without a structured result.
#[derive(Debug, Serialize)]
pub struct MessageResult {
    pub message: String,
}

impl MessageResult {
    pub fn new<S: Into<String>>(message: S) -> Self {
        MessageResult {
            message: message.into(),
        }
    }
}

impl fmt::Display for MessageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &WordhoardArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(result: &T, args: &WordhoardArgs) -> Result<()> {
    if args.verbosity() > 0 {
        let text = result.to_string();
        println!("{}", text.trim_end());
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordhoardArgs) -> Result<()> {
    let json = render_json(result, args.pretty)?;
    println!("{json}");
    Ok(())
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
