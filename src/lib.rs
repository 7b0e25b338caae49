//! Embeddable generator of opaque, collision-resistant storage keys.
//!
//! The library entry point for hosts is [`generate_identifier`]; richer
//! control (layouts, injected sources, record/replay) goes through
//! [`IdentifierGenerator`] and [`context::ServiceContext`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod ports;

pub use config::Layout;
pub use error::{EntropyError, GenerateError, ParseIdentifierError};
pub use generator::{generate_identifier, IdentifierGenerator};
pub use identifier::{Identifier, IDENTIFIER_LEN};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the environment
/// holds invalid settings, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let settings = config::Settings::from_env().map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, &settings)
}
