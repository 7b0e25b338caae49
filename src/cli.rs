//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::Layout;

/// Upper bound on `generate --count`; a batch is held in memory until it is
/// complete, since nothing is printed unless every identifier succeeds.
pub const MAX_COUNT: u64 = 1_000_000;

/// Top-level CLI parser for `keymint`.
#[derive(Debug, Parser)]
#[command(name = "keymint", version, about = "Generate opaque, collision-resistant storage keys")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate new identifiers.
    Generate {
        /// How many identifiers to print.
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(..=MAX_COUNT)
        )]
        count: u64,
        /// Bit layout; overrides `KEYMINT_LAYOUT`.
        #[arg(long, value_enum)]
        layout: Option<Layout>,
        /// Print a JSON array instead of one identifier per line.
        #[arg(long)]
        json: bool,
    },
    /// Check that identifiers are well formed.
    Check {
        /// Identifiers to validate.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::config::Layout;
    use clap::Parser;

    #[test]
    fn parses_generate_defaults() {
        let cli = Cli::parse_from(["keymint", "generate"]);
        assert!(matches!(cli.command, Command::Generate { count: 1, layout: None, json: false }));
    }

    #[test]
    fn parses_generate_options() {
        let cli = Cli::parse_from([
            "keymint",
            "generate",
            "-n",
            "5",
            "--layout",
            "timestamped",
            "--json",
        ]);
        assert!(matches!(
            cli.command,
            Command::Generate { count: 5, layout: Some(Layout::Timestamped), json: true }
        ));
    }

    #[test]
    fn count_is_bounded() {
        assert!(Cli::try_parse_from(["keymint", "generate", "-n", "1000000"]).is_ok());
        assert!(Cli::try_parse_from(["keymint", "generate", "-n", "1000001"]).is_err());
    }

    #[test]
    fn check_requires_an_identifier() {
        assert!(Cli::try_parse_from(["keymint", "check"]).is_err());
    }
}
