//! cpstr CLI: code-point string operations from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod ops;
mod validate;

/// Environment variable holding the log filter (env_logger syntax).
const LOG_ENV: &str = "CPSTR_LOG";

#[derive(Debug, Parser)]
#[command(name = "cpstr")]
#[command(about = "Code-point indexed string operations on UTF-8 text", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v debug, -vv trace); overridden by CPSTR_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate files (or stdin) as UTF-8
    Validate(validate::ValidateUtf8Args),

    #[command(flatten)]
    Op(ops::OpCommand),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{:?}", cli.command);

    let code = match cli.command {
        Command::Validate(args) => validate::run(args, cli.json)?,
        Command::Op(op) => {
            let name = op.name();
            let outcome = ops::run(op).with_context(|| format!("failed to run {}", name))?;
            ops::print(name, &outcome, cli.json)?
        }
    };

    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_operation_subcommands() {
        let cli = Cli::try_parse_from(["cpstr", "index-of", "Hello, World!", "World"]).unwrap();
        assert!(matches!(cli.command, Command::Op(ops::OpCommand::IndexOf { .. })));

        let cli = Cli::try_parse_from(["cpstr", "--json", "pad-start", "Pad", "10"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Op(ops::OpCommand::PadStart { pad, target_len, .. }) => {
                assert_eq!(pad, " ");
                assert_eq!(target_len, 10);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_validate() {
        let cli = Cli::try_parse_from(["cpstr", "validate", "-q", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert!(args.quiet);
                assert_eq!(args.files.len(), 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
