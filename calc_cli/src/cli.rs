use calc_core::operators::AngleMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Keypad - a scientific calculator for the terminal. Runs the interactive keypad by default."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file (the only log output in interactive mode)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Engine settings file in JSON format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting angle mode, overriding the settings file ('deg' or 'rad')
    #[arg(short, long, global = true, value_name = "MODE")]
    pub angle_mode: Option<AngleMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the resulting display.
    Eval(EvalArgs),
    /// Open the interactive keypad.
    Tui,
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. `5 + 3 '*' 4 =`. Numbers may be written whole;
    /// words are button tokens (pi, sin, deg, clear, backspace, equals) or
    /// keyboard names (Enter, Escape, Backspace).
    #[arg(required = true, num_args = 1.., value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Print the display and the full state as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key
    #[arg(long, conflicts_with = "json")]
    pub steps: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eval_with_operators() {
        let cli = Cli::try_parse_from(["calc", "eval", "5", "-", "3", "="]).unwrap();
        match cli.command {
            Some(Commands::Eval(args)) => assert_eq!(args.keys, ["5", "-", "3", "="]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn flags_after_keys_are_not_keys() {
        let cli = Cli::try_parse_from(["calc", "eval", "5", "-", "3", "=", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Eval(args)) => {
                assert!(args.json);
                assert_eq!(args.keys, ["5", "-", "3", "="]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_angle_mode() {
        let cli = Cli::try_parse_from(["calc", "--angle-mode", "deg", "eval", "90", "sin"]).unwrap();
        assert_eq!(cli.angle_mode, Some(AngleMode::Degrees));
    }

    #[test]
    fn rejects_unknown_angle_mode() {
        assert!(Cli::try_parse_from(["calc", "--angle-mode", "grad"]).is_err());
    }

    #[test]
    fn defaults_to_interactive() {
        let cli = Cli::try_parse_from(["calc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["calc", "-v", "-q"]).is_err());
    }
}
