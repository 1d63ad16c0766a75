use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use favored::{position_by, position_with, prefers_max, prefers_min, ByKey, Max, Min};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "favored")]
#[command(about = "Print the favored value of a list under a chosen ordering")]
#[command(version)]
struct Cli {
    /// Also print the zero-based position of the winner
    #[arg(
        short,
        long,
        global = true,
        env = "FAVORED_POSITION",
        value_parser = FalseyValueParser::new()
    )]
    position: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smallest integer
    Min {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Largest integer
    Max {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Word with the fewest characters
    Shortest { words: Vec<String> },
    /// Word with the most characters
    Longest { words: Vec<String> },
    /// Lexicographically first word
    First { words: Vec<String> },
    /// Lexicographically last word
    Last { words: Vec<String> },
}

fn report<T: std::fmt::Display>(items: &[T], index: usize, show_position: bool) -> String {
    if show_position {
        format!("{} (at {})", items[index], index)
    } else {
        items[index].to_string()
    }
}

/// Picks the winner for the parsed command and renders the line to print.
fn run(cli: &Cli) -> Result<String> {
    let line = match &cli.command {
        Commands::Min { values } => {
            debug!(count = values.len(), "min");
            let index = position_by(values, prefers_min)?;
            report(values, index, cli.position)
        }
        Commands::Max { values } => {
            debug!(count = values.len(), "max");
            let index = position_by(values, prefers_max)?;
            report(values, index, cli.position)
        }
        Commands::Shortest { words } => {
            debug!(count = words.len(), "shortest");
            let index = position_with(words, ByKey::min(|w: &String| w.chars().count()))?;
            report(words, index, cli.position)
        }
        Commands::Longest { words } => {
            debug!(count = words.len(), "longest");
            let index = position_with(words, ByKey::max(|w: &String| w.chars().count()))?;
            report(words, index, cli.position)
        }
        Commands::First { words } => {
            debug!(count = words.len(), "first");
            let index = position_with(words, Min::new())?;
            report(words, index, cli.position)
        }
        Commands::Last { words } => {
            debug!(count = words.len(), "last");
            let index = position_with(words, Max::new())?;
            report(words, index, cli.position)
        }
    };
    Ok(line)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use favored::EmptyInputError;

    use super::*;

    // Parsing reads FAVORED_POSITION, so tests touching the environment take this first.
    static ENV: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let _guard = env_lock();
        let cli = Cli::try_parse_from(std::iter::once("favored").chain(args.iter().copied()))?;
        run(&cli)
    }

    #[test]
    fn empty_values_are_an_error() {
        let err = run_args(&["min"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EmptyInputError>(),
            Some(&EmptyInputError)
        );
        assert!(run_args(&["longest"]).is_err());
    }

    #[test]
    fn negative_numbers_are_values() {
        assert_eq!(run_args(&["max", "--", "-3", "-1", "-1"]).unwrap(), "-1");
        assert_eq!(run_args(&["min", "-3", "4"]).unwrap(), "-3");
    }

    #[test]
    fn position_reports_first_of_ties() {
        assert_eq!(
            run_args(&["-p", "shortest", "pear", "fig", "kiwi", "fig"]).unwrap(),
            "fig (at 1)"
        );
        assert_eq!(
            run_args(&["longest", "--position", "ab", "cd", "e"]).unwrap(),
            "ab (at 0)"
        );
        assert_eq!(
            run_args(&["-p", "max", "--", "-3", "-1", "-1"]).unwrap(),
            "-1 (at 1)"
        );
    }

    #[test]
    fn lexicographic_commands() {
        assert_eq!(run_args(&["first", "b", "a", "c"]).unwrap(), "a");
        assert_eq!(run_args(&["last", "b", "a", "c"]).unwrap(), "c");
    }

    #[test]
    fn position_from_environment() {
        let _guard = env_lock();
        let parse = || Cli::try_parse_from(["favored", "max", "--", "-3", "-1", "-1"]);

        for (value, expected) in [
            ("1", "-1 (at 1)"),
            ("true", "-1 (at 1)"),
            ("yes", "-1 (at 1)"),
            ("0", "-1"),
            ("false", "-1"),
            ("off", "-1"),
        ] {
            std::env::set_var("FAVORED_POSITION", value);
            let cli = parse();
            std::env::remove_var("FAVORED_POSITION");
            let cli = cli.unwrap_or_else(|e| panic!("FAVORED_POSITION={value}: {e}"));
            assert_eq!(run(&cli).unwrap(), expected, "FAVORED_POSITION={value}");
        }
    }
}
