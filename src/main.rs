use calver::{Clock, FixedClock, PatternError, SystemClock, Version, VersionError};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Level;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Pattern(#[from] PatternError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("Date should be in `YYYY-MM-DD` format: {0}")]
    UnparseableDate(#[from] chrono::ParseError),
}

#[derive(Args, Debug)]
struct DateArg {
    /// Use this date as "today" instead of the current UTC date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,
}

impl DateArg {
    fn to_clock(&self) -> Result<Box<dyn Clock>, CliError> {
        Ok(match &self.date {
            Some(date) => Box::new(date.parse::<FixedClock>()?),
            None => Box::new(SystemClock),
        })
    }
}

/// Parse, validate and increment calendar versions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail to stderr. Repeat for more.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints a new version for today
    New {
        /// The pattern of the version, e.g. `YYYY.0M.0D`
        #[arg(short, long)]
        pattern: String,

        /// The micro counter of the new version
        #[arg(short, long, default_value_t = 1)]
        micro: u64,

        #[command(flatten)]
        date: DateArg,
    },

    /// Prints the version that follows `VERSION`.
    ///
    /// If today is past the date of `VERSION`, the next version is dated today. Otherwise, its
    /// micro counter is incremented.
    Next {
        /// The current version string
        version: String,

        /// The pattern of the version, e.g. `YYYY.0M.0D`
        #[arg(short, long)]
        pattern: String,

        #[command(flatten)]
        date: DateArg,
    },

    /// Validates that a version matches a pattern. Prints `true` and exits with 0 if so, prints
    /// `false` and exits with 1 if not.
    Valid {
        /// The version string to validate
        version: String,

        /// The pattern to validate against
        #[arg(short, long)]
        pattern: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match do_work(cli.command) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

fn do_work(command: Commands) -> Result<Output, CliError> {
    match command {
        Commands::New {
            pattern,
            micro,
            date,
        } => {
            let clock = date.to_clock()?;
            let version = Version::new(&pattern, micro, &clock)?;
            Ok((version.to_string(), 0))
        }
        Commands::Next {
            version,
            pattern,
            date,
        } => {
            let clock = date.to_clock()?;
            let current = Version::parse(&pattern, &version, &clock)?;
            Ok((current.next(&clock).to_string(), 0))
        }
        Commands::Valid { version, pattern } => {
            // an invalid pattern is a usage error, not an invalid version
            calver::validate_pattern(&pattern)?;
            Ok(match Version::parse(&pattern, &version, &SystemClock) {
                Ok(_) => ("true".to_string(), 0),
                Err(e) => {
                    tracing::debug!(error = %e, "version does not match pattern");
                    ("false".to_string(), 1)
                }
            })
        }
    }
}
