//! CLI entrypoint for pwd-guard

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pwd_guard::{
    BreachLookupResult, PasswordToolkit, UsageSnapshot, UsageStats, recommend,
};
use secrecy::{ExposeSecret, SecretString};
use std::io::{BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwd-guard", version, about = "Generate, score and breach-check passwords")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// File the usage counters are kept in
    #[arg(long, env = "PWD_GUARD_STATS", default_value = "password_stats.json", global = true)]
    stats_file: PathBuf,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random password
    Generate {
        #[arg(short, long, default_value_t = 16)]
        length: usize,
        /// Leave symbols out of the character pool
        #[arg(long)]
        no_symbols: bool,
        /// Keep look-alike characters (0 O 1 l I |)
        #[arg(long)]
        allow_ambiguous: bool,
    },
    /// Score a password and print recommendations
    Analyze {
        /// Password to score; prompted for (or read from stdin) when omitted
        password: Option<String>,
    },
    /// Check a password against the breach corpus
    Breach {
        /// Password to look up; prompted for (or read from stdin) when omitted
        password: Option<String>,
    },
    /// Print usage counters
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let loaded = load_stats(&cli.stats_file);
    let usage = Arc::new(UsageStats::from_snapshot(loaded.clone().unwrap_or_default()));
    let toolkit = PasswordToolkit::from_env()
        .context("failed to initialise password toolkit")?
        .with_usage(usage.clone());

    match cli.command {
        Command::Generate {
            length,
            no_symbols,
            allow_ambiguous,
        } => {
            let password = toolkit.generate(length, !no_symbols, !allow_ambiguous)?;
            let stats = toolkit.analyze(&password)?;
            println!("{}", password.expose_secret());
            println!("Strength: {} ({}/100)", stats.strength_label, stats.strength_score);
        }
        Command::Analyze { password } => {
            let password = read_password(password)?;
            let stats = toolkit.analyze(&password)?;

            println!("Length:     {}", stats.length);
            println!("Uppercase:  {}", yes_no(stats.has_upper));
            println!("Lowercase:  {}", yes_no(stats.has_lower));
            println!("Digits:     {}", yes_no(stats.has_digits));
            println!("Special:    {}", yes_no(stats.has_special));
            println!("Common:     {}", yes_no(stats.is_common));
            println!("Strength:   {} ({}/100)", stats.strength_label, stats.strength_score);

            let advice = recommend(&stats);
            if !advice.is_empty() {
                println!();
                println!("Recommendations:");
                for item in advice {
                    println!("  - {item}");
                }
            }
        }
        Command::Breach { password } => {
            let password = read_password(password)?;
            match toolkit.check_breach(&password).await {
                BreachLookupResult::Found(count) => {
                    println!("Password found in {count} breaches - do not use it")
                }
                BreachLookupResult::NotFound => println!("Password not found in known breaches"),
                BreachLookupResult::Unknown(reason) => {
                    println!("Could not verify password: {reason}")
                }
            }
        }
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&usage.snapshot())?);
        }
    }

    // Never overwrite a stats file that exists but could not be parsed.
    if loaded.is_some() {
        save_stats(&cli.stats_file, &usage.snapshot());
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Uses the argument when given, otherwise a hidden prompt on a terminal or
/// the first line of stdin when piped.
fn read_password(arg: Option<String>) -> Result<SecretString> {
    let password = match arg {
        Some(password) => password,
        None if std::io::stdin().is_terminal() => {
            inquire::Password::new("Password:")
                .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                .without_confirmation()
                .prompt()?
        }
        None => first_line(std::io::stdin().lock())?,
    };

    if password.is_empty() {
        bail!("no password given");
    }
    Ok(SecretString::new(password.into()))
}

fn first_line<R: BufRead>(reader: R) -> Result<String> {
    Ok(reader.lines().next().transpose()?.unwrap_or_default())
}

/// A missing file starts from zero. `None` means the file exists but is
/// unusable, and must be left alone.
fn load_stats(path: &Path) -> Option<UsageSnapshot> {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("stats file {:?} is unreadable, not updating it: {}", path, e);
                None
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no stats file at {:?}", path);
            Some(UsageSnapshot::default())
        }
        Err(e) => {
            warn!("cannot read stats file {:?}, not updating it: {}", path, e);
            None
        }
    }
}

fn save_stats(path: &Path, snapshot: &UsageSnapshot) {
    let result = serde_json::to_string_pretty(snapshot)
        .map_err(anyhow::Error::from)
        .and_then(|json| std::fs::write(path, json).map_err(anyhow::Error::from));
    if let Err(e) = result {
        warn!("failed to save stats to {:?}: {}", path, e);
    }
}
