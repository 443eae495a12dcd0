//! spookify -- Halloween name generator.
//!
//! Usage: spookify [OPTIONS] [NAME]...
//! With no name, starts an interactive prompt.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use spookify::output::{self, OutputFormat};
use spookify::wordlist::DEFAULT_LIST;
use spookify::{Metric, Spookifier, SpookifierConfig, WordList};

/// Spookify - splice spooky words into names
#[derive(Parser, Debug)]
#[command(name = "spookify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a themed pun on a name")]
struct Args {
    /// Name (or any phrase) to pun on; omit to start the interactive prompt
    name: Vec<String>,

    /// Embedded word list to use (unknown names fall back to "spooky")
    #[arg(short, long, env = "SPOOKIFY_LIST", default_value = DEFAULT_LIST)]
    list: String,

    /// Load the word list from a file instead (JSON array or one word per line)
    #[arg(short, long, env = "SPOOKIFY_WORD_LIST", value_name = "PATH")]
    word_list: Option<PathBuf>,

    /// Edit distance used for scoring
    #[arg(short, long, value_enum, default_value_t = Metric::DamerauLevenshtein)]
    metric: Metric,

    /// Seed for reproducible tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Keep word-list order when breaking ties (deterministic output)
    #[arg(long, conflicts_with = "seed")]
    no_shuffle: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Print the names of the embedded word lists and exit
    #[arg(long)]
    list_builtin: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    /// Default log filter when `RUST_LOG` is unset.
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only puns.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();

    if args.list_builtin {
        for name in WordList::builtin_names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let word_list = match &args.word_list {
        Some(path) => WordList::from_path(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => WordList::named_or_default(&args.list)?,
    };

    let config = SpookifierConfig {
        metric: args.metric,
        shuffle: !args.no_shuffle,
        seed: args.seed,
    };
    let mut spookifier = Spookifier::new(word_list, &config);

    if args.name.is_empty() {
        let mut stdin = std::io::stdin().lock();
        return spookify::run_repl(&mut spookifier, &mut stdin, &mut stdout, args.format);
    }

    let outcome = spookifier.pun(&args.name.join(" "));
    writeln!(stdout, "{}", output::render(&outcome, args.format)?)?;
    Ok(())
}
