//! Command line definition.
//!
//! Long options take the double-dash form. The historic single-dash spelling
//! (`-level 80`, `-numthreads 4`) is still accepted: [`normalize_args`]
//! rewrites those words before clap sees them.

use std::path::PathBuf;

use clap::Parser;

/// Statistical demon battle simulator
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "demonsim", version, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Player level; sets the starting hp from the level table
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=150))]
    pub level: Option<i32>,

    /// Starting hp, overriding the level table
    #[arg(long)]
    pub hp: Option<i32>,

    /// Number of fights to simulate
    #[arg(long = "iter")]
    pub iterations: Option<u32>,

    /// Boss to fight
    #[arg(long, visible_alias = "boss")]
    pub demon: Option<String>,

    /// Narrate every fight (forces one thread, 10 fights by default)
    #[arg(long)]
    pub debug: bool,

    /// Narrate every fight including turn headers and runes
    #[arg(long)]
    pub verbose: bool,

    /// Print the damage of every fight (forces one thread, 200 fights by default)
    #[arg(long)]
    pub showdamage: bool,

    /// Resolve concentrate at its average instead of rolling
    #[arg(long)]
    pub avgconcentrate: bool,

    /// Number of worker threads (1-64)
    #[arg(long)]
    pub numthreads: Option<usize>,

    /// Round ceiling for one fight
    #[arg(long)]
    pub maxrounds: Option<i32>,

    /// Round whose reachability is reported
    #[arg(long)]
    pub printround: Option<i32>,

    /// Deck file
    #[arg(long)]
    pub deck: Option<PathBuf>,

    /// Card catalogue file
    #[arg(long)]
    pub cards: Option<PathBuf>,

    /// Write the report to FILE, truncating it
    #[arg(short = 'o', long, value_name = "FILE", overrides_with = "append")]
    pub output: Option<PathBuf>,

    /// Append the report to FILE
    #[arg(short = 'a', long, value_name = "FILE", overrides_with = "output")]
    pub append: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file (default: config.toml in the data directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding cards.txt, deck.txt and the optional files
    /// (default: $DEMONSIM_DATA_DIR or the current directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Options that may be spelled with a single dash.
const LEGACY_OPTIONS: &[&str] = &[
    "level",
    "hp",
    "iter",
    "demon",
    "boss",
    "debug",
    "verbose",
    "showdamage",
    "avgconcentrate",
    "numthreads",
    "maxrounds",
    "printround",
    "deck",
    "cards",
    "output",
    "append",
    "seed",
];

/// Rewrites single-dash long options (`-level`) to `--level`. Option names
/// match case-insensitively; everything else passes through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.strip_prefix('-') {
            Some(name) if !name.starts_with('-') => {
                let lower = name.to_ascii_lowercase();
                if LEGACY_OPTIONS.contains(&lower.as_str()) {
                    format!("--{lower}")
                } else {
                    arg
                }
            }
            _ => arg,
        })
        .collect()
}

/// Parses `program` + `defaults` + `args`, so anything on the real command
/// line overrides the defaults file.
pub fn parse_layered(
    program: String,
    defaults: Vec<String>,
    args: Vec<String>,
) -> Result<Cli, clap::Error> {
    let argv = std::iter::once(program)
        .chain(normalize_args(defaults))
        .chain(normalize_args(args));
    Cli::try_parse_from(argv)
}
