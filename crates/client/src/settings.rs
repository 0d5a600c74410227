//! Effective run settings.
//!
//! Layers, lowest precedence first: built-in defaults, `config.toml`, then
//! the command line (which already carries `defaults.txt` in front of the
//! real arguments).

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use battle_content::SimSettings;
use battle_core::{BattleConfig, MAX_LEVEL, hp_for_level};
use battle_runtime::SimConfig;

use crate::cli::Cli;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "DEMONSIM_DATA_DIR";

pub const DEFAULT_LEVEL: i32 = 61;
pub const DEFAULT_DEMON: &str = "DarkTitan";
/// Fights played by default when narrating.
pub const DEBUG_ITERATIONS: u32 = 10;
/// Fights played by default when listing per-fight damage.
pub const SHOW_DAMAGE_ITERATIONS: u32 = 200;

/// Where the report goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Truncate(PathBuf),
    Append(PathBuf),
}

/// How much of each fight to narrate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Narration {
    #[default]
    Off,
    Debug,
    Verbose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub level: i32,
    pub hp: i32,
    pub demon: String,
    pub deck: Option<PathBuf>,
    pub cards: Option<PathBuf>,
    pub narration: Narration,
    pub show_damage: bool,
    pub output: OutputTarget,
    pub sim: SimConfig,
}

impl Settings {
    pub fn resolve(file: SimSettings, cli: &Cli) -> Result<Self> {
        let level = cli.level.or(file.level).unwrap_or(DEFAULT_LEVEL);
        let Some(level_hp) = hp_for_level(level) else {
            bail!("Bad level: {level} (1-{MAX_LEVEL})");
        };
        // An explicit hp wins over the level table, but a level given on the
        // command line beats an hp from the settings file.
        let hp = match (cli.hp, cli.level) {
            (Some(hp), _) => hp,
            (None, Some(_)) => level_hp,
            (None, None) => file.hp.unwrap_or(level_hp),
        };

        let narration = if cli.verbose {
            Narration::Verbose
        } else if cli.debug {
            Narration::Debug
        } else {
            Narration::Off
        };
        let show_damage = cli.showdamage;

        let default_iterations = match (narration, show_damage) {
            (Narration::Off, false) => SimConfig::DEFAULT_ITERATIONS,
            (Narration::Off, true) => SHOW_DAMAGE_ITERATIONS,
            _ => DEBUG_ITERATIONS,
        };
        let iterations = cli.iterations.or(file.iterations).unwrap_or(default_iterations);

        let workers = if narration != Narration::Off || show_damage {
            1
        } else {
            cli.numthreads
                .or(file.threads)
                .unwrap_or(SimConfig::DEFAULT_WORKERS)
        };

        let rules = BattleConfig::new()
            .with_max_rounds(
                cli.maxrounds
                    .or(file.max_rounds)
                    .unwrap_or(BattleConfig::DEFAULT_MAX_ROUNDS),
            )
            .with_milestone_round(
                cli.printround
                    .or(file.print_round)
                    .unwrap_or(BattleConfig::DEFAULT_MILESTONE_ROUND),
            )
            .with_average_concentrate(cli.avgconcentrate || file.avg_concentrate.unwrap_or(false));

        let sim = SimConfig::default()
            .with_iterations(iterations)
            .with_workers(workers)
            .with_seed(cli.seed.or(file.seed))
            .with_record_damage(show_damage)
            .with_rules(rules);

        let output = match (&cli.output, &cli.append) {
            (Some(path), _) => OutputTarget::Truncate(path.clone()),
            (None, Some(path)) => OutputTarget::Append(path.clone()),
            (None, None) => OutputTarget::Stdout,
        };

        Ok(Self {
            level,
            hp,
            demon: cli
                .demon
                .clone()
                .or(file.demon)
                .unwrap_or_else(|| DEFAULT_DEMON.to_owned()),
            deck: cli.deck.clone().or(file.deck),
            cards: cli.cards.clone().or(file.cards),
            narration,
            show_damage,
            output,
            sim,
        })
    }
}

/// Data directory: `--data-dir`, then `$DEMONSIM_DATA_DIR`, then the
/// current directory.
pub fn data_dir(cli: &Cli, env_value: Option<String>) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| Path::new(".").to_path_buf())
}
