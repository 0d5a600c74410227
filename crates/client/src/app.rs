//! Composition root: settings → content → simulation → report.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_runtime::Simulation;
use tracing::info;

use crate::cli;
use crate::logging;
use crate::report::{self, Header};
use crate::settings::{self, DATA_DIR_ENV, OutputTarget, Settings};

/// Runs the simulator for `args` (without the program name).
pub fn run(program: String, args: Vec<String>) -> Result<()> {
    // defaults.txt lives in the data directory, which the command line may
    // choose, so parse once to find it.
    let first = cli::parse_layered(program.clone(), Vec::new(), args.clone())
        .unwrap_or_else(|e| e.exit());
    let factory = ContentFactory::new(settings::data_dir(
        &first,
        std::env::var(DATA_DIR_ENV).ok(),
    ));

    let defaults = factory.load_default_args()?;
    let cli = if defaults.is_empty() {
        first
    } else {
        cli::parse_layered(program, defaults, args).unwrap_or_else(|e| e.exit())
    };

    let file_settings = factory.load_settings(cli.config.as_deref())?;
    let settings = Settings::resolve(file_settings, &cli)?;
    logging::setup_logging(settings.narration)?;

    let mut out = open_output(&settings.output)?;

    let catalogue = factory.load_catalogue(settings.cards.as_deref())?;
    let entries = factory.load_deck(settings.deck.as_deref())?;
    let loadout = catalogue.resolve(&settings.demon, &entries)?;
    info!(
        demon = loadout.boss.name(),
        cards = loadout.deck.len(),
        runes = loadout.runes.len(),
        hp = settings.hp,
        data_dir = %factory.data_dir().display(),
        "loadout ready"
    );

    let run = Simulation::new(settings.sim).run(&loadout, settings.hp)?;

    let header = Header::new(
        &loadout,
        settings.level,
        settings.hp,
        settings.sim.rules.milestone_round,
    );
    report::write_damages(&mut out, &run.damages)?;
    report::write_report(&mut out, &header, &run)?;
    out.flush()?;
    Ok(())
}

fn open_output(target: &OutputTarget) -> Result<Box<dyn Write>> {
    let (path, file) = match target {
        OutputTarget::Stdout => return Ok(Box::new(io::stdout().lock())),
        OutputTarget::Truncate(path) => (path, File::create(path)),
        OutputTarget::Append(path) => (
            path,
            OpenOptions::new().create(true).append(true).open(path),
        ),
    };
    let file = file.with_context(|| format!("Couldn't open output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
