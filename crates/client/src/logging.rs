//! Logging setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::settings::Narration;

/// Installs the stderr subscriber. `RUST_LOG` is honoured; narration flags
/// add a directive for the battle engine on top of it.
pub fn setup_logging(narration: Narration) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match narration {
        Narration::Off => {}
        Narration::Debug => filter = filter.add_directive("battle_core=debug".parse()?),
        Narration::Verbose => filter = filter.add_directive("battle_core=trace".parse()?),
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if narration == Narration::Off {
        builder.init();
    } else {
        // Battle narration reads like a transcript.
        builder.without_time().with_target(false).with_level(false).init();
    }
    Ok(())
}
