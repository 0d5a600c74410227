//! Demon simulator binary.
//!
//! ```bash
//! demonsim --demon DarkTitan --level 80 --iter 100000
//! demonsim -deck decks/forest.txt -numthreads 4 -o result.txt
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    // Load .env file if it exists (for DEMONSIM_DATA_DIR)
    let _ = dotenvy::dotenv();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "demonsim".to_owned());
    demonsim::run(program, args.collect())
}
