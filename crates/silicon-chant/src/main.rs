//! `sc`: the silicon chant terminal.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use silicon_chant::{repl, Session};
use silicon_chant_engine::ChantEngine;

fn main() -> Result<()> {
    // Diagnostics go to stderr so a stdout chant stays byte-clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(ChantEngine::new());
    // No persistent stdin lock: the disk chant's confirmation prompt reads
    // stdin on its own between lines.
    let input = io::BufReader::new(io::stdin());
    repl::run(&mut session, input, &mut io::stdout())?;
    Ok(())
}
