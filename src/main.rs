use ::log::*;
use anyhow::Context;
use propdump::{config, log, properties::PropertyMap, report};
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let table = PropertyMap::from_env();
    let config = config::Builder::new().apply_env(&table)?.build()?;

    log::setup_logging(&config)?;
    config.debug_values();
    debug!("Environment snapshot holds {} properties", table.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::run(config.prefix(), &table, &mut out).context("Failed to write property report")?;
    out.flush().context("Failed to flush property report")?;

    Ok(())
}
