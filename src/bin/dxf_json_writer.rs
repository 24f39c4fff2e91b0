//! Convert a JSON drawing description to DXF on standard output.
//!
//! Usage: `dxf_json_writer <dxf_json_file>`

use anyhow::{Context, Result};
use dxf_json_writer::{Document, DxfWriter};
use std::io::{self, BufWriter};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "Usage: dxf_json_writer <dxf_json_file>";

fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        println!("{}", USAGE);
        return Ok(());
    };

    init_logging();

    let document = Document::from_file(&path)
        .with_context(|| format!("failed to read drawing from {}", path))?;
    document
        .validate()
        .with_context(|| format!("invalid drawing in {}", path))?;

    let stdout = io::stdout();
    let notifications = DxfWriter::new(&document)
        .write_to_writer(BufWriter::new(stdout.lock()))
        .context("failed to write DXF output")?;

    for notification in notifications.iter() {
        tracing::warn!("{}", notification);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
