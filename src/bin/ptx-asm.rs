use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Translate a PTX kernel into fixed-width binary words"
)]
struct Opts {
    /// Input PTX file (one instruction or directive per line)
    #[arg(value_name = "PTXFILE", default_value = "kernel.ptx")]
    input: PathBuf,
    /// Output listing (one annotated binary word per line)
    #[arg(value_name = "HEXFILE", default_value = "gpu_program.hex")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)?;
    let mut out = BufWriter::new(fs::File::create(&opts.output)?);
    ptxasm_rs::translate(&text, &mut out)?;
    out.flush()?;

    tracing::info!("translation finished, wrote {}", opts.output.display());
    Ok(())
}
