use crate::{config::Config, gateways};
use anyhow::Result;
use clap::Parser;
use geoenrich_core::{
    entities::{AddressColumn, ErrorPolicy},
    observer::LogObserver,
    pipeline::Pipeline,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name or zero-based index of the address column
    #[arg(long, value_name = "NAME|INDEX")]
    pub address_column: Option<AddressColumn>,

    /// Write rows without coordinates if the geocoding service fails
    #[arg(long)]
    pub skip_failed: bool,

    /// Report the progress every N rows (0 = never)
    #[arg(long, value_name = "N")]
    pub progress_interval: Option<u64>,

    /// CSV file to read
    pub input: Option<PathBuf>,

    /// CSV file to write
    pub output: Option<PathBuf>,
}

impl Args {
    fn apply(self, cfg: &mut Config) {
        let Self {
            address_column,
            skip_failed,
            progress_interval,
            input,
            output,
            ..
        } = self;
        if let Some(input) = input {
            cfg.files.input = input;
        }
        if let Some(output) = output {
            cfg.files.output = output;
        }
        if let Some(address_column) = address_column {
            cfg.pipeline.address_column = address_column;
        }
        if let Some(progress_interval) = progress_interval {
            cfg.pipeline.progress_interval = progress_interval;
        }
        if skip_failed {
            cfg.pipeline.on_resolve_error = ErrorPolicy::Skip;
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.apply(&mut cfg);

    let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
    let Config {
        files, pipeline, ..
    } = cfg;
    log::debug!("Address column: {}", pipeline.address_column);

    let pipeline = Pipeline::new(pipeline, gateway, LogObserver);
    pipeline.run(&files.input, &files.output)?;
    Ok(())
}
