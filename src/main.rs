mod cli;
mod output;

use std::{
    fs::File,
    io::{self, BufReader, Write},
};

use anyhow::Context;
use clap::Parser;
use log::info;
use model::Model;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    let options = args.convert_options();

    let model = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open file {}", path.display()))?;
            Model::parse(BufReader::new(file), options)
                .with_context(|| format!("Could not convert {}", path.display()))?
        }
        None => Model::parse(io::stdin().lock(), options).context("Could not convert stdin")?,
    };

    // Nothing is written until the whole output is rendered.
    let mut rendered = Vec::new();
    output::write_model(&mut rendered, &model, &args.format_options())?;

    match args.output_path() {
        Some(path) => {
            File::create(path)
                .and_then(|mut file| file.write_all(&rendered))
                .with_context(|| format!("Could not write file {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout()
            .lock()
            .write_all(&rendered)
            .context("Could not write to stdout")?,
    }
    Ok(())
}
