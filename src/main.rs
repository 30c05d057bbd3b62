use anyhow::*;
use std::path::PathBuf;
use structopt::StructOpt;

mod core;
mod generator;
mod sampler;

use crate::core::rng::Rng;
use generator::{Generator, OutputConfig};
use sampler::UniformSampler;

/// Writes uniformly distributed integers in [1, 4] to a text file.
#[derive(StructOpt)]
#[structopt(name = "four-sided-gen")]
struct Opt {
    /// Number of samples to generate
    num_samples: u64,

    /// File to write, created or truncated
    #[structopt(parse(from_os_str))]
    output_file: PathBuf,

    /// Seed for the random engine [default: current Unix time in seconds]
    #[structopt(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();

    let seed = match opt.seed {
        Some(seed) => seed,
        None => Rng::time_seed()?,
    };
    log::info!("seed: {}", seed);
    let mut rng = Rng::new(seed);

    let config = OutputConfig {
        output_path: opt.output_file,
    };
    let mut generator = Generator::new(UniformSampler::four_sided(opt.num_samples));
    let written = generator.generate(&mut rng, &config)?;

    println!(
        "Generated {} samples in {}",
        written,
        config.output_path.display()
    );
    Ok(())
}
