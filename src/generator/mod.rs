use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::{
    core::{
        output::{self, SampleFile},
        rng::Rng,
    },
    sampler::SamplerT,
};

pub struct OutputConfig {
    pub output_path: PathBuf,
}

pub struct Generator<S: SamplerT> {
    sampler: S,
}

impl<S: SamplerT> Generator<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Writes the header and every sample to `writer`, returning the number of samples written.
    pub fn write_samples<W: Write>(
        &mut self,
        rng: &mut Rng,
        writer: &mut W,
    ) -> std::io::Result<u64> {
        self.sampler.reset();
        output::write_header(writer, self.sampler.count(), self.sampler.bounds())?;

        let mut written = 0;
        while let Some(value) = self.sampler.next_sample(rng) {
            output::write_sample(writer, value)?;
            written += 1;
        }
        Ok(written)
    }

    pub fn generate(&mut self, rng: &mut Rng, config: &OutputConfig) -> anyhow::Result<u64> {
        let mut file = SampleFile::create(&config.output_path)?;
        let written = self
            .write_samples(rng, file.writer())
            .with_context(|| format!("Error writing to file: {}", config.output_path.display()))?;
        file.finish()?;

        log::info!("{} samples written to '{}'", written, config.output_path.display());
        Ok(written)
    }
}
