use rand::SeedableRng;

pub struct Rng {
    rng: rand::rngs::SmallRng,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    /// Whole seconds since the Unix epoch. Two runs started within the same
    /// second get the same seed.
    pub fn time_seed() -> anyhow::Result<u64> {
        let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH)?;
        Ok(now.as_secs())
    }

    pub fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        rand::Rng::gen_range(&mut self.rng, low..=high)
    }
}
