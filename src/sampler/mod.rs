mod uniform;

pub use uniform::*;

use crate::core::rng::Rng;

pub trait SamplerT {
    fn count(&self) -> u64;

    /// Inclusive range every sample falls in.
    fn bounds(&self) -> (u32, u32);

    fn reset(&mut self);

    fn next_sample(&mut self, rng: &mut Rng) -> Option<u32>;
}
