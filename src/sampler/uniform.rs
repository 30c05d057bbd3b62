use crate::core::rng::Rng;

use super::SamplerT;

pub struct UniformSampler {
    count: u64,
    low: u32,
    high: u32,
    curr_index: u64,
}

impl UniformSampler {
    pub const FOUR_SIDED_BOUNDS: (u32, u32) = (1, 4);

    pub fn new(count: u64, low: u32, high: u32) -> Self {
        assert!(low <= high, "empty sample range {}..={}", low, high);
        Self {
            count,
            low,
            high,
            curr_index: 0,
        }
    }

    pub fn four_sided(count: u64) -> Self {
        let (low, high) = Self::FOUR_SIDED_BOUNDS;
        Self::new(count, low, high)
    }
}

impl SamplerT for UniformSampler {
    fn count(&self) -> u64 {
        self.count
    }

    fn bounds(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    fn reset(&mut self) {
        self.curr_index = 0;
    }

    fn next_sample(&mut self, rng: &mut Rng) -> Option<u32> {
        if self.curr_index < self.count {
            self.curr_index += 1;
            Some(rng.uniform_int(self.low, self.high))
        } else {
            None
        }
    }
}
