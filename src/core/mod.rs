pub mod output;
pub mod rng;
