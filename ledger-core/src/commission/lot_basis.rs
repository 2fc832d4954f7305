//! Lot meter basis sampling
//!
//! A LOT is billed as a random length within
//! [`LOT_MIN_METERS`, `LOT_MAX_METERS`). The basis is sampled once per unit
//! transition and reused for every recomputation until the next one.

use super::{LOT_MAX_METERS, LOT_MIN_METERS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of meters-per-lot values
pub trait LotMeterSampler {
    /// Draw a basis in `[LOT_MIN_METERS, LOT_MAX_METERS)`
    fn sample(&mut self) -> f64;
}

/// Uniform sampler backed by a [`Rng`]
#[derive(Debug, Clone)]
pub struct RandomLotSampler<R: Rng = StdRng> {
    rng: R,
}

impl RandomLotSampler<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sampler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomLotSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomLotSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LotMeterSampler for RandomLotSampler<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(LOT_MIN_METERS..LOT_MAX_METERS)
    }
}

/// Always returns the same basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLotSampler(pub f64);

impl LotMeterSampler for FixedLotSampler {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

impl<S: LotMeterSampler + ?Sized> LotMeterSampler for &mut S {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<S: LotMeterSampler + ?Sized> LotMeterSampler for Box<S> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// One-off sample from the thread-local generator
pub fn sample_lot_meters() -> f64 {
    rand::thread_rng().gen_range(LOT_MIN_METERS..LOT_MAX_METERS)
}
