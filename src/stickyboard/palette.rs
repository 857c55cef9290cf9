use crate::model::{Color, PALETTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Uniform random draw from [`PALETTE`] for new notes.
///
/// The random source is owned here so tests and reproducible boards can
/// seed it.
pub struct ColorPicker {
    rng: RefCell<StdRng>,
}

impl ColorPicker {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    pub fn pick(&self) -> Color {
        let idx = self.rng.borrow_mut().random_range(0..PALETTE.len());
        PALETTE[idx]
    }

    pub fn palette(&self) -> &'static [Color] {
        &PALETTE
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
