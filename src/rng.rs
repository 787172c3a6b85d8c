//! Pseudo-random byte source bound to one memory address.
//!
//! While bound, every CPU read of that address returns a fresh byte instead of
//! the stored cell. Writes still land in the cell.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random byte generator attached to a single address.
#[derive(Debug, Clone)]
pub struct RngSource {
    address: u16,
    rng: StdRng,
}

impl RngSource {
    /// Binds a generator seeded from operating system entropy.
    pub fn from_entropy(address: u16) -> Self {
        Self {
            address,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Binds a deterministic generator.
    pub fn seeded(address: u16, seed: u64) -> Self {
        Self {
            address,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Address this source shadows.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Draws a byte uniformly from 0-255.
    pub fn next_byte(&mut self) -> u8 {
        self.rng.random()
    }
}
