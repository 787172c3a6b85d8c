//! CPU configuration.

/// Member of the 6502 family being emulated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// MOS NMOS 6502 with BCD arithmetic.
    #[default]
    Nmos6502,
    /// Ricoh 2A03 (NES). The D flag can be set but ADC/SBC ignore it.
    Ricoh2A03,
}

impl Variant {
    /// Whether ADC/SBC honour the decimal flag.
    #[must_use]
    pub const fn has_decimal_mode(self) -> bool {
        match self {
            Self::Nmos6502 => true,
            Self::Ricoh2A03 => false,
        }
    }
}

/// CPU configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Family member. Defaults to NMOS 6502.
    pub variant: Variant,
    /// Seed for the RNG bound by `CPU::configure_rng`. `None` seeds from the
    /// operating system.
    pub rng_seed: Option<u64>,
}

impl CpuConfig {
    /// Returns the config with `variant` replaced.
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns the config with a fixed RNG seed.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
