//! Seedable pseudo-random noise source.

/// Xorshift32 noise generator.
///
/// Deterministic for a given seed, cheap enough for per-sample use, and
/// plenty for test-signal noise. Not a cryptographic generator.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: u32,
}

impl NoiseSource {
    /// Create a noise source from a seed. A zero seed is remapped (xorshift
    /// has a fixed point at zero).
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x12345678 } else { seed },
        }
    }

    /// Next raw xorshift word.
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Next sample, uniform in [-1.0, 1.0].
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        // The word i32::MIN maps a hair below -1; clamp to keep the
        // documented bound exact.
        let sample = f64::from(self.next_u32() as i32) / f64::from(i32::MAX);
        if sample < -1.0 { -1.0 } else { sample }
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(0x12345678)
    }
}
