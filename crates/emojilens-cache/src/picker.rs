//! Uniform random choice among candidate glyphs, from an explicit generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seedable glyph chooser. Production seeds from OS entropy; tests pass a seed.
#[derive(Debug, Clone)]
pub struct GlyphPicker {
    rng: StdRng,
}

impl GlyphPicker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// `seed` when given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Pick one non-empty candidate uniformly. `None` if there is none.
    pub fn pick(&mut self, candidates: &[String]) -> Option<String> {
        let usable: Vec<&String> = candidates.iter().filter(|g| !g.is_empty()).collect();
        usable.choose(&mut self.rng).map(|g| (*g).clone())
    }
}

impl Default for GlyphPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
