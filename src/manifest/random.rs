use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::screen::ContentItem;

/// Source of the per-request randomness in a manifest.
pub trait RandomSource: Send + Sync {
    /// Reorder `items` into a uniformly random permutation.
    fn shuffle(&self, items: &mut [ContentItem]);

    /// Four-digit suffix for the manifest id (1000..=9999).
    fn manifest_suffix(&self) -> u16;
}

/// Process-wide thread-local RNG, unseeded.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn shuffle(&self, items: &mut [ContentItem]) {
        items.shuffle(&mut rand::thread_rng());
    }

    fn manifest_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(1000..=9999)
    }
}

/// Deterministic source for tests: reverses playlists, fixed suffix.
#[cfg(test)]
pub struct ReverseRandom;

#[cfg(test)]
impl RandomSource for ReverseRandom {
    fn shuffle(&self, items: &mut [ContentItem]) {
        items.reverse();
    }

    fn manifest_suffix(&self) -> u16 {
        4242
    }
}
