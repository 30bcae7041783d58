pub mod builder;
pub mod fallback;
pub mod logo;
pub mod playlist;
pub mod random;

pub use builder::ManifestBuilder;
pub use random::{RandomSource, ThreadRandom};
