pub mod depth;
pub mod scores;

pub use depth::*;
pub use scores::{consts::*, ensure_finite, Score};

/// The deepest recursion a search may reach, measured as the configured depth times the number of agents.
pub const MAXIMUM_FRAMES: usize = 1024;
