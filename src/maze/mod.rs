pub(crate) mod direction;
pub(crate) mod layout;
mod printers;
pub(crate) mod state;

pub use direction::Direction;
pub use layout::{Layout, SMALL_CLASSIC};
pub use state::{consts, Ghost, Maze, Outcome};

use crate::prelude::*;
