pub(crate) mod agent;
pub(crate) mod error;
pub(crate) mod host;
pub mod maze;
pub(crate) mod position;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        host::{Host, HostOptions, Summary},
        maze::*,
        position::*,
    };
}
