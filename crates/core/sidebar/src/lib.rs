#[macro_use]
extern crate log;

mod categories;
mod display;
mod memo;
mod snapshot;
mod sort;
mod unreads;

pub use categories::*;
pub use display::*;
pub use memo::*;
pub use snapshot::*;
pub use sort::*;
pub use unreads::*;
