mod core;
mod replay;

pub use core::{cmd_list, cmd_tags};
pub use replay::cmd_replay;
