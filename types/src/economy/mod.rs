mod account;
mod codec;
mod constants;
mod cooldown;
mod game;
mod leaderboard;

pub use account::*;
pub use codec::{command_encode_size, read_command, write_command};
pub use constants::*;
pub use cooldown::*;
pub use game::*;
pub use leaderboard::*;
