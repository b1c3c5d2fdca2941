mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_init, handle_list, handle_serve};
