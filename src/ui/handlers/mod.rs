//! Handler modules for translating input into game history operations.

mod game_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
