//! The game's state catalog: title menu and active play

mod menu;
mod play;

pub use menu::MenuState;
pub use play::PlayState;
