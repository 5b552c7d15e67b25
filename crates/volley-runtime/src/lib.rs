//! Volley Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `GameClock` — fixed-timestep accumulator driving the update rate
//! - `FpsCounter` — rolling one-second measurement of achieved frame rate
//! - `Button` — stable input enumeration mapped from platform key codes
//! - `State` / `StateId` / `StateMachine` — the game's behavioral modes

mod clock;
mod fps;
mod input;
mod state;

pub use clock::GameClock;
pub use fps::FpsCounter;
pub use input::{map_key, Button};
pub use state::{State, StateId, StateMachine};
