//! Volley - a minimal desktop arcade shooter
//!
//! Wires the runtime's fixed-timestep loop and state machine to a winit
//! window, rendering each state into the software framebuffer.

mod app;
pub mod states;

pub use app::GameApp;
