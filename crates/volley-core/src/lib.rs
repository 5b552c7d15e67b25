//! Volley Core - Foundational types for the Volley minigame
//!
//! This crate provides the types that all other Volley crates depend on:
//! - `Color` - RGBA8 framebuffer color
//! - `GameConfig` / `FramePacing` - runtime configuration
//! - Error types and Result alias

mod color;
mod config;
mod error;

pub use color::Color;
pub use config::{FramePacing, GameConfig, MIN_LOGICAL_SIZE};
pub use error::{Result, VolleyError};
