//! Volley Render - Software framebuffer and presentation
//!
//! Drawing happens on the CPU into a fixed-size logical-resolution `Frame`;
//! presentation uploads that buffer to a texture and blits it onto the
//! window surface with nearest-neighbor scaling:
//! - `Frame` — the RGBA8 pixel buffer with clear/rect/text primitives
//! - `font` — built-in 5×7 bitmap glyphs used by `Frame::draw_text`
//! - `RenderContext` — wgpu device, queue, and window surface
//! - `BlitPipeline` — fullscreen-triangle pass that presents a `Frame`

pub mod font;

mod blit;
mod context;
mod frame;

pub use blit::BlitPipeline;
pub use context::{RenderContext, RenderError};
pub use frame::Frame;
