//! Duffle composites a source RGBA image over a backdrop using the twelve
//! classical Porter-Duff operators, optionally mixing the two colors first
//! with a W3C blend mode.
//!
//! # Pipeline overview
//!
//! 1. **Select**: pick a [`CompositeOp`] and optionally a [`BlendMode`],
//!    by value or by name via `FromStr`
//! 2. **Draw**: [`Compositor::draw`] walks the output rectangle and writes a
//!    straight-alpha [`image::RgbaImage`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the engine**: decoding and encoding image files, demo
//!   content and CLI glue live in the `duffle` binary, which feeds pixel
//!   buffers in and out of this crate.
//! - **Straight alpha at the boundary**: buffers are non-premultiplied
//!   RGBA8; the per-pixel math runs on normalized `f64` channels,
//!   premultiplies by coverage, and un-premultiplies on the way out.
//! - **Stateless draws**: a [`Compositor`] is a plain `Copy` value read-only
//!   during the pixel loop, so rows composite in parallel without locks.
#![forbid(unsafe_code)]

mod blend;
mod compose;
mod draw;
mod foundation;

pub use blend::BlendMode;
pub use compose::CompositeOp;
pub use draw::Compositor;
pub use foundation::color::{Pixel, Rgb};
pub use foundation::error::{DuffleError, DuffleResult};
