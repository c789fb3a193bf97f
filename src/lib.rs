// THEORY:
// This file is the main entry point for the `picture_engine` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (CLI glue, services
// embedding the engine).
//
// The primary goal is to export the `PixelBuffer`, the transform catalog and
// the `Operation` enumeration as the clean, high-level interface for the
// engine. The internal layering (`core_modules`) stays visible for callers
// that want the pure functions directly, while the re-exports below cover the
// common path: decode, transform, encode.

pub mod codec;
pub mod core_modules;
pub mod error;
pub mod operation;
pub mod parallel;

// Re-export the key data structures for the public API.
pub use crate::codec::CodecError;
pub use crate::core_modules::color::color::Color;
pub use crate::core_modules::pixel_buffer::PixelBuffer;
pub use crate::core_modules::transforms;
pub use crate::error::PictureError;
pub use crate::operation::{FlipAxis, Operation, Rotation};
pub use crate::parallel::TransformPool;
