// THEORY:
// Every failure the engine can surface is enumerated here. The taxonomy is
// deliberately small: all errors are unrecoverable at the point of detection,
// the failing operation aborts synchronously without producing a buffer, and
// reporting is the caller's job. There is nothing transient to retry since all
// inputs are already in memory, so no error carries retry semantics.

use thiserror::Error;

/// Failures surfaced by the pixel buffer and the transform catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PictureError {
    /// A negative (or u32-overflowing) dimension was supplied to buffer
    /// construction.
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// A pixel coordinate outside the buffer's extent.
    #[error("pixel ({x},{y}) lies outside the {width}x{height} buffer")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Malformed transform parameters, such as an empty input list for blend
    /// or mosaic, a zero tile size, or a wrong input arity at dispatch.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation name that is not part of the catalog. Unrecognized input
    /// is an explicit error, never a silent no-op.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// The parallel transform pool is no longer accepting work. Not part of
    /// the core taxonomy; only the optional executor produces it.
    #[error("transform worker pool unavailable")]
    PoolUnavailable,
}
