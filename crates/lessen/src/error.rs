//! Host-facing error types.
//!
//! Conversion itself is infallible: malformed CSS degrades by omission
//! rather than failing (see [`crate::parser`]). These errors cover what can
//! go wrong around a conversion, in hosts that read input and write output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input was empty or whitespace-only, so there is nothing to
    /// convert. Hosts check this before invoking the pipeline.
    #[error("input is empty")]
    EmptyInput,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
