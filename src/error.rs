//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! Geometry is never an error source: out-of-range coordinates, columns, and
//! pages are clamped or silently ignored by every drawing operation, so the
//! only runtime failure a [`crate::Display`] can report is a transport
//! failure from its [`DisplayInterface`] implementation.
//!
//! ## Example
//!
//! ```
//! use ssd1306_page::{Builder, BuilderError};
//!
//! let result = Builder::new().address(0xFF).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface (I2C transport) error
    ///
    /// Wraps the underlying error from the [`DisplayInterface`]
    /// implementation. The framebuffer keeps its contents when this is
    /// returned, so the caller may retry with another flush.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is
/// created.
#[derive(Debug)]
pub enum BuilderError {
    /// The configured I2C address does not fit in 7 bits
    InvalidAddress {
        /// Address that was requested
        address: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress { address } => {
                write!(f, "Invalid I2C address {address:#04X} (must be 7-bit)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
