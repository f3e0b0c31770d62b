//! SSD1306 OLED Display Driver
//!
//! A software rendering engine and I2C driver for SSD1306-based monochrome
//! OLED modules (128x64, page-organized RAM).
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - In-memory framebuffer with dirty-region tracking
//! - Rectangle fill/outline rasterization with signed-coordinate clipping
//! - Built-in 5x8 font with page-aligned and arbitrary-pixel text placement
//! - Automatic or deferred (manual) flushing of touched byte spans
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_page::{Builder, Display, I2cInterface, UpdateMode};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(i2c, config.address);
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init();
//!
//! // Draw into the framebuffer, then present everything at once.
//! let _ = display.fill_rect(0, 0, 127, 15, false);
//! display.set_cursor(2, 0);
//! let _ = display.print_str("HELLO", true);
//! let _ = display.print_str_at("bit-split text", 5, 20, false);
//! let _ = display.flush();
//!
//! // Or let every operation flush its own dirty region.
//! display.set_update_mode(UpdateMode::Auto);
//! let _ = display.draw_rect(10, 30, 60, 50, false);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations and dirty-region dispatch
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 ASCII font
pub mod font;
/// In-memory framebuffer mirroring the display RAM
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Rectangle rasterization
pub mod rect;
/// Glyph blitting and string measurement
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{ALT_I2C_ADDRESS, Builder, Config, DEFAULT_I2C_ADDRESS};
pub use display::{Display, UpdateMode};
pub use error::{BuilderError, Error};
pub use framebuffer::{BUFFER_SIZE, COLUMNS, Framebuffer, PAGES, ROWS, Region};
pub use interface::{CONTROL_COMMAND, CONTROL_DATA, DisplayInterface, I2cInterface};
pub use text::{TextExtent, measure_str};
