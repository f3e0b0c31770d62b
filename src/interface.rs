//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller
//! over I2C.
//!
//! ## Wire format
//!
//! Every transfer to the controller starts with a control byte selecting how
//! the following bytes are interpreted:
//! - `0x00`: command bytes follow
//! - `0x40`: display RAM data follows
//!
//! The control byte and the payload must form one continuous write, so the
//! implementation uses a two-part I2C transaction (adjacent writes are merged
//! without a repeated start per the embedded-hal contract).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_page::{DisplayInterface, I2cInterface, DEFAULT_I2C_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_I2C_ADDRESS);
//!
//! // Send a command
//! let _ = interface.send_commands(&[0xAF]); // Display on
//!
//! // Send display RAM data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

/// Control byte announcing command bytes
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing display RAM data
pub const CONTROL_DATA: u8 = 0x40;

/// Trait for the hardware interface to the SSD1306 controller
///
/// This trait abstracts over the transport, allowing
/// [`Display`](crate::display::Display) to work with any bus implementation
/// and letting tests substitute a recording mock.
///
/// Transfers block until complete; any timeout is enforced by the bus
/// implementation, not by this layer.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send command bytes to the controller
    ///
    /// The implementation must deliver the bytes prefixed with the command
    /// control byte in a single bus write.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// Send display RAM data to the controller
    ///
    /// The implementation must deliver the bytes prefixed with the data
    /// control byte in a single bus write.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// I2C interface implementation for the SSD1306
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0
/// [`I2c`] bus.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2C interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit device address, usually
    ///   [`DEFAULT_I2C_ADDRESS`](crate::config::DEFAULT_I2C_ADDRESS)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the configured device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_prefixed(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        // Adjacent writes in one transaction are sent back to back without a
        // repeated start, which is what the controller expects.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(payload)],
        )
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(CONTROL_COMMAND, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockI2c {
        transfers: Vec<(u8, Vec<u8>)>,
    }

    impl embedded_hal::i2c::ErrorType for MockI2c {
        type Error = core::convert::Infallible;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            // Merge adjacent writes the way a real bus would.
            let mut bytes = Vec::new();
            for op in operations {
                if let Operation::Write(chunk) = op {
                    bytes.extend_from_slice(chunk);
                }
            }
            self.transfers.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_commands_are_prefixed_with_command_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3C);
        interface.send_commands(&[0xAE, 0xAF]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.transfers.len(), 1);
        assert_eq!(i2c.transfers[0].0, 0x3C);
        assert_eq!(i2c.transfers[0].1, alloc::vec![0x00, 0xAE, 0xAF]);
    }

    #[test]
    fn test_data_is_prefixed_with_data_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3D);
        interface.send_data(&[0x12, 0x34, 0x56]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.transfers.len(), 1);
        assert_eq!(i2c.transfers[0].0, 0x3D);
        assert_eq!(i2c.transfers[0].1, alloc::vec![0x40, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_address_accessor() {
        let interface = I2cInterface::new(MockI2c::default(), 0x3C);
        assert_eq!(interface.address(), 0x3C);
    }
}
