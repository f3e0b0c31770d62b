//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Default 7-bit I2C address (SA0 low)
///
/// Corresponds to the 0x78 write address on the wire. Boards strapping SA0
/// high answer at [`ALT_I2C_ADDRESS`] instead.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high)
pub const ALT_I2C_ADDRESS: u8 = 0x3D;

/// Display configuration
///
/// Holds the panel parameters sent during [`crate::Display::init`]. Use
/// [`Builder`] to create a Config; the defaults match a 128x64 module running
/// from the internal charge pump.
#[derive(Clone, Debug)]
pub struct Config {
    /// 7-bit I2C address
    pub address: u8,
    /// VCC supplied externally (true) or from the internal DC/DC converter
    pub external_vcc: bool,
    /// Contrast level
    pub contrast: u8,
    /// Pre-charge period register value
    pub precharge: u8,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Multiplex ratio byte (rows - 1)
    pub multiplex_ratio: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// VCOMH deselect level byte
    pub vcom_deselect: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_page::{Builder, ALT_I2C_ADDRESS};
///
/// let config = match Builder::new()
///     .address(ALT_I2C_ADDRESS)
///     .external_vcc(true)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0x9F);
/// ```
#[must_use]
pub struct Builder {
    /// 7-bit I2C address
    address: u8,
    /// VCC supplied externally
    external_vcc: bool,
    /// Contrast override; resolved per VCC source when unset
    contrast: Option<u8>,
    /// Pre-charge override; resolved per VCC source when unset
    precharge: Option<u8>,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Multiplex ratio byte
    multiplex_ratio: u8,
    /// Vertical display offset
    display_offset: u8,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// VCOMH deselect level byte
    vcom_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: DEFAULT_I2C_ADDRESS,
            external_vcc: false,
            contrast: None,
            precharge: None,
            // Suggested oscillator setting from the panel datasheet
            clock_divide: 0x80,
            // 64 rows
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            // Alternative COM pin configuration for 128x64
            com_pins: 0x12,
            vcom_deselect: 0x40,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set whether VCC is supplied externally
    ///
    /// Affects the charge pump setting and, unless overridden, the contrast
    /// and pre-charge defaults.
    pub fn external_vcc(mut self, external: bool) -> Self {
        self.external_vcc = external;
        self
    }

    /// Override the contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = Some(value);
        self
    }

    /// Override the pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = Some(value);
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the multiplex ratio byte
    pub fn multiplex_ratio(mut self, value: u8) -> Self {
        self.multiplex_ratio = value;
        self
    }

    /// Set the vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit in
    /// 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > 0x7F {
            return Err(BuilderError::InvalidAddress {
                address: self.address,
            });
        }
        let (default_contrast, default_precharge) = if self.external_vcc {
            (0x9F, 0x22)
        } else {
            (0xCF, 0xF1)
        };
        Ok(Config {
            address: self.address,
            external_vcc: self.external_vcc,
            contrast: self.contrast.unwrap_or(default_contrast),
            precharge: self.precharge.unwrap_or(default_precharge),
            clock_divide: self.clock_divide,
            multiplex_ratio: self.multiplex_ratio,
            display_offset: self.display_offset,
            com_pins: self.com_pins,
            vcom_deselect: self.vcom_deselect,
        })
    }
}
