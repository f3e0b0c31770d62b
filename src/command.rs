//! SSD1306 command definitions
//!
//! This module defines the command bytes used to bring up and address the
//! SSD1306 OLED controller. Commands are sent over I2C prefixed with the
//! command control byte (see [`crate::interface`]); pixel data uses the data
//! control byte instead.
//!
//! Values follow the UG-2864HSWEG01 panel application notes.

// Fundamental commands

/// Set display off (sleep mode) command (0xAE)
pub const SET_DISPLAY_OFF: u8 = 0xAE;

/// Set display on command (0xAF)
pub const SET_DISPLAY_ON: u8 = 0xAF;

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast level 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content command (0xA4)
///
/// Output follows RAM content (as opposed to 0xA5, entire display on).
pub const DISPLAY_RESUME: u8 = 0xA4;

/// Set normal (non-inverted) display polarity command (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

// Timing and driving scheme

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 byte: low nibble divide ratio, high nibble oscillator frequency.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 byte: ratio - 1 (0x3F for a 64-row panel).
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0x00..=0x3F.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set display start line command (0x40)
///
/// The start line is encoded in the low 6 bits of the command byte itself.
pub const SET_START_LINE: u8 = 0x40;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 byte; the value depends on the VCC source (see
/// [`crate::config::Config::external_vcc`]).
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

// Hardware configuration

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: [`CHARGE_PUMP_INTERNAL`] when running from the internal
/// DC/DC converter, [`CHARGE_PUMP_EXTERNAL`] when VCC is supplied externally.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable value for internal DC/DC operation
pub const CHARGE_PUMP_INTERNAL: u8 = 0x14;

/// Charge pump disable value for external VCC operation
pub const CHARGE_PUMP_EXTERNAL: u8 = 0x10;

/// Segment re-map command, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_REVERSED: u8 = 0xA1;

/// COM output scan direction command, remapped mode (0xC8)
pub const COM_SCAN_DECREMENT: u8 = 0xC8;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte (0x12 for the 128x64 alternative COM pin layout).
pub const SET_COM_PINS: u8 = 0xDA;

// Addressing

/// Set memory addressing mode command (0x20)
///
/// Requires 1 byte: [`ADDRESSING_MODE_PAGE`] for the page-organized writes
/// this driver performs.
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Page addressing mode value (0x10)
///
/// The column pointer auto-increments within the current page and the page
/// pointer stays put, so each page run is positioned explicitly.
pub const ADDRESSING_MODE_PAGE: u8 = 0x10;

/// Page start address command base (0xB0)
///
/// OR the page index (0..=7) into the low 3 bits.
pub const PAGE_START_BASE: u8 = 0xB0;

/// Column start address, lower nibble command base (0x00)
pub const COLUMN_START_LOW_BASE: u8 = 0x00;

/// Column start address, higher nibble command base (0x10)
pub const COLUMN_START_HIGH_BASE: u8 = 0x10;
