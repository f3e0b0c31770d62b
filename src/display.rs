//! Core display operations
//!
//! [`Display`] bundles everything the C-era globals used to hold — the
//! framebuffer mirror, the text cursor, and the update mode — into one value,
//! so several independent displays can coexist and nothing is hidden process
//! state. All drawing goes through the rasterization routines on
//! [`Framebuffer`]; this module decides when the touched span is sent to the
//! controller.

use log::{debug, trace};

use crate::command::{
    ADDRESSING_MODE_PAGE, CHARGE_PUMP, CHARGE_PUMP_EXTERNAL, CHARGE_PUMP_INTERNAL, COLUMN_START_HIGH_BASE,
    COLUMN_START_LOW_BASE, COM_SCAN_DECREMENT, DISPLAY_NORMAL, DISPLAY_RESUME, PAGE_START_BASE,
    SEGMENT_REMAP_REVERSED, SET_ADDRESSING_MODE, SET_CLOCK_DIVIDE, SET_COM_PINS, SET_CONTRAST,
    SET_DISPLAY_OFF, SET_DISPLAY_OFFSET, SET_DISPLAY_ON, SET_MULTIPLEX_RATIO, SET_PRECHARGE,
    SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::Config;
use crate::error::Error;
use crate::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT};
use crate::framebuffer::{COLUMNS, Framebuffer, PAGES, ROWS, Region};
use crate::interface::DisplayInterface;
use crate::text::measure_str;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// When buffer mutations are sent to the controller
///
/// `Auto` flushes the minimal touched span after every drawing operation.
/// `Manual` (the default) leaves the hardware untouched until an explicit
/// [`Display::flush`] or [`Display::flush_region`], which amortizes bus
/// overhead when many draws precede one visible update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Flush each operation's dirty region immediately
    Auto,
    /// Only flush on explicit request
    #[default]
    Manual,
}

/// SSD1306 display driver
///
/// Owns the hardware interface, the panel configuration, the in-memory
/// framebuffer, the text cursor, and the update mode. Drawing operations
/// mutate the framebuffer and, in [`UpdateMode::Auto`], retransmit the byte
/// span they touched.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// In-memory mirror of the controller RAM
    framebuffer: Framebuffer,
    /// Text cursor column for the page-aligned text path
    cursor_column: u8,
    /// Text cursor page for the page-aligned text path
    cursor_page: u8,
    /// Flush policy for drawing operations
    update_mode: UpdateMode,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The framebuffer starts blank, the cursor at the origin, and the
    /// update mode at [`UpdateMode::Manual`]. Call [`init`](Self::init)
    /// before drawing.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            framebuffer: Framebuffer::new(),
            cursor_column: 0,
            cursor_page: 0,
            update_mode: UpdateMode::default(),
        }
    }

    /// Initialize the controller with the configured panel parameters
    ///
    /// Sends the power-up command sequence (charge pump, contrast and
    /// pre-charge per the VCC source) and switches the controller into page
    /// addressing mode.
    pub fn init(&mut self) -> DisplayResult<I> {
        debug!(
            "initializing SSD1306, external_vcc={}",
            self.config.external_vcc
        );
        let charge_pump = if self.config.external_vcc {
            CHARGE_PUMP_EXTERNAL
        } else {
            CHARGE_PUMP_INTERNAL
        };

        self.send_commands(&[
            SET_DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            self.config.clock_divide,
            SET_MULTIPLEX_RATIO,
            self.config.multiplex_ratio,
            SET_DISPLAY_OFFSET,
            self.config.display_offset,
            SET_START_LINE,
            CHARGE_PUMP,
            charge_pump,
            SEGMENT_REMAP_REVERSED,
            COM_SCAN_DECREMENT,
            SET_COM_PINS,
            self.config.com_pins,
            SET_CONTRAST,
            self.config.contrast,
            SET_PRECHARGE,
            self.config.precharge,
            SET_VCOM_DESELECT,
            self.config.vcom_deselect,
            DISPLAY_RESUME,
            DISPLAY_NORMAL,
            SET_DISPLAY_ON,
        ])?;

        self.send_commands(&[SET_ADDRESSING_MODE, ADDRESSING_MODE_PAGE])
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the in-memory framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Access the in-memory framebuffer mutably
    ///
    /// Direct mutations bypass the update mode; flush explicitly afterwards.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Get the current update mode
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Set the update mode
    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        self.update_mode = mode;
    }

    /// Get the text cursor as `(column, page)`
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_column, self.cursor_page)
    }

    /// Set the text cursor
    ///
    /// Out-of-range values clamp to the last column/page.
    pub fn set_cursor(&mut self, column: u8, page: u8) {
        self.cursor_column = column.min(COLUMNS as u8 - 1);
        self.cursor_page = page.min(PAGES as u8 - 1);
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    // Buffer-wide operations

    /// Zero the framebuffer
    ///
    /// In [`UpdateMode::Auto`] the cleared surface is flushed immediately.
    pub fn clear_buffer(&mut self) -> DisplayResult<I> {
        self.framebuffer.clear();
        self.auto_flush(Some(Region::FULL))
    }

    /// Zero the framebuffer and flush the whole surface regardless of mode
    pub fn clear_buffer_and_flush(&mut self) -> DisplayResult<I> {
        self.clear_buffer()?;
        if self.update_mode == UpdateMode::Manual {
            self.flush()?;
        }
        Ok(())
    }

    /// Stream zeroes straight to the controller RAM
    ///
    /// Leaves the framebuffer untouched; a later flush restores its content
    /// on screen.
    pub fn clear_direct(&mut self) -> DisplayResult<I> {
        const CHUNK: [u8; 8] = [0x00; 8];
        for page in 0..PAGES {
            self.set_write_address(0, page)?;
            for _ in 0..COLUMNS / CHUNK.len() {
                self.send_data(&CHUNK)?;
            }
        }
        Ok(())
    }

    // Page-aligned (cursor-based) text

    /// Write a character at the cursor and advance it
    ///
    /// Codes outside 0x20..=0x7F substitute the space glyph. Glyph bits are
    /// OR-ed in, or cleared when `inverted`. Writing stops at the right edge
    /// mid-glyph, but the cursor still advances past the spacing column
    /// (6 columns per character when unclipped, saturating at the right).
    pub fn put_char(&mut self, c: char, inverted: bool) -> DisplayResult<I> {
        let code = if font::is_printable(c as u32) {
            c as u8
        } else {
            b' '
        };
        let start_column = self.cursor_column;
        let page = self.cursor_page;

        for &bits in font::glyph(code) {
            self.framebuffer
                .merge_byte(self.cursor_column as usize, page as usize, bits, inverted);
            if self.cursor_column as usize >= COLUMNS - 1 {
                break;
            }
            self.cursor_column += 1;
        }
        self.cursor_column = self.cursor_column.saturating_add(1);

        self.auto_flush(Some(Region::new(
            start_column as i16,
            self.cursor_column as i16,
            page as i16,
            page as i16,
        )))
    }

    /// Write a string at the cursor
    ///
    /// Applies [`put_char`](Self::put_char) per character; line breaks are
    /// not interpreted. The empty string is a no-op.
    pub fn print_str(&mut self, s: &str, inverted: bool) -> DisplayResult<I> {
        for c in s.chars() {
            self.put_char(c, inverted)?;
        }
        Ok(())
    }

    /// Stream a character's glyph to the controller's current write position
    ///
    /// Does not touch the framebuffer. Codes outside 0x20..=0x7F substitute
    /// the space glyph; `inverted` streams the bitwise complement. The
    /// spacing column is left clear in both modes.
    pub fn put_char_direct(&mut self, c: char, inverted: bool) -> DisplayResult<I> {
        let code = if font::is_printable(c as u32) {
            c as u8
        } else {
            b' '
        };
        let mut bytes = [0u8; GLYPH_ADVANCE];
        for (dst, &src) in bytes.iter_mut().zip(font::glyph(code)) {
            *dst = if inverted { !src } else { src };
        }
        self.send_data(&bytes)
    }

    /// Stream a string to the controller's current write position
    pub fn print_str_direct(&mut self, s: &str, inverted: bool) -> DisplayResult<I> {
        for c in s.chars() {
            self.put_char_direct(c, inverted)?;
        }
        Ok(())
    }

    // Arbitrary-pixel (XY-based) text

    /// Write a character at an arbitrary signed pixel position
    ///
    /// Codes outside 0x20..=0x7F are silently ignored, with no substitution;
    /// fully off-canvas positions are a no-op. When `y` is not a multiple of
    /// 8 the glyph straddles two pages (see [`crate::text`]).
    pub fn put_char_at(&mut self, c: char, x: i16, y: i16, inverted: bool) -> DisplayResult<I> {
        let region = self.framebuffer.blit_char_at(c, x, y, inverted);
        self.auto_flush(region)
    }

    /// Write a string starting at an arbitrary signed pixel position
    ///
    /// Rejects immediately when the measured extent places the whole string
    /// off-canvas. `\n` returns x to the starting column and advances y by 8,
    /// ending the walk once y passes the bottom edge; every other character,
    /// drawable or not, advances x by 6.
    pub fn print_str_at(&mut self, s: &str, x: i16, y: i16, inverted: bool) -> DisplayResult<I> {
        let extent = measure_str(s);
        if i32::from(x) <= -(extent.width as i32) || x >= COLUMNS as i16 {
            return Ok(());
        }
        if y <= -(GLYPH_HEIGHT as i16) || y >= (ROWS + GLYPH_HEIGHT) as i16 {
            return Ok(());
        }

        let mut column = x;
        let mut row = y;
        for c in s.chars() {
            if c == '\n' {
                row += GLYPH_HEIGHT as i16;
                if row >= ROWS as i16 {
                    break;
                }
                column = x;
                continue;
            }
            self.put_char_at(c, column, row, inverted)?;
            column = column.saturating_add(GLYPH_ADVANCE as i16);
        }
        Ok(())
    }

    // Rectangles

    /// Fill a rectangle (see [`Framebuffer::fill_rect`])
    pub fn fill_rect(
        &mut self,
        start_x: i16,
        start_y: i16,
        end_x: i16,
        end_y: i16,
        inverted: bool,
    ) -> DisplayResult<I> {
        let region = self
            .framebuffer
            .fill_rect(start_x, start_y, end_x, end_y, inverted);
        self.auto_flush(region)
    }

    /// Draw a rectangle outline (see [`Framebuffer::draw_rect`])
    pub fn draw_rect(
        &mut self,
        start_x: i16,
        start_y: i16,
        end_x: i16,
        end_y: i16,
        inverted: bool,
    ) -> DisplayResult<I> {
        let region = self
            .framebuffer
            .draw_rect(start_x, start_y, end_x, end_y, inverted);
        self.auto_flush(region)
    }

    // Dirty-region dispatch

    /// Flush the whole framebuffer to the controller
    pub fn flush(&mut self) -> DisplayResult<I> {
        self.flush_region(Region::FULL)
    }

    /// Flush a column/page span of the framebuffer to the controller
    ///
    /// The region is normalized and clamped to the visible area; a region
    /// fully outside it is a no-op. Each page in the span is positioned with
    /// a write-address command and sent as one contiguous data run.
    pub fn flush_region(&mut self, region: Region) -> DisplayResult<I> {
        let Some((start_column, end_column, start_page, end_page)) = region.normalized_clamped()
        else {
            return Ok(());
        };
        trace!("flush columns {start_column}..={end_column} pages {start_page}..={end_page}");

        for page in start_page..=end_page {
            self.set_write_address(start_column, page)?;
            let offset = page * COLUMNS;
            let run = &self.framebuffer.as_bytes()[offset + start_column..=offset + end_column];
            self.interface.send_data(run).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Position the controller's write pointer at `(column, page)`
    ///
    /// Out-of-range input is silently ignored. The protocol requires this
    /// before each contiguous per-page data run.
    pub fn set_write_address(&mut self, column: usize, page: usize) -> DisplayResult<I> {
        if column >= COLUMNS || page >= PAGES {
            return Ok(());
        }
        self.send_commands(&[
            PAGE_START_BASE | page as u8,
            COLUMN_START_LOW_BASE | (column as u8 & 0x0F),
            COLUMN_START_HIGH_BASE | (column as u8 >> 4),
        ])
    }

    fn auto_flush(&mut self, region: Option<Region>) -> DisplayResult<I> {
        if self.update_mode == UpdateMode::Auto {
            if let Some(region) = region {
                self.flush_region(region)?;
            }
        }
        Ok(())
    }

    /// Send commands to the display controller
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::glyph;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<Vec<u8>>,
        data: Vec<Vec<u8>>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                data: Vec::new(),
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            self.commands.push(commands.to_vec());
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    #[test]
    fn test_init_sends_power_up_then_addressing_mode() {
        let mut display = test_display();
        display.init().unwrap();

        let commands = &display.interface.commands;
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].first(), Some(&SET_DISPLAY_OFF));
        assert_eq!(commands[0].last(), Some(&SET_DISPLAY_ON));
        assert!(commands[0]
            .windows(2)
            .any(|w| w == [CHARGE_PUMP, CHARGE_PUMP_INTERNAL]));
        assert_eq!(commands[1], &[SET_ADDRESSING_MODE, ADDRESSING_MODE_PAGE]);
    }

    #[test]
    fn test_init_external_vcc_selects_external_values() {
        let config = Builder::new().external_vcc(true).build().unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        display.init().unwrap();

        let setup = &display.interface.commands[0];
        assert!(setup
            .windows(2)
            .any(|w| w == [CHARGE_PUMP, CHARGE_PUMP_EXTERNAL]));
        assert!(setup.windows(2).any(|w| w == [SET_CONTRAST, 0x9F]));
        assert!(setup.windows(2).any(|w| w == [SET_PRECHARGE, 0x22]));
    }

    #[test]
    fn test_update_mode_defaults_to_manual() {
        let display = test_display();
        assert_eq!(display.update_mode(), UpdateMode::Manual);
    }

    #[test]
    fn test_set_cursor_clamps_to_last_column_and_page() {
        let mut display = test_display();
        display.set_cursor(200, 9);
        assert_eq!(display.cursor(), (127, 7));
    }

    #[test]
    fn test_put_char_writes_glyph_and_advances_cursor() {
        let mut display = test_display();
        display.put_char('A', false).unwrap();

        let expected = glyph(b'A');
        for (i, &bits) in expected.iter().enumerate() {
            assert_eq!(display.framebuffer().byte(i, 0), Some(bits));
        }
        assert_eq!(display.framebuffer().byte(5, 0), Some(0x00));
        assert_eq!(display.cursor(), (6, 0));
    }

    #[test]
    fn test_put_char_substitutes_space_for_unprintable() {
        let mut display = test_display();
        display.put_char('\u{0081}', false).unwrap();

        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(display.cursor(), (6, 0));
    }

    #[test]
    fn test_put_char_stops_at_right_edge_but_advances_once() {
        let mut display = test_display();
        display.set_cursor(125, 0);
        display.put_char('A', false).unwrap();

        let expected = glyph(b'A');
        assert_eq!(display.framebuffer().byte(125, 0), Some(expected[0]));
        assert_eq!(display.framebuffer().byte(126, 0), Some(expected[1]));
        assert_eq!(display.framebuffer().byte(127, 0), Some(expected[2]));
        assert_eq!(display.cursor(), (128, 0));
    }

    #[test]
    fn test_put_char_manual_mode_sends_nothing() {
        let mut display = test_display();
        display.put_char('A', false).unwrap();
        assert!(display.interface.commands.is_empty());
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_put_char_auto_mode_flushes_touched_span() {
        let mut display = test_display();
        display.set_update_mode(UpdateMode::Auto);
        display.put_char('A', false).unwrap();

        // One page run: write address (0, page 0), then columns 0..=6.
        assert_eq!(display.interface.commands.len(), 1);
        assert_eq!(
            display.interface.commands[0],
            &[PAGE_START_BASE, COLUMN_START_LOW_BASE, COLUMN_START_HIGH_BASE]
        );
        assert_eq!(display.interface.data.len(), 1);
        assert_eq!(display.interface.data[0].len(), 7);
        assert_eq!(&display.interface.data[0][..5], glyph(b'A'));
    }

    #[test]
    fn test_print_str_lays_out_characters_at_six_column_pitch() {
        let mut display = test_display();
        display.print_str("AB", false).unwrap();

        assert_eq!(display.framebuffer().byte(0, 0), Some(glyph(b'A')[0]));
        assert_eq!(display.framebuffer().byte(6, 0), Some(glyph(b'B')[0]));
        assert_eq!(display.cursor(), (12, 0));
    }

    #[test]
    fn test_fill_rect_auto_mode_flushes_each_page_run() {
        let mut display = test_display();
        display.set_update_mode(UpdateMode::Auto);
        display.fill_rect(0, 0, 9, 9, false).unwrap();

        assert_eq!(display.interface.data.len(), 2);
        assert_eq!(display.interface.data[0], alloc::vec![0xFF; 10]);
        assert_eq!(display.interface.data[1], alloc::vec![0x03; 10]);
        assert_eq!(
            display.interface.commands[1],
            &[PAGE_START_BASE | 1, COLUMN_START_LOW_BASE, COLUMN_START_HIGH_BASE]
        );
    }

    #[test]
    fn test_fill_rect_offscreen_auto_mode_sends_nothing() {
        let mut display = test_display();
        display.set_update_mode(UpdateMode::Auto);
        display.fill_rect(200, 0, 300, 10, false).unwrap();
        assert!(display.interface.commands.is_empty());
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_flush_sends_every_page() {
        let mut display = test_display();
        display.framebuffer_mut().set_byte(3, 2, 0xAA);
        display.flush().unwrap();

        assert_eq!(display.interface.data.len(), PAGES);
        for run in &display.interface.data {
            assert_eq!(run.len(), COLUMNS);
        }
        assert_eq!(display.interface.data[2][3], 0xAA);
        for (page, command) in display.interface.commands.iter().enumerate() {
            assert_eq!(command[0], PAGE_START_BASE | page as u8);
        }
    }

    #[test]
    fn test_flush_region_clamps_to_surface() {
        let mut display = test_display();
        display
            .flush_region(Region::new(-5, 300, -2, 99))
            .unwrap();
        assert_eq!(display.interface.data.len(), PAGES);
        assert_eq!(display.interface.data[0].len(), COLUMNS);
    }

    #[test]
    fn test_flush_region_fully_outside_is_noop() {
        let mut display = test_display();
        display
            .flush_region(Region::new(200, 300, 0, 0))
            .unwrap();
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_flush_region_positions_each_page_run() {
        let mut display = test_display();
        display.flush_region(Region::new(100, 110, 3, 4)).unwrap();

        assert_eq!(display.interface.commands.len(), 2);
        // Column 100 = 0x64: low nibble 4, high nibble 6.
        assert_eq!(
            display.interface.commands[0],
            &[
                PAGE_START_BASE | 3,
                COLUMN_START_LOW_BASE | 0x04,
                COLUMN_START_HIGH_BASE | 0x06
            ]
        );
        assert_eq!(display.interface.data[0].len(), 11);
    }

    #[test]
    fn test_clear_buffer_and_flush_in_manual_mode() {
        let mut display = test_display();
        display.framebuffer_mut().set_byte(0, 0, 0xFF);
        display.clear_buffer_and_flush().unwrap();

        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(display.interface.data.len(), PAGES);
        assert!(display.interface.data.iter().all(|run| run.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_clear_buffer_in_auto_mode_flushes_once() {
        let mut display = test_display();
        display.set_update_mode(UpdateMode::Auto);
        display.clear_buffer().unwrap();
        assert_eq!(display.interface.data.len(), PAGES);
    }

    #[test]
    fn test_clear_buffer_in_manual_mode_sends_nothing() {
        let mut display = test_display();
        display.clear_buffer().unwrap();
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_put_char_at_multi_line_string_places_next_line() {
        let mut display = test_display();
        display.print_str_at("AB\nC", 10, 0, false).unwrap();

        // 'C' lands at (10, 8): page 1, columns 10..=14.
        assert_eq!(display.framebuffer().byte(10, 1), Some(glyph(b'C')[0]));
        assert_eq!(display.framebuffer().byte(14, 1), Some(glyph(b'C')[4]));
        // First line at page 0.
        assert_eq!(display.framebuffer().byte(10, 0), Some(glyph(b'A')[0]));
        assert_eq!(display.framebuffer().byte(16, 0), Some(glyph(b'B')[0]));
    }

    #[test]
    fn test_print_str_at_rejects_fully_offscreen_string() {
        let mut display = test_display();
        display.print_str_at("AB", -12, 0, false).unwrap();
        display.print_str_at("AB", 128, 0, false).unwrap();
        display.print_str_at("AB", 0, -8, false).unwrap();
        display.print_str_at("AB", 0, 72, false).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_print_str_at_stops_below_bottom_edge() {
        let mut display = test_display();
        display.print_str_at("A\nB\nC", 0, 56, false).unwrap();

        // 'A' on the last page; '\n' pushes y to 64, ending the walk.
        assert_eq!(display.framebuffer().byte(0, 7), Some(glyph(b'A')[0]));
        let earlier_pages_total: u32 = display.framebuffer().as_bytes()[..7 * COLUMNS]
            .iter()
            .map(|&b| b as u32)
            .sum();
        assert_eq!(earlier_pages_total, 0);
    }

    #[test]
    fn test_print_str_at_advances_past_skipped_characters() {
        let mut display = test_display();
        // '\r' has no glyph but still consumes one advance.
        display.print_str_at("A\rB", 0, 0, false).unwrap();
        assert_eq!(display.framebuffer().byte(0, 0), Some(glyph(b'A')[0]));
        assert_eq!(display.framebuffer().byte(6, 0), Some(0x00));
        assert_eq!(display.framebuffer().byte(12, 0), Some(glyph(b'B')[0]));
    }

    #[test]
    fn test_put_char_at_auto_mode_flushes_both_pages() {
        let mut display = test_display();
        display.set_update_mode(UpdateMode::Auto);
        display.put_char_at('A', 0, 3, false).unwrap();

        assert_eq!(display.interface.data.len(), 2);
        assert_eq!(display.interface.data[0].len(), 5);
        assert_eq!(display.interface.data[1].len(), 5);
    }

    #[test]
    fn test_put_char_direct_streams_glyph_with_spacing_byte() {
        let mut display = test_display();
        display.put_char_direct('A', false).unwrap();

        assert_eq!(display.interface.data.len(), 1);
        let run = &display.interface.data[0];
        assert_eq!(&run[..5], glyph(b'A'));
        assert_eq!(run[5], 0x00);
        // The framebuffer is not involved.
        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_put_char_direct_inverted_streams_complement() {
        let mut display = test_display();
        display.put_char_direct('A', true).unwrap();

        let run = &display.interface.data[0];
        for (i, &bits) in glyph(b'A').iter().enumerate() {
            assert_eq!(run[i], !bits);
        }
        assert_eq!(run[5], 0x00);
    }

    #[test]
    fn test_clear_direct_streams_zero_chunks_per_page() {
        let mut display = test_display();
        display.clear_direct().unwrap();

        assert_eq!(display.interface.commands.len(), PAGES);
        assert_eq!(display.interface.data.len(), PAGES * (COLUMNS / 8));
        assert!(display
            .interface
            .data
            .iter()
            .all(|chunk| chunk.len() == 8 && chunk.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_set_write_address_out_of_range_is_noop() {
        let mut display = test_display();
        display.set_write_address(COLUMNS, 0).unwrap();
        display.set_write_address(0, PAGES).unwrap();
        assert!(display.interface.commands.is_empty());
    }
}
