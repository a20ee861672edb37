//! Radio statistics page
//!
//! Shows the own address, active protocol and the received/transmitted
//! packet counters. Counters roll over at 1000 on screen and are redrawn
//! only when they changed since the previous tick.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Radio subsystem snapshot for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioData {
    /// Own 24-bit address
    pub addr: u32,
    /// First letter of the active protocol name
    pub protocol: char,
    /// Packets received since boot
    pub rx_packets: u32,
    /// Packets transmitted since boot
    pub tx_packets: u32,
    /// Receive path switched off (power save or RF chip limits)
    pub rx_disabled: bool,
    /// Transmit path switched off (receiver mode, UAT, TX power off)
    pub tx_disabled: bool,
}

/// Radio page with differential-redraw state
pub struct RadioPage {
    titles_drawn: bool,
    prev_rx: Option<u32>,
    prev_tx: Option<u32>,
}

impl RadioPage {
    pub fn new() -> Self {
        Self {
            titles_drawn: false,
            prev_rx: None,
            prev_tx: None,
        }
    }

    /// Force a full repaint on the next draw
    pub fn invalidate(&mut self) {
        self.titles_drawn = false;
    }

    pub fn draw<B: DisplayBackend>(
        &mut self,
        data: &RadioData,
        display: &mut B,
    ) -> Result<(), DisplayError> {
        if !self.titles_drawn {
            display.clear()?;

            display.text(1, 1, "ID")?;
            let mut addr: String<8> = String::new();
            let _ = write!(addr, "{:06X}", data.addr & 0xFF_FFFF);
            display.text_big(0, 2, &addr)?;

            display.text(8, 1, "PROTOCOL")?;
            display.glyph_big(14, 2, data.protocol)?;

            display.text(1, 5, "RX")?;
            display.text(9, 5, "TX")?;

            if data.rx_disabled {
                display.text_big(0, 6, "OFF")?;
                self.prev_rx = Some(data.rx_packets);
            } else {
                self.prev_rx = None;
            }

            if data.tx_disabled {
                display.text_big(8, 6, "OFF")?;
                self.prev_tx = Some(data.tx_packets);
            } else {
                self.prev_tx = None;
            }

            self.titles_drawn = true;
        }

        if self.prev_rx != Some(data.rx_packets) {
            display.text_big(0, 6, &counter_text(data.rx_packets))?;
            self.prev_rx = Some(data.rx_packets);
        }

        if self.prev_tx != Some(data.tx_packets) {
            display.text_big(8, 6, &counter_text(data.tx_packets))?;
            self.prev_tx = Some(data.tx_packets);
        }

        Ok(())
    }
}

impl Default for RadioPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter modulo 1000, left-aligned and padded to three cells so shorter
/// values overwrite longer stale ones
fn counter_text(count: u32) -> String<4> {
    let mut text = String::new();
    let _ = write!(text, "{:<3}", count % 1000);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockDisplay, Op};

    fn data() -> RadioData {
        RadioData {
            addr: 0xABCDEF,
            protocol: 'L',
            rx_packets: 7,
            tx_packets: 42,
            rx_disabled: false,
            tx_disabled: false,
        }
    }

    #[test]
    fn test_titles_drawn_once() {
        let mut page = RadioPage::new();
        let mut display = MockDisplay::new();
        page.draw(&data(), &mut display).unwrap();

        assert_eq!(display.ops[0], Op::Clear);
        assert_eq!(display.big_text_at(0, 2), Some("ABCDEF"));
        assert_eq!(display.big_text_at(0, 6), Some("7  "));
        assert_eq!(display.big_text_at(8, 6), Some("42 "));

        display.reset_ops();
        page.draw(&data(), &mut display).unwrap();
        assert!(display.ops.is_empty());
    }

    #[test]
    fn test_only_changed_counter_redrawn() {
        let mut page = RadioPage::new();
        let mut display = MockDisplay::new();
        page.draw(&data(), &mut display).unwrap();
        display.reset_ops();

        let mut next = data();
        next.rx_packets = 8;
        page.draw(&next, &mut display).unwrap();
        assert_eq!(display.ops.len(), 1);
        assert_eq!(display.big_text_at(0, 6), Some("8  "));
    }

    #[test]
    fn test_counter_rolls_over_at_1000() {
        let mut page = RadioPage::new();
        let mut display = MockDisplay::new();
        let mut d = data();
        d.rx_packets = 1234;
        page.draw(&d, &mut display).unwrap();
        assert_eq!(display.big_text_at(0, 6), Some("234"));
    }

    #[test]
    fn test_disabled_paths_show_off() {
        let mut page = RadioPage::new();
        let mut display = MockDisplay::new();
        let mut d = data();
        d.tx_disabled = true;
        page.draw(&d, &mut display).unwrap();
        assert_eq!(display.big_text_at(8, 6), Some("OFF"));

        // Frozen counter stays OFF on later ticks
        display.reset_ops();
        page.draw(&d, &mut display).unwrap();
        assert!(display.ops.is_empty());
    }

    #[test]
    fn test_invalidate_repaints() {
        let mut page = RadioPage::new();
        let mut display = MockDisplay::new();
        page.draw(&data(), &mut display).unwrap();
        display.reset_ops();
        page.invalidate();
        page.draw(&data(), &mut display).unwrap();
        assert_eq!(display.ops[0], Op::Clear);
    }
}
