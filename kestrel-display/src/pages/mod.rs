//! Display pages
//!
//! The panel cycles through four pages: radio statistics, aircraft/GNSS/
//! battery status, barometric readings, and the traffic radar. Text pages
//! paint their titles once per activation and afterwards redraw only the
//! values that changed; the traffic page replaces the whole panel band by
//! band every tick.
//!
//! [`Panel`] is the render context the firmware creates once at startup
//! and threads through every render tick. The tick itself is owned by the
//! firmware's scheduler; the panel never throttles or blocks.

pub mod baro;
pub mod radio;
pub mod status;
pub mod traffic;

use kestrel_core::config::TrafficSettings;
use kestrel_core::traffic::{OwnShip, TrackedObject};

use crate::backend::{DisplayBackend, DisplayError};

pub use baro::BaroData;
pub use radio::RadioData;
pub use status::StatusData;

use baro::BaroPage;
use radio::RadioPage;
use status::StatusPage;
use traffic::TrafficPage;

/// Page identifiers, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Radio ID, protocol and packet counters
    Radio,
    /// Traffic count, GNSS, uptime and battery
    Status,
    /// Barometric altitude, temperature, pressure, climb rate
    Baro,
    /// Radar-style traffic display
    Traffic,
}

impl Page {
    fn next(self) -> Self {
        match self {
            Page::Radio => Page::Status,
            Page::Status => Page::Baro,
            Page::Baro => Page::Traffic,
            Page::Traffic => Page::Radio,
        }
    }
}

/// Data snapshots for one render tick
///
/// Collaborators fill this in before the tick; the panel treats it as
/// read-only.
pub struct TickData<'a> {
    pub radio: RadioData,
    pub status: StatusData,
    pub baro: BaroData,
    /// Traffic table snapshot, unused slots included
    pub traffic: &'a [TrackedObject],
    pub own: OwnShip,
    pub settings: TrafficSettings,
    /// Monotonic time, seconds
    pub now: u32,
}

/// Render context for the whole panel
///
/// Owns the current page, every page's differential-redraw state and the
/// traffic page's blink phase. Created once at startup.
pub struct Panel {
    current: Page,
    has_baro: bool,
    radio: RadioPage,
    status: StatusPage,
    baro: BaroPage,
    traffic: TrafficPage,
}

impl Panel {
    /// New panel starting on the radio page
    ///
    /// `has_baro` controls whether the baro page takes part in cycling.
    pub fn new(has_baro: bool) -> Self {
        Self {
            current: Page::Radio,
            has_baro,
            radio: RadioPage::new(),
            status: StatusPage::new(),
            baro: BaroPage::new(),
            traffic: TrafficPage::new(),
        }
    }

    /// The page currently shown
    pub fn current_page(&self) -> Page {
        self.current
    }

    /// Advance to the next page and force its full repaint
    pub fn next_page(&mut self) {
        self.current = self.current.next();
        if self.current == Page::Baro && !self.has_baro {
            self.current = self.current.next();
        }
        match self.current {
            Page::Radio => self.radio.invalidate(),
            Page::Status => self.status.invalidate(),
            Page::Baro => self.baro.invalidate(),
            Page::Traffic => {}
        }
    }

    /// Render the current page for one tick
    pub fn render<B: DisplayBackend>(
        &mut self,
        data: &TickData<'_>,
        display: &mut B,
    ) -> Result<(), DisplayError> {
        match self.current {
            Page::Radio => self.radio.draw(&data.radio, display),
            Page::Status => self.status.draw(&data.status, display),
            Page::Baro => self.baro.draw(&data.baro, display),
            Page::Traffic => self.traffic.draw(
                data.traffic,
                &data.own,
                &data.settings,
                data.now,
                display,
            ),
        }
    }
}

/// Shutdown cause shown on the way down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShutdownReason {
    /// Normal power-off
    Off,
    /// Battery exhausted
    LowBattery,
}

/// Draw the boot splash
///
/// `version` and `region` are short strings the firmware prepares (for
/// example a three-character version tag and a two-letter band code).
pub fn draw_boot<B: DisplayBackend>(
    display: &mut B,
    version: &str,
    region: &str,
) -> Result<(), DisplayError> {
    display.clear()?;
    display.text_big(1, 2, "KESTREL")?;
    display.text(3, 6, version)?;
    display.text(11, 6, region)
}

/// Draw the shutdown screen
pub fn draw_shutdown<B: DisplayBackend>(
    display: &mut B,
    reason: ShutdownReason,
) -> Result<(), DisplayError> {
    display.clear()?;
    let message = match reason {
        ShutdownReason::LowBattery => "LOW BAT",
        ShutdownReason::Off => "  OFF  ",
    };
    display.text_big(1, 3, message)
}

/// Hardware self-test summary shown after boot
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTest {
    pub radio: bool,
    pub gnss: bool,
    pub display: bool,
    pub baro: bool,
}

/// Draw the probe results screen
pub fn draw_self_test<B: DisplayBackend>(
    display: &mut B,
    result: &SelfTest,
) -> Result<(), DisplayError> {
    display.clear()?;
    let mark = |ok: bool| if ok { "+" } else { "-" };
    display.text_big(0, 0, "RADIO")?;
    display.text_big(14, 0, mark(result.radio))?;
    display.text_big(0, 2, "GNSS")?;
    display.text_big(14, 2, mark(result.gnss))?;
    display.text_big(0, 4, "OLED")?;
    display.text_big(14, 4, mark(result.display))?;
    display.text_big(0, 6, "BARO")?;
    display.text_big(14, 6, mark(result.baro))
}
