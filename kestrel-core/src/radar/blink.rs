//! Blink phase tracking
//!
//! Elevated-alert indicators flash by being drawn only on even phases. The
//! phase advances once per render tick while any bin wants to blink and
//! snaps back to zero (visible) as soon as none does. This counter is the
//! only radar state that survives across render ticks; it lives in the
//! render context rather than in a process-wide static.

/// Cross-tick blink phase counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    phase: u32,
}

impl BlinkState {
    /// Phase zero, elevated indicators visible
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Whether elevated-alert indicators are drawn this tick
    pub const fn elevated_visible(&self) -> bool {
        self.phase % 2 == 0
    }

    /// Current phase value
    pub const fn phase(&self) -> u32 {
        self.phase
    }

    /// Step the phase after a completed render tick
    pub fn advance(&mut self, should_blink: bool) {
        if should_blink {
            self.phase = self.phase.wrapping_add(1);
        } else {
            self.phase = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        assert!(BlinkState::new().elevated_visible());
    }

    #[test]
    fn test_alternates_while_blinking() {
        let mut blink = BlinkState::new();
        blink.advance(true);
        assert!(!blink.elevated_visible());
        blink.advance(true);
        assert!(blink.elevated_visible());
        blink.advance(true);
        assert!(!blink.elevated_visible());
    }

    #[test]
    fn test_resets_when_quiet() {
        let mut blink = BlinkState::new();
        blink.advance(true);
        blink.advance(false);
        assert_eq!(blink.phase(), 0);
        assert!(blink.elevated_visible());
    }
}
