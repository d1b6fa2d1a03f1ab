//! Long-press gesture state machines for the two select-switch actions.
//!
//! A [`HoldTimer`] accumulates one tick per render-loop iteration while the
//! switch is held and decays four per iteration while released, so a brief
//! bounce-back doesn't erase a long hold but a sustained release resets
//! quickly. Crossing the threshold fires exactly once.
//!
//! Two wrappers give the timers their application semantics:
//! - [`UpdateEnable`] latches an enabled flag and supports a press-then-
//!   release toggle to clear it again.
//! - [`FactoryReset`] is a one-shot trigger; the action it gates erases the
//!   device configuration and restarts, so the timer is terminal.

use crate::config::{FACTORY_RESET_HOLD_TICKS, RELEASE_DECAY_TICKS, UPDATE_ENABLE_HOLD_TICKS};
use crate::input::SwitchSnapshot;

/// Gesture phase, a pure projection of the tick counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HoldState {
    Idle,
    Charging,
    Triggered,
}

/// Tick-accumulating hold detector with asymmetric charge/decay.
pub struct HoldTimer {
    ticks: u16,
    max_ticks: u16,
    triggered: bool,
}

impl HoldTimer {
    /// Create a timer that fires after `max_ticks` held iterations.
    /// A zero threshold would make the progress projection undefined, so it
    /// is clamped to 1.
    pub const fn new(max_ticks: u16) -> Self {
        Self {
            ticks: 0,
            max_ticks: if max_ticks == 0 { 1 } else { max_ticks },
            triggered: false,
        }
    }

    /// Advance one render tick. Returns `true` exactly once, on the
    /// iteration where the hold exceeds the threshold; after that the timer
    /// stays pinned at `max_ticks` until [`Self::rearm`].
    pub fn advance(
        &mut self,
        held: bool,
    ) -> bool {
        if self.triggered {
            return false;
        }
        if held {
            self.ticks += 1;
            if self.ticks > self.max_ticks {
                self.ticks = self.max_ticks;
                self.triggered = true;
                return true;
            }
        } else {
            self.ticks = self.ticks.saturating_sub(RELEASE_DECAY_TICKS);
        }
        false
    }

    pub const fn state(&self) -> HoldState {
        if self.triggered {
            HoldState::Triggered
        } else if self.ticks == 0 {
            HoldState::Idle
        } else {
            HoldState::Charging
        }
    }

    pub const fn ticks(&self) -> u16 { self.ticks }

    /// Hold progress in percent, for the fill bar.
    pub const fn progress_percent(&self) -> u16 { (self.ticks as u32 * 100 / self.max_ticks as u32) as u16 }

    /// Zero the tick counter without clearing the triggered latch.
    pub fn clear_ticks(&mut self) { self.ticks = 0; }

    /// Reset to idle so the gesture can fire again.
    pub fn rearm(&mut self) {
        self.ticks = 0;
        self.triggered = false;
    }
}

// =============================================================================
// Update-Enable Gesture
// =============================================================================

/// Hold-to-enable / press-and-release-to-disable toggle for the firmware
/// update channel.
///
/// While disabled, holding the select switch charges the timer; crossing the
/// threshold latches `enabled`. While enabled the timer stays pinned: a press
/// edge zeroes the ticks, and the following release edge (ticks already 0)
/// clears the flag and re-arms the timer. A hold therefore only re-arms the
/// flag when it is off.
pub struct UpdateEnable {
    timer: HoldTimer,
    enabled: bool,
}

impl UpdateEnable {
    pub const fn new() -> Self {
        Self {
            timer: HoldTimer::new(UPDATE_ENABLE_HOLD_TICKS),
            enabled: false,
        }
    }

    /// Evaluate one render tick. Returns `true` when the enabled flag
    /// changed this tick.
    pub fn update(
        &mut self,
        input: SwitchSnapshot,
    ) -> bool {
        if self.enabled {
            if self.timer.ticks() > 0 {
                if input.pressed_edge {
                    self.timer.clear_ticks();
                }
            } else if input.released_edge {
                self.enabled = false;
                self.timer.rearm();
                return true;
            }
            false
        } else if self.timer.advance(input.held) {
            self.enabled = true;
            true
        } else {
            false
        }
    }

    pub const fn is_enabled(&self) -> bool { self.enabled }

    pub const fn ticks(&self) -> u16 { self.timer.ticks() }

    pub const fn progress_percent(&self) -> u16 { self.timer.progress_percent() }
}

impl Default for UpdateEnable {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Factory-Reset Gesture
// =============================================================================

/// One-shot hold trigger for the configuration erase + restart action.
///
/// Firing is terminal: the triggered action restarts the device, so the
/// timer never re-arms within a run.
pub struct FactoryReset {
    timer: HoldTimer,
}

impl FactoryReset {
    pub const fn new() -> Self {
        Self {
            timer: HoldTimer::new(FACTORY_RESET_HOLD_TICKS),
        }
    }

    /// Evaluate one render tick. Returns `true` exactly once, when the hold
    /// threshold is crossed.
    pub fn update(
        &mut self,
        held: bool,
    ) -> bool {
        self.timer.advance(held)
    }

    pub const fn ticks(&self) -> u16 { self.timer.ticks() }

    pub const fn progress_percent(&self) -> u16 { self.timer.progress_percent() }
}

impl Default for FactoryReset {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
