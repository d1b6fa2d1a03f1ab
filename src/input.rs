//! Debounced switch input contract and per-tick snapshots.
//!
//! The switch driver (hardware debouncer, or the simulator's keyboard shim)
//! is an external collaborator; the core consumes it through
//! [`DebouncedSwitch`]. Gesture evaluation reads a [`SwitchSnapshot`] taken
//! once per loop iteration, so the charge/decay decision and the progress
//! read cannot see two different readings of the same switch.

/// Debounced momentary switch, active-low: the switch connects the pin to
/// ground, so a `false` level means pressed.
pub trait DebouncedSwitch {
    /// Refresh the debounced state. Call once per loop iteration, before
    /// querying.
    fn update(&mut self);

    /// Current debounced level (`false` = pressed).
    fn read(&self) -> bool;

    /// Level went high since the last `update()` (switch released).
    fn rose(&self) -> bool;

    /// Level went low since the last `update()` (switch pressed).
    fn fell(&self) -> bool;
}

/// One iteration's view of a switch, in press/release terms.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SwitchSnapshot {
    /// Switch is currently held down.
    pub held: bool,
    /// Switch was pressed this iteration.
    pub pressed_edge: bool,
    /// Switch was released this iteration.
    pub released_edge: bool,
}

impl SwitchSnapshot {
    /// Update the switch and capture its state for this iteration.
    pub fn capture<S: DebouncedSwitch>(switch: &mut S) -> Self {
        switch.update();
        Self {
            held: !switch.read(),
            pressed_edge: switch.fell(),
            released_edge: switch.rose(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted switch feeding a fixed level sequence.
    struct ScriptedSwitch {
        levels: &'static [bool],
        step: usize,
        level: bool,
        prev: bool,
    }

    impl ScriptedSwitch {
        fn new(levels: &'static [bool]) -> Self {
            Self {
                levels,
                step: 0,
                level: true,
                prev: true,
            }
        }
    }

    impl DebouncedSwitch for ScriptedSwitch {
        fn update(&mut self) {
            self.prev = self.level;
            self.level = self.levels[self.step.min(self.levels.len() - 1)];
            self.step += 1;
        }

        fn read(&self) -> bool { self.level }

        fn rose(&self) -> bool { self.level && !self.prev }

        fn fell(&self) -> bool { !self.level && self.prev }
    }

    #[test]
    fn test_capture_maps_active_low() {
        // High, low (press), low (hold), high (release)
        let mut switch = ScriptedSwitch::new(&[true, false, false, true]);

        let snap = SwitchSnapshot::capture(&mut switch);
        assert!(!snap.held && !snap.pressed_edge && !snap.released_edge);

        let snap = SwitchSnapshot::capture(&mut switch);
        assert!(snap.held && snap.pressed_edge && !snap.released_edge);

        let snap = SwitchSnapshot::capture(&mut switch);
        assert!(snap.held && !snap.pressed_edge && !snap.released_edge);

        let snap = SwitchSnapshot::capture(&mut switch);
        assert!(!snap.held && !snap.pressed_edge && snap.released_edge);
    }
}
