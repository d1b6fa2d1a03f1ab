//! Firmware update channel contract.
//!
//! The OTA machinery itself (provisioning portal, mDNS, transfer) lives
//! outside the core; it reports lifecycle events that the station turns into
//! operator-visible screens. Failures are not retried automatically -- the
//! message stays up for the human operator.

/// Lifecycle events reported by the update channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateEvent {
    /// Transfer started.
    Start,
    /// Transfer progress in bytes.
    Progress { current: u32, total: u32 },
    /// Transfer finished; the device restarts next.
    End,
    /// Transfer failed.
    Error(UpdateError),
}

/// Update failure kinds, as reported by the channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateError {
    Auth,
    Begin,
    Connect,
    Receive,
    End,
}

impl UpdateError {
    /// Second display line for the error screen.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Auth => "Auth failed!",
            Self::Begin => "Begin failed!",
            Self::Connect => "Connect failed!",
            Self::Receive => "Receive failed!",
            Self::End => "End failed!",
        }
    }
}

/// What the display should show for an update event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateScreen {
    /// Two-line status message.
    Message(&'static str, &'static str),
    /// Message plus progress bar at the given percent.
    Progress(&'static str, u16),
}

/// Map an update event to its operator-facing screen.
pub fn screen_for(event: UpdateEvent) -> UpdateScreen {
    match event {
        UpdateEvent::Start => UpdateScreen::Message("Updating...", ""),
        UpdateEvent::Progress { current, total } => UpdateScreen::Progress("Updating...", transfer_percent(current, total)),
        UpdateEvent::End => UpdateScreen::Message("Update complete", "Restarting..."),
        UpdateEvent::Error(error) => UpdateScreen::Message("Update error", error.message()),
    }
}

/// Transfer completion in percent, clamped to 100 and total-zero safe.
pub fn transfer_percent(
    current: u32,
    total: u32,
) -> u16 {
    if total == 0 {
        return 0;
    }
    let percent = (u64::from(current) * 100 / u64::from(total)) as u32;
    percent.min(100) as u16
}

// =============================================================================
// System Control
// =============================================================================

/// Config-erase-and-restart primitive exposed by the platform.
///
/// `restart` diverges: on the device it resets the chip, in the simulator it
/// exits the process. It is the one irreversible operation the core can
/// request.
pub trait SystemControl {
    /// Erase the persisted device configuration (WiFi credentials etc.).
    fn erase_config(&mut self);

    /// Restart the device. Never returns.
    fn restart(&mut self) -> !;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_percent() {
        assert_eq!(transfer_percent(0, 1000), 0);
        assert_eq!(transfer_percent(250, 1000), 25);
        assert_eq!(transfer_percent(1000, 1000), 100);
        assert_eq!(transfer_percent(2000, 1000), 100);
    }

    #[test]
    fn test_transfer_percent_small_or_zero_total() {
        assert_eq!(transfer_percent(5, 0), 0);
        assert_eq!(transfer_percent(1, 3), 33);
        assert_eq!(transfer_percent(3, 3), 100);
    }

    #[test]
    fn test_screen_mapping() {
        assert_eq!(screen_for(UpdateEvent::Start), UpdateScreen::Message("Updating...", ""));
        assert_eq!(
            screen_for(UpdateEvent::Progress {
                current: 512,
                total: 1024
            }),
            UpdateScreen::Progress("Updating...", 50)
        );
        assert_eq!(
            screen_for(UpdateEvent::End),
            UpdateScreen::Message("Update complete", "Restarting...")
        );
        assert_eq!(
            screen_for(UpdateEvent::Error(UpdateError::Receive)),
            UpdateScreen::Message("Update error", "Receive failed!")
        );
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let errors = [
            UpdateError::Auth,
            UpdateError::Begin,
            UpdateError::Connect,
            UpdateError::Receive,
            UpdateError::End,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
