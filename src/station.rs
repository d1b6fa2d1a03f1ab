//! Station state and per-tick orchestration.
//!
//! One loop iteration, in order: service the update channel (external),
//! refresh the switches, evaluate gestures and draw the current frame, and
//! -- if the frame budget allows -- poll the sensor and the sample
//! scheduler. All state here is touched from that single loop context, so no
//! locking is involved; the only discipline is that gesture evaluation reads
//! one [`SwitchSnapshot`] per iteration.

use core::fmt::Write;

use heapless::String;
use log::{debug, info, warn};

use crate::config::HISTORY_SIZE;
use crate::gesture::{FactoryReset, UpdateEnable};
use crate::history::SampleHistory;
use crate::input::SwitchSnapshot;
use crate::pages::Page;
use crate::sampler::SecondTicker;
use crate::sensor::{EnvSensor, Readings};

/// Actions the station requests from its caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StationEvent {
    /// The factory-reset hold crossed its threshold: erase the device
    /// configuration, show the reset message, and restart. Irreversible.
    FactoryResetTriggered,
}

/// Identity shown on the network frame.
pub struct NetworkInfo {
    pub ip: String<16>,
    pub host: String<24>,
}

impl NetworkInfo {
    /// Build the station identity from the chip id (hostname `env280-<id>`).
    /// The IP is filled in once provisioning hands one out.
    pub fn new(chip_id: u32) -> Self {
        let mut host = String::new();
        let _ = write!(host, "env280-{:06x}", chip_id & 0xFF_FFFF);
        Self {
            ip: String::new(),
            host,
        }
    }

    pub fn set_ip(
        &mut self,
        ip: &str,
    ) {
        self.ip.clear();
        let _ = self.ip.push_str(ip);
    }
}

/// All core state for one station run.
pub struct Station {
    pub readings: Readings,
    pub sensor_connected: bool,
    pub history: SampleHistory<HISTORY_SIZE>,
    pub update_enable: UpdateEnable,
    pub factory_reset: FactoryReset,
    pub net: NetworkInfo,
    ticker: SecondTicker,
    page: Page,
}

impl Station {
    /// Create a station anchored at `now_ms`. `sensor_connected` is the
    /// one-time startup probe result; when `false`, sensor servicing is a
    /// no-op for the whole run.
    pub fn new(
        now_ms: u64,
        sensor_connected: bool,
        net: NetworkInfo,
    ) -> Self {
        if !sensor_connected {
            warn!("no environmental sensor found, readings disabled");
        }
        Self {
            readings: Readings::default(),
            sensor_connected,
            history: SampleHistory::new(),
            update_enable: UpdateEnable::new(),
            factory_reset: FactoryReset::new(),
            net,
            ticker: SecondTicker::new(now_ms),
            page: Page::default(),
        }
    }

    pub const fn page(&self) -> Page { self.page }

    /// Advance the page carousel (nav switch release edge).
    pub fn next_page(&mut self) {
        self.page = self.page.next();
        debug!("page: {}", self.page.label());
    }

    /// Refresh live readings and push one history sample per elapsed whole
    /// second. Skipped entirely while the sensor is absent; the last known
    /// readings stay on display.
    pub fn service_sensor<S: EnvSensor>(
        &mut self,
        sensor: &mut S,
        now_ms: u64,
    ) {
        if !self.sensor_connected {
            return;
        }

        self.readings.temperature_c = sensor.read_temperature();
        self.readings.pressure_hpa = sensor.read_pressure() / 100.0;
        self.readings.humidity_pct = sensor.read_humidity();

        for _ in 0..self.ticker.poll(now_ms) {
            self.history.push(self.readings.temperature_c);
        }
    }

    /// Route one select-switch snapshot to the gesture owned by the current
    /// page. Gestures only charge while their page is shown.
    pub fn handle_select(
        &mut self,
        select: SwitchSnapshot,
    ) -> Option<StationEvent> {
        match self.page {
            Page::UpdateEnable => {
                if self.update_enable.update(select) {
                    info!(
                        "firmware update {}",
                        if self.update_enable.is_enabled() { "enabled" } else { "disabled" }
                    );
                }
                None
            }
            Page::FactoryReset => {
                if self.factory_reset.update(select.held) {
                    warn!("factory reset triggered");
                    Some(StationEvent::FactoryResetTriggered)
                } else {
                    None
                }
            }
            Page::Main | Page::Network => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HELD: SwitchSnapshot = SwitchSnapshot {
        held: true,
        pressed_edge: false,
        released_edge: false,
    };

    struct MockSensor {
        temperature: f32,
        reads: u32,
    }

    impl MockSensor {
        fn new(temperature: f32) -> Self {
            Self {
                temperature,
                reads: 0,
            }
        }
    }

    impl EnvSensor for MockSensor {
        fn begin(&mut self) -> bool { true }

        fn read_temperature(&mut self) -> f32 {
            self.reads += 1;
            self.temperature
        }

        fn read_pressure(&mut self) -> f32 { 101_325.0 }

        fn read_humidity(&mut self) -> f32 { 40.0 }
    }

    fn station(sensor_connected: bool) -> Station {
        Station::new(0, sensor_connected, NetworkInfo::new(0xABCDEF))
    }

    #[test]
    fn test_hostname_from_chip_id() {
        let net = NetworkInfo::new(0xABCDEF);
        assert_eq!(net.host.as_str(), "env280-abcdef");
        assert!(net.ip.is_empty());
    }

    #[test]
    fn test_absent_sensor_skips_reads_and_samples() {
        let mut sensor = MockSensor::new(21.0);
        let mut station = station(false);
        station.service_sensor(&mut sensor, 10_000);
        assert_eq!(sensor.reads, 0);
        assert!(station.history.is_empty());
        // Sentinels retained
        assert_eq!(station.readings.temperature_c, -1.0);
    }

    #[test]
    fn test_one_sample_per_elapsed_second() {
        let mut sensor = MockSensor::new(21.5);
        let mut station = station(true);
        station.service_sensor(&mut sensor, 500);
        assert!(station.history.is_empty());
        station.service_sensor(&mut sensor, 5000);
        assert_eq!(station.history.len(), 5);
        assert_eq!(station.history.newest(), Some(21.5));
        // Pressure converted to hPa for display
        assert!((station.readings.pressure_hpa - 1013.25).abs() < 0.01);
    }

    #[test]
    fn test_select_is_inert_off_gesture_pages() {
        let mut station = station(true);
        assert_eq!(station.page(), Page::Main);
        for _ in 0..500 {
            assert!(station.handle_select(HELD).is_none());
        }
        assert_eq!(station.factory_reset.ticks(), 0);
        assert_eq!(station.update_enable.ticks(), 0);
    }

    #[test]
    fn test_update_gesture_only_on_its_page() {
        let mut station = station(true);
        station.next_page(); // Network
        station.next_page(); // UpdateEnable
        for _ in 0..61 {
            station.handle_select(HELD);
        }
        assert!(station.update_enable.is_enabled());
        assert_eq!(station.factory_reset.ticks(), 0);
    }

    #[test]
    fn test_factory_reset_event_fires_once() {
        let mut station = station(true);
        station.next_page();
        station.next_page();
        station.next_page(); // FactoryReset
        assert_eq!(station.page(), Page::FactoryReset);

        let mut events = 0;
        for _ in 0..400 {
            if station.handle_select(HELD).is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 1);
    }
}
