//! Environmental station simulator for desktop.
//!
//! Runs the station core against the embedded-graphics simulator so the UI
//! can be exercised without hardware. Keyboard stands in for the two
//! switches:
//!
//! - `N`: nav switch (advance page)
//! - `S`: select switch (hold gestures)
//! - `U`: simulate a firmware transfer (only while updates are enabled)

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme,
    OutputSettingsBuilder,
    SimulatorDisplay,
    SimulatorEvent,
    Window,
};
use env_station::animations::slide_offsets;
use env_station::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use env_station::frames;
use env_station::input::{DebouncedSwitch, SwitchSnapshot};
use env_station::pages::Page;
use env_station::sensor::EnvSensor;
use env_station::station::{NetworkInfo, Station, StationEvent};
use env_station::update::{SystemControl, UpdateEvent, UpdateScreen, screen_for};
use env_station::widgets::{draw_status_message, draw_status_progress};

/// Target frame period (~50 FPS), which is also the gesture tick rate.
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Keyboard-backed stand-in for a debounced hardware switch. The simulator
/// delivers clean key events, so debouncing reduces to edge tracking.
struct KeySwitch {
    level: bool,
    prev: bool,
    pending: bool,
}

impl KeySwitch {
    const fn new() -> Self {
        Self {
            level: true,
            prev: true,
            pending: true,
        }
    }

    /// Record the key state from the event queue; picked up on `update()`.
    fn set_pressed(
        &mut self,
        pressed: bool,
    ) {
        self.pending = !pressed;
    }
}

impl DebouncedSwitch for KeySwitch {
    fn update(&mut self) {
        self.prev = self.level;
        self.level = self.pending;
    }

    fn read(&self) -> bool { self.level }

    fn rose(&self) -> bool { self.level && !self.prev }

    fn fell(&self) -> bool { !self.level && self.prev }
}

/// Slow sine waves standing in for a real environmental sensor.
struct SineSensor {
    started: Instant,
}

impl SineSensor {
    fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn phase(&self) -> f32 { self.started.elapsed().as_secs_f32() }
}

impl EnvSensor for SineSensor {
    fn begin(&mut self) -> bool { true }

    fn read_temperature(&mut self) -> f32 { 21.0 + 1.5 * (self.phase() * 0.11).sin() }

    fn read_pressure(&mut self) -> f32 { 101_300.0 + 150.0 * (self.phase() * 0.03).sin() }

    fn read_humidity(&mut self) -> f32 { 45.0 + 8.0 * (self.phase() * 0.05).sin() }
}

/// Process-level stand-ins for the chip's erase and reset primitives.
struct SimControl;

impl SystemControl for SimControl {
    fn erase_config(&mut self) {
        log::info!("config erased");
    }

    fn restart(&mut self) -> ! {
        log::info!("restart requested, exiting");
        std::process::exit(0);
    }
}

fn draw_update_screen(
    display: &mut SimulatorDisplay<BinaryColor>,
    window: &mut Window,
    event: UpdateEvent,
) {
    display.clear(BinaryColor::Off).ok();
    match screen_for(event) {
        UpdateScreen::Message(line1, line2) => draw_status_message(display, line1, line2),
        UpdateScreen::Progress(line1, percent) => draw_status_progress(display, line1, percent),
    }
    window.update(display);
}

/// Play a fake firmware transfer, then "restart".
fn run_simulated_update(
    display: &mut SimulatorDisplay<BinaryColor>,
    window: &mut Window,
    control: &mut SimControl,
) -> ! {
    const TOTAL_BYTES: u32 = 420_000;

    draw_update_screen(display, window, UpdateEvent::Start);
    thread::sleep(Duration::from_millis(400));

    let mut current = 0;
    while current < TOTAL_BYTES {
        current = (current + 8_400).min(TOTAL_BYTES);
        draw_update_screen(
            display,
            window,
            UpdateEvent::Progress {
                current,
                total: TOTAL_BYTES,
            },
        );
        thread::sleep(Duration::from_millis(40));
    }

    draw_update_screen(display, window, UpdateEvent::End);
    thread::sleep(Duration::from_secs(1));
    control.restart()
}

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut window = Window::new("Env Station Sim", &output_settings);

    // Boot screen, in place of the provisioning wait on the device
    display.clear(BinaryColor::Off).ok();
    draw_status_message(&mut display, "WiFi connecting", "Please wait...");
    window.update(&display);
    thread::sleep(Duration::from_millis(800));

    let mut sensor = SineSensor::new();
    let sensor_connected = sensor.begin();
    let mut control = SimControl;

    let mut net = NetworkInfo::new(0x00C0FE);
    net.set_ip("192.168.1.42");

    let started = Instant::now();
    let mut station = Station::new(0, sensor_connected, net);

    let mut nav_switch = KeySwitch::new();
    let mut select_switch = KeySwitch::new();

    let frame_table = frames::all::<SimulatorDisplay<BinaryColor>>();
    let mut transition: Option<(Page, Instant)> = None;

    'main: loop {
        // The event iterator borrows the window, so the update run is
        // deferred until after event handling
        let mut update_requested = false;
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'main,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::N => nav_switch.set_pressed(true),
                        Keycode::S => select_switch.set_pressed(true),
                        Keycode::U => update_requested = true,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::N => nav_switch.set_pressed(false),
                    Keycode::S => select_switch.set_pressed(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if update_requested {
            if station.update_enable.is_enabled() {
                run_simulated_update(&mut display, &mut window, &mut control);
            }
            log::warn!("update ignored: not enabled");
        }

        let nav = SwitchSnapshot::capture(&mut nav_switch);
        let select = SwitchSnapshot::capture(&mut select_switch);

        if nav.released_edge {
            transition = Some((station.page(), Instant::now()));
            station.next_page();
        }

        if let Some(StationEvent::FactoryResetTriggered) = station.handle_select(select) {
            control.erase_config();
            display.clear(BinaryColor::Off).ok();
            draw_status_message(&mut display, "Settings reset", "Restarting...");
            window.update(&display);
            thread::sleep(Duration::from_secs(1));
            control.restart();
        }

        station.service_sensor(&mut sensor, started.elapsed().as_millis() as u64);

        display.clear(BinaryColor::Off).ok();
        let current = frame_table[station.page().index()];
        match transition {
            Some((outgoing, transition_start)) => {
                match slide_offsets(transition_start.elapsed().as_millis() as u64, SCREEN_HEIGHT) {
                    Some((out_offset, in_offset)) => {
                        frame_table[outgoing.index()].draw(&mut display, out_offset, &station);
                        current.draw(&mut display, in_offset, &station);
                    }
                    None => {
                        transition = None;
                        current.draw(&mut display, Point::zero(), &station);
                    }
                }
            }
            None => current.draw(&mut display, Point::zero(), &station),
        }
        window.update(&display);

        thread::sleep(FRAME_TIME);
    }
}
