//! The four station frames and their frame table.
//!
//! Frames are trait objects rather than function pointers so the paging
//! engine can hold a homogeneous table while each frame stays a plain unit
//! struct. Frames are pure views: they read the [`Station`] and draw, with
//! no hidden state, so gesture bookkeeping cannot leak into rendering.
//!
//! All coordinates are relative to the `origin` handed in by the paging
//! engine, which is offset during slide transitions.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use heapless::String;

use crate::config::{GRAPH_ORIGIN_X, GRAPH_ORIGIN_Y, GRAPH_RADIUS, GRAPH_SCALE, LINE1_Y, LINE2_Y, TEXT_X};
use crate::graph;
use crate::pages::PAGE_COUNT;
use crate::station::Station;
use crate::widgets::{draw_line_pair, draw_progress_bar, draw_text_left, draw_text_right, draw_trace};

/// One page's renderer. Indexed by [`crate::pages::Page::index`].
pub trait Frame<D: DrawTarget<Color = BinaryColor>> {
    fn draw(
        &self,
        display: &mut D,
        origin: Point,
        station: &Station,
    );
}

/// The frame table, in carousel order.
pub fn all<D: DrawTarget<Color = BinaryColor> + 'static>() -> [&'static dyn Frame<D>; PAGE_COUNT] {
    [&MainFrame, &NetworkFrame, &UpdateFrame, &ResetFrame]
}

// =============================================================================
// Main Frame
// =============================================================================

/// Temperature sparkline plus live temperature, humidity, and pressure.
pub struct MainFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for MainFrame {
    fn draw(
        &self,
        display: &mut D,
        origin: Point,
        station: &Station,
    ) {
        let trace = graph::trace_static(
            &station.history,
            station.readings.temperature_c,
            GRAPH_SCALE,
            GRAPH_RADIUS,
        );
        draw_trace(display, origin + Point::new(GRAPH_ORIGIN_X, GRAPH_ORIGIN_Y), &trace);

        let mut line: String<16> = String::new();

        let _ = write!(line, "{:4.1}", station.readings.temperature_c);
        draw_text_right(display, origin, Point::new(24, LINE2_Y), &line);
        draw_text_left(display, origin, Point::new(24, LINE2_Y), " C");
        // Degree mark: a 1px-radius circle next to the unit
        Circle::with_center(origin + Point::new(26, 22), 3)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)
            .ok();

        line.clear();
        let _ = write!(line, "{:2.0}", station.readings.humidity_pct);
        draw_text_right(display, origin, Point::new(55, LINE2_Y), &line);
        draw_text_left(display, origin, Point::new(55, LINE2_Y), "%");

        line.clear();
        let _ = write!(line, "{:4.0}", station.readings.pressure_hpa);
        draw_text_right(display, origin, Point::new(96, LINE2_Y), &line);
        draw_text_left(display, origin, Point::new(96, LINE2_Y), "hPa");
    }
}

// =============================================================================
// Network Frame
// =============================================================================

/// IP address and device hostname.
pub struct NetworkFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for NetworkFrame {
    fn draw(
        &self,
        display: &mut D,
        origin: Point,
        station: &Station,
    ) {
        draw_text_right(display, origin, Point::new(16, LINE1_Y), "ip:");
        draw_text_right(display, origin, Point::new(16, LINE2_Y), "id:");

        let ip = if station.net.ip.is_empty() { "-" } else { station.net.ip.as_str() };
        draw_text_right(display, origin, Point::new(105, LINE1_Y), ip);
        draw_text_right(display, origin, Point::new(105, LINE2_Y), &station.net.host);
    }
}

// =============================================================================
// Update-Enable Frame
// =============================================================================

/// Firmware update enable state and hold progress.
pub struct UpdateFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for UpdateFrame {
    fn draw(
        &self,
        display: &mut D,
        origin: Point,
        station: &Station,
    ) {
        if station.update_enable.is_enabled() {
            draw_line_pair(display, origin, "Update ENABLED", "Press select to disable");
        } else {
            draw_text_left(display, origin, Point::new(TEXT_X, LINE1_Y), "Update DISABLED");
            if station.update_enable.ticks() == 0 {
                draw_text_left(display, origin, Point::new(TEXT_X, LINE2_Y), "Hold select to enable");
            } else {
                draw_progress_bar(display, origin, station.update_enable.progress_percent());
            }
        }
    }
}

// =============================================================================
// Factory-Reset Frame
// =============================================================================

/// Factory reset hint and hold progress.
pub struct ResetFrame;

impl<D: DrawTarget<Color = BinaryColor>> Frame<D> for ResetFrame {
    fn draw(
        &self,
        display: &mut D,
        origin: Point,
        station: &Station,
    ) {
        draw_text_left(display, origin, Point::new(TEXT_X, LINE1_Y), "Reset settings");
        if station.factory_reset.ticks() == 0 {
            draw_text_left(display, origin, Point::new(TEXT_X, LINE2_Y), "Hold select to reset");
        } else {
            draw_progress_bar(display, origin, station.factory_reset.progress_percent());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
