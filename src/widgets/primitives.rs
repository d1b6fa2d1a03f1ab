//! Low-level drawing primitives shared across frames.
//!
//! Text is drawn with the static styles from [`crate::styles`]; geometry
//! comes in pre-computed from [`crate::config`] or from a
//! [`SparklineTrace`](crate::graph::SparklineTrace). Each function takes the
//! frame `origin` handed down by the paging engine and offsets everything by
//! it, which is what makes slide transitions free for the widgets.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::config::{
    LINE1_Y,
    LINE2_Y,
    PROGRESS_FILL_H,
    PROGRESS_FILL_X,
    PROGRESS_FILL_Y,
    PROGRESS_FRAME_H,
    PROGRESS_FRAME_W,
    PROGRESS_FRAME_X,
    PROGRESS_FRAME_Y,
    TEXT_X,
};
use crate::graph::SparklineTrace;
use crate::styles::{LEFT_ALIGNED, RIGHT_ALIGNED, TEXT_STYLE};

/// Diameter of the cursor marker circle over the newest sample.
const CURSOR_DIAMETER: u32 = 3;

/// Draw left-aligned text with its top-left corner at `origin + position`.
pub fn draw_text_left<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    origin: Point,
    position: Point,
    text: &str,
) {
    Text::with_text_style(text, origin + position, TEXT_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw right-aligned text ending at `origin + position`. Numeric readouts
/// use this so the units after them never shift as digits come and go.
pub fn draw_text_right<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    origin: Point,
    position: Point,
    text: &str,
) {
    Text::with_text_style(text, origin + position, TEXT_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the standard two-line layout used by every non-graph frame.
pub fn draw_line_pair<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    origin: Point,
    line1: &str,
    line2: &str,
) {
    draw_text_left(display, origin, Point::new(TEXT_X, LINE1_Y), line1);
    draw_text_left(display, origin, Point::new(TEXT_X, LINE2_Y), line2);
}

/// Draw the hold/transfer progress bar: a 1px outline frame with a 2px-tall
/// fill inset by two pixels, one pixel of fill per percent.
pub fn draw_progress_bar<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    origin: Point,
    percent: u16,
) {
    Rectangle::new(
        origin + Point::new(PROGRESS_FRAME_X, PROGRESS_FRAME_Y),
        Size::new(PROGRESS_FRAME_W, PROGRESS_FRAME_H),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(display)
    .ok();

    let fill = u32::from(percent.min(100));
    if fill > 0 {
        Rectangle::new(
            origin + Point::new(PROGRESS_FILL_X, PROGRESS_FILL_Y),
            Size::new(fill, PROGRESS_FILL_H),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)
        .ok();
    }
}

/// Plot a sparkline trace with its graph origin at `origin`.
///
/// Samples are single pixels; the cursor is a small outline circle over the
/// newest sample, with an extra center pixel when the trace asks for
/// emphasis.
pub fn draw_trace<D: DrawTarget<Color = BinaryColor>, const N: usize>(
    display: &mut D,
    origin: Point,
    trace: &SparklineTrace<N>,
) {
    for point in &trace.points {
        Pixel(origin + *point, BinaryColor::On).draw(display).ok();
    }

    if let Some(cursor) = trace.cursor {
        let center = origin + cursor.offset;
        Circle::with_center(center, CURSOR_DIAMETER)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)
            .ok();
        if cursor.emphasize {
            Pixel(center, BinaryColor::On).draw(display).ok();
        }
    }
}

/// Full-screen two-line status message (boot, update, reset screens). These
/// bypass the paging engine, so the origin is always the display origin.
pub fn draw_status_message<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    line1: &str,
    line2: &str,
) {
    draw_line_pair(display, Point::zero(), line1, line2);
}

/// Full-screen status line with the transfer progress bar underneath.
pub fn draw_status_progress<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    line1: &str,
    percent: u16,
) {
    draw_text_left(display, Point::zero(), Point::new(TEXT_X, LINE1_Y), line1);
    draw_progress_bar(display, Point::zero(), percent);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use heapless::Vec;

    use super::*;
    use crate::graph::Cursor;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_trace_points_are_offset_by_origin() {
        let mut display = display();
        let trace: SparklineTrace<4> = SparklineTrace {
            points: Vec::from_slice(&[Point::new(2, -3)]).unwrap(),
            cursor: None,
        };
        draw_trace(&mut display, Point::new(10, 20), &trace);
        assert_eq!(display.get_pixel(Point::new(12, 17)), Some(BinaryColor::On));
    }

    #[test]
    fn test_cursor_emphasis_fills_center() {
        let mut display = display();
        let trace: SparklineTrace<4> = SparklineTrace {
            points: Vec::new(),
            cursor: Some(Cursor {
                offset: Point::new(0, 0),
                emphasize: true,
            }),
        };
        draw_trace(&mut display, Point::new(20, 20), &trace);
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(BinaryColor::On));
    }

    #[test]
    fn test_cursor_without_emphasis_leaves_center_clear() {
        let mut display = display();
        let trace: SparklineTrace<4> = SparklineTrace {
            points: Vec::new(),
            cursor: Some(Cursor {
                offset: Point::new(0, 0),
                emphasize: false,
            }),
        };
        draw_trace(&mut display, Point::new(20, 20), &trace);
        assert_eq!(display.get_pixel(Point::new(20, 20)), None);
    }

    #[test]
    fn test_progress_bar_fill_tracks_percent() {
        let mut display = display();
        draw_progress_bar(&mut display, Point::zero(), 40);
        // Frame corner
        assert_eq!(
            display.get_pixel(Point::new(PROGRESS_FRAME_X, PROGRESS_FRAME_Y)),
            Some(BinaryColor::On)
        );
        // Fill present at pixel 39, absent at pixel 40
        assert_eq!(
            display.get_pixel(Point::new(PROGRESS_FILL_X + 39, PROGRESS_FILL_Y)),
            Some(BinaryColor::On)
        );
        assert_eq!(display.get_pixel(Point::new(PROGRESS_FILL_X + 40, PROGRESS_FILL_Y)), None);
    }

    #[test]
    fn test_progress_bar_clamps_overshoot() {
        let mut display = display();
        // Shift left so the 100-pixel fill boundary lands inside the 64x64
        // mock display area
        let origin = Point::new(-50, -20);
        draw_progress_bar(&mut display, origin, 250);
        // Clamped to 100 pixels of fill: last fill pixel at x offset 99
        assert_eq!(
            display.get_pixel(origin + Point::new(PROGRESS_FILL_X + 99, PROGRESS_FILL_Y)),
            Some(BinaryColor::On)
        );
        assert_eq!(display.get_pixel(origin + Point::new(PROGRESS_FILL_X + 100, PROGRESS_FILL_Y)), None);
    }

    #[test]
    fn test_zero_percent_draws_frame_only() {
        let mut display = display();
        draw_progress_bar(&mut display, Point::zero(), 0);
        assert_eq!(display.get_pixel(Point::new(PROGRESS_FILL_X, PROGRESS_FILL_Y)), None);
    }
}
