//! Frame transition animation.
//!
//! Page changes slide vertically: the outgoing frame moves up and off the
//! top while the incoming frame rises from below, both over
//! [`TRANSITION_MS`]. The offsets are a pure function of elapsed time, so the
//! render loop owns the clock and the animation needs no state of its own.

use embedded_graphics::prelude::Point;

/// Duration of one page slide in milliseconds.
pub const TRANSITION_MS: u64 = 400;

/// Frame origins for a slide in progress: `(outgoing, incoming)` offsets
/// from the display origin. Returns `None` once the transition is complete
/// and the incoming frame should draw at the display origin.
pub fn slide_offsets(
    elapsed_ms: u64,
    screen_height: u32,
) -> Option<(Point, Point)> {
    if elapsed_ms >= TRANSITION_MS {
        return None;
    }
    let height = i64::from(screen_height);
    let shift = (height * elapsed_ms as i64 / TRANSITION_MS as i64) as i32;
    Some((Point::new(0, -shift), Point::new(0, height as i32 - shift)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_endpoints() {
        // Start: outgoing in place, incoming one screen below
        assert_eq!(slide_offsets(0, 32), Some((Point::new(0, 0), Point::new(0, 32))));
        // End: transition complete
        assert_eq!(slide_offsets(TRANSITION_MS, 32), None);
        assert_eq!(slide_offsets(TRANSITION_MS + 1000, 32), None);
    }

    #[test]
    fn test_slide_midpoint() {
        assert_eq!(
            slide_offsets(TRANSITION_MS / 2, 32),
            Some((Point::new(0, -16), Point::new(0, 16)))
        );
    }

    #[test]
    fn test_slide_is_monotonic() {
        let mut last = 0;
        for elapsed in 0..TRANSITION_MS {
            let (outgoing, incoming) = slide_offsets(elapsed, 32).unwrap();
            // Frames stay one screen apart and only move upward
            assert_eq!(incoming.y - outgoing.y, 32);
            assert!(outgoing.y <= last);
            assert!(outgoing.y > -32);
            last = outgoing.y;
        }
    }
}
