//! Widget components for the station display.
//!
//! Every draw function is generic over `DrawTarget<Color = BinaryColor>`, so
//! the same code renders to the SSD1306 driver on the device, the SDL window
//! in the simulator, and `MockDisplay` in tests. Draw errors are swallowed
//! with `.ok()`: a dropped pixel is repainted on the next frame, and there is
//! no useful recovery mid-frame.
//!
//! All widgets take an `origin` offset so they keep working while the paging
//! engine slides frames vertically during a transition.

mod primitives;

pub use primitives::{
    draw_line_pair,
    draw_progress_bar,
    draw_status_message,
    draw_status_progress,
    draw_text_left,
    draw_text_right,
    draw_trace,
};
