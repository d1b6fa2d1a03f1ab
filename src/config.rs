//! Station configuration constants.
//!
//! Layout values are pre-computed as `const` so the rendering code never does
//! per-frame arithmetic for fixed UI elements. Coordinates are offsets from
//! the frame origin handed in by the paging engine, so frames keep working
//! during slide transitions.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (128x32 monochrome OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 32;

/// X position of both text lines, relative to the frame origin.
pub const TEXT_X: i32 = 2;

/// Y position of the upper text line.
pub const LINE1_Y: i32 = 5;

/// Y position of the lower text line.
pub const LINE2_Y: i32 = 20;

// =============================================================================
// Sampling Configuration
// =============================================================================

/// Number of per-second temperature samples kept for the graph.
/// At one sample per second this is just under two minutes of history,
/// matching the drawable width of the main frame.
pub const HISTORY_SIZE: usize = 112;

/// Interval between samples in milliseconds.
pub const SAMPLE_PERIOD_MS: u64 = 1000;

/// Upper bound on catch-up samples per scheduler poll. After a stall longer
/// than one full history (e.g. a firmware transfer), every older sample would
/// be overwritten anyway, so further catch-up pushes are discarded.
pub const MAX_CATCHUP_SAMPLES: u32 = HISTORY_SIZE as u32;

// =============================================================================
// Graph Configuration
// =============================================================================

/// Vertical pixels per unit of sample value (degrees Celsius).
pub const GRAPH_SCALE: f32 = 8.0;

/// Half-height of the graph band; samples scaling outside +-radius are
/// clamped and drawn dashed.
pub const GRAPH_RADIUS: i32 = 8;

/// Graph origin relative to the frame origin.
pub const GRAPH_ORIGIN_X: i32 = 3;

/// Graph baseline Y relative to the frame origin.
pub const GRAPH_ORIGIN_Y: i32 = 10;

/// Skip-window bounds around the newest sample in the static graph variant.
/// Raw samples in `[bi + CURSOR_CLEARANCE_BEFORE, bi + CURSOR_CLEARANCE_AFTER)`
/// are suppressed so the cursor marker has a clear visual slot.
pub const CURSOR_CLEARANCE_BEFORE: i32 = -2;
pub const CURSOR_CLEARANCE_AFTER: i32 = 8;

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Render ticks the select switch must be held to enable firmware updates.
pub const UPDATE_ENABLE_HOLD_TICKS: u16 = 60;

/// Render ticks the select switch must be held to trigger a factory reset.
pub const FACTORY_RESET_HOLD_TICKS: u16 = 300;

/// Ticks removed per released iteration. Four times the charge rate, so a
/// brief release barely dents a long hold while a sustained release resets
/// quickly.
pub const RELEASE_DECAY_TICKS: u16 = 4;

// =============================================================================
// Progress Bar Layout
// =============================================================================

/// Progress bar frame, relative to the frame origin.
pub const PROGRESS_FRAME_X: i32 = 3;
pub const PROGRESS_FRAME_Y: i32 = 24;
pub const PROGRESS_FRAME_W: u32 = 104;
pub const PROGRESS_FRAME_H: u32 = 6;

/// Progress bar fill inset: the fill starts two pixels inside the frame and
/// is two pixels tall, one pixel of fill per percent.
pub const PROGRESS_FILL_X: i32 = 5;
pub const PROGRESS_FILL_Y: i32 = 26;
pub const PROGRESS_FILL_H: u32 = 2;
