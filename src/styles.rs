//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` values are `const`, so the compiler places
//! them in read-only data and draw functions reference them without runtime
//! construction. The display is a 1-bit OLED, so there is exactly one pixel
//! style: `ProFont` 7pt in [`BinaryColor::On`].

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_7_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text, anchored at the glyph top. Used for labels and units.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text, anchored at the glyph top. Used for numeric readouts
/// so the decimal point stays put as values change width.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// The one character style on the panel: `ProFont` 7pt, pixels on.
pub const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On);
