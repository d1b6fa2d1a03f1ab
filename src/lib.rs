//! Environmental station core - testable firmware logic.
//!
//! This library contains the parts of the station firmware with real
//! algorithmic content: the per-second sampling ring buffer, the sparkline
//! graph tracer, and the long-press gesture state machines, plus the UI
//! frames that present them. The binary (`main.rs`, behind the `simulator`
//! feature) wires the library to a desktop display window; on the device the
//! same seams are filled by the sensor driver, the debounced switches, and
//! the OTA channel.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware builds as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod config;
pub mod frames;
pub mod gesture;
pub mod graph;
pub mod history;
pub mod input;
pub mod pages;
pub mod sampler;
pub mod sensor;
pub mod station;
pub mod styles;
pub mod update;
pub mod widgets;
