//! Digital clock for a tiny CHIP-8 style machine: a register-held time of
//! day, rendered once per second with the built-in hex glyphs and advanced
//! by counting delay-timer ticks.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod bcd;
pub mod clock;
pub mod clock_loop;
pub mod config;
pub mod display;
pub mod font;
#[cfg(feature = "max7219")]
pub mod panel;
pub mod renderer;
pub mod ticker;

pub use bcd::{decompose, DisplayDigits};
pub use clock::TimeState;
pub use clock_loop::{ClockLoop, Phase};
pub use display::{Chip8Screen, Display, FrameBuffer, PanelScreen};
pub use renderer::{DrawCall, Layout, Renderer, ScreenPosition};
pub use ticker::{CountdownTicker, DelayTicker, DelayTimer, SimulatedDelayTimer, Ticker};
