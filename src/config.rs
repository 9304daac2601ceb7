//! Compile-time settings for the clock and its firmware target.

use crate::clock::TimeState;

/// Rate at which the delay timer register counts down.
pub const DELAY_TIMER_HZ: u32 = 60;

/// Value loaded into the delay timer for one tick (one second).
pub const TICK_RELOAD: u8 = 60;

/// Length of one delay timer decrement in microseconds, truncated.
pub const DECREMENT_PERIOD_US: u32 = 1_000_000 / DELAY_TIMER_HZ;

/// Tick length for blocking-delay tickers.
pub const TICK_MS: u32 = 1_000;

/// Time shown on power-up.
pub const START_TIME: TimeState = TimeState::new(0, 0, 0);

/// Crystal on the Pico board.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// SPI clock for the MAX7219 chain.
pub const SPI_BAUD_HZ: u32 = 2_000_000;

/// Number of chained 8x8 MAX7219 matrices (FC16 module).
pub const PANEL_DEVICES: usize = 4;

/// MAX7219 brightness, 0x0..=0xF.
pub const PANEL_INTENSITY: u8 = 0x0;
