//! Fixed-cadence waiting on the machine's delay timer.

use embedded_hal::blocking::delay::DelayMs;

use crate::config::{DECREMENT_PERIOD_US, TICK_MS, TICK_RELOAD};

/// Countdown register that decrements at [`DELAY_TIMER_HZ`](crate::config::DELAY_TIMER_HZ)
/// until it reaches zero.
pub trait DelayTimer {
    fn load(&mut self, ticks: u8);
    fn read(&mut self) -> u8;
}

/// Blocks for one clock tick. The wait always runs to completion.
pub trait Ticker {
    fn wait_one_tick(&mut self);
}

impl<T: Ticker + ?Sized> Ticker for &mut T {
    fn wait_one_tick(&mut self) {
        (**self).wait_one_tick()
    }
}

/// Loads the delay timer and spins until it reads zero.
#[derive(Debug)]
pub struct CountdownTicker<T> {
    timer: T,
    reload: u8,
}

impl<T: DelayTimer> CountdownTicker<T> {
    pub fn new(timer: T) -> Self {
        Self::with_reload(timer, TICK_RELOAD)
    }

    pub fn with_reload(timer: T, reload: u8) -> Self {
        Self { timer, reload }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn into_inner(self) -> T {
        self.timer
    }
}

impl<T: DelayTimer> Ticker for CountdownTicker<T> {
    fn wait_one_tick(&mut self) {
        self.timer.load(self.reload);
        while self.timer.read() != 0 {
            core::hint::spin_loop();
        }
    }
}

/// Delay timer that advances one decrement per read, so waits finish
/// instantly. Keeps a running count of decrements.
#[derive(Debug, Default, Clone)]
pub struct SimulatedDelayTimer {
    remaining: u8,
    elapsed: u64,
}

impl SimulatedDelayTimer {
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            elapsed: 0,
        }
    }

    /// Decrements observed since creation.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl DelayTimer for SimulatedDelayTimer {
    fn load(&mut self, ticks: u8) {
        self.remaining = ticks;
    }

    fn read(&mut self) -> u8 {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.elapsed += 1;
        }
        self.remaining
    }
}

/// Free-running microsecond counter, allowed to wrap.
pub trait MicrosSource {
    fn now_micros(&mut self) -> u32;
}

impl<F: FnMut() -> u32> MicrosSource for F {
    fn now_micros(&mut self) -> u32 {
        self()
    }
}

/// Delay timer derived from a microsecond counter.
#[derive(Debug)]
pub struct ClockedDelayTimer<S> {
    source: S,
    loaded: u8,
    loaded_at: u32,
}

impl<S: MicrosSource> ClockedDelayTimer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: 0,
            loaded_at: 0,
        }
    }
}

impl<S: MicrosSource> DelayTimer for ClockedDelayTimer<S> {
    fn load(&mut self, ticks: u8) {
        self.loaded_at = self.source.now_micros();
        self.loaded = ticks;
    }

    fn read(&mut self) -> u8 {
        let elapsed = self.source.now_micros().wrapping_sub(self.loaded_at);
        let decrements = (elapsed / DECREMENT_PERIOD_US).min(u8::MAX as u32) as u8;
        self.loaded.saturating_sub(decrements)
    }
}

/// One blocking delay per tick instead of polling a countdown.
#[derive(Debug)]
pub struct DelayTicker<D> {
    delay: D,
}

impl<D: DelayMs<u32>> DelayTicker<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayMs<u32>> Ticker for DelayTicker<D> {
    fn wait_one_tick(&mut self) {
        self.delay.delay_ms(TICK_MS);
    }
}
