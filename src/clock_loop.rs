use core::convert::Infallible;

use crate::{clock::TimeState, display::Display, renderer::Renderer, ticker::Ticker};

/// Where the loop is within one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Rendering,
    Advancing,
    Waiting,
}

/// Render, advance, wait, forever.
///
/// Owns the time of day; nothing else mutates it.
pub struct ClockLoop<D, T> {
    state: TimeState,
    phase: Phase,
    renderer: Renderer,
    display: D,
    ticker: T,
}

impl<D, T> ClockLoop<D, T>
where
    D: Display,
    T: Ticker,
{
    /// Starts at `00:00:00`.
    pub fn new(renderer: Renderer, display: D, ticker: T) -> Self {
        Self::with_state(TimeState::default(), renderer, display, ticker)
    }

    pub fn with_state(state: TimeState, renderer: Renderer, display: D, ticker: T) -> Self {
        Self {
            state,
            phase: Phase::Rendering,
            renderer,
            display,
            ticker,
        }
    }

    pub fn state(&self) -> &TimeState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Runs the current phase and moves to the next one.
    pub fn step(&mut self) -> Result<Phase, D::Error> {
        self.phase = match self.phase {
            Phase::Rendering => {
                self.renderer.render(&self.state, &mut self.display)?;
                Phase::Advancing
            }
            Phase::Advancing => {
                let before = self.state;
                self.state.advance();
                if self.state.minutes != before.minutes {
                    debug!("minute rollover: {}", self.state);
                }
                Phase::Waiting
            }
            Phase::Waiting => {
                self.ticker.wait_one_tick();
                Phase::Rendering
            }
        };
        Ok(self.phase)
    }

    /// Steps until the loop is back at [`Phase::Rendering`].
    pub fn cycle(&mut self) -> Result<(), D::Error> {
        while self.step()? != Phase::Rendering {}
        Ok(())
    }

    /// Never returns unless the display fails.
    pub fn run(&mut self) -> Result<Infallible, D::Error> {
        let mut buf = [0u8; 8];
        info!("clock running from {=str}", self.state.hms(&mut buf));
        loop {
            if let Err(err) = self.cycle() {
                error!("display failed at {}", self.state);
                return Err(err);
            }
        }
    }

    pub fn into_parts(self) -> (TimeState, D, T) {
        (self.state, self.display, self.ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::Chip8Screen,
        renderer::Layout,
        ticker::{CountdownTicker, SimulatedDelayTimer},
    };

    fn clock_at(state: TimeState) -> ClockLoop<Chip8Screen, CountdownTicker<SimulatedDelayTimer>> {
        ClockLoop::with_state(
            state,
            Renderer::new(Layout::CHIP8),
            Chip8Screen::new(),
            CountdownTicker::new(SimulatedDelayTimer::new()),
        )
    }

    #[test]
    fn phases_cycle_in_order() {
        let mut clock = clock_at(TimeState::default());
        assert_eq!(clock.phase(), Phase::Rendering);
        assert_eq!(clock.step(), Ok(Phase::Advancing));
        assert_eq!(clock.step(), Ok(Phase::Waiting));
        assert_eq!(clock.step(), Ok(Phase::Rendering));
    }

    #[test]
    fn render_happens_before_advance() {
        let mut clock = clock_at(TimeState::new(0, 0, 5));
        clock.step().unwrap();
        assert_eq!(clock.state(), &TimeState::new(0, 0, 5));
        assert_eq!(clock.display().glyph_at(50, 13), Some(5));

        clock.step().unwrap();
        assert_eq!(clock.state(), &TimeState::new(0, 0, 6));
        // Screen still shows the previous second until the next render.
        assert_eq!(clock.display().glyph_at(50, 13), Some(5));
    }

    #[test]
    fn each_cycle_waits_one_tick() {
        let mut clock = clock_at(TimeState::default());
        for _ in 0..3 {
            clock.cycle().unwrap();
        }
        assert_eq!(clock.ticker().timer().elapsed(), 180);

        let (state, _, _) = clock.into_parts();
        assert_eq!(state, TimeState::new(0, 0, 3));
    }

    struct FailingDisplay;

    impl Display for FailingDisplay {
        type Error = &'static str;

        fn clear(&mut self) -> Result<(), Self::Error> {
            Err("unplugged")
        }

        fn draw_sprite(&mut self, _: &[u8], _: u8, _: u8) -> Result<bool, Self::Error> {
            Err("unplugged")
        }
    }

    #[test]
    fn run_stops_on_display_failure() {
        let mut clock = ClockLoop::new(
            Renderer::default(),
            FailingDisplay,
            CountdownTicker::new(SimulatedDelayTimer::new()),
        );
        assert_eq!(clock.run().err(), Some("unplugged"));
        assert_eq!(clock.state(), &TimeState::default());
    }
}
