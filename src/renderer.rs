use heapless::Vec;

use crate::{
    bcd::decompose,
    clock::TimeState,
    display::Display,
    font::{GLYPH_WIDTH, SEPARATOR},
};

/// Top-left corner of a drawn quantity, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPosition {
    pub x: u8,
    pub y: u8,
}

impl ScreenPosition {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Where each two-digit group goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub hours: ScreenPosition,
    pub minutes: ScreenPosition,
    pub seconds: ScreenPosition,
    /// Gap between the tens and units glyph of a group.
    pub digit_spacing: u8,
    pub separators: Option<[ScreenPosition; 2]>,
}

impl Layout {
    /// `HH:MM:SS` centred on the 64x32 screen.
    pub const CHIP8: Layout = Layout {
        hours: ScreenPosition::new(9, 13),
        minutes: ScreenPosition::new(27, 13),
        seconds: ScreenPosition::new(45, 13),
        digit_spacing: 1,
        separators: Some([ScreenPosition::new(22, 13), ScreenPosition::new(40, 13)]),
    };

    /// `HH MM SS` across four chained 8x8 matrices.
    pub const PANEL: Layout = Layout {
        hours: ScreenPosition::new(1, 1),
        minutes: ScreenPosition::new(12, 1),
        seconds: ScreenPosition::new(23, 1),
        digit_spacing: 1,
        separators: None,
    };

    /// X offset from a tens glyph to its units glyph.
    pub const fn units_offset(&self) -> u8 {
        GLYPH_WIDTH + self.digit_spacing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCall {
    Digit { digit: u8, at: ScreenPosition },
    Separator { at: ScreenPosition },
}

/// Draws a [`TimeState`] as three two-digit decimal groups.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    layout: Layout,
}

impl Renderer {
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw calls for one frame: hours, minutes, seconds (tens then units),
    /// then the separators.
    pub fn plan(&self, state: &TimeState) -> Vec<DrawCall, 8> {
        let mut calls = Vec::new();
        let groups = [
            (state.hours % 100, self.layout.hours),
            (state.minutes, self.layout.minutes),
            (state.seconds, self.layout.seconds),
        ];

        for (value, at) in groups {
            let digits = decompose(value);
            let units_at = ScreenPosition::new(at.x.wrapping_add(self.layout.units_offset()), at.y);
            calls.extend([
                DrawCall::Digit {
                    digit: digits.tens,
                    at,
                },
                DrawCall::Digit {
                    digit: digits.units,
                    at: units_at,
                },
            ]);
        }

        if let Some(separators) = self.layout.separators {
            calls.extend(separators.map(|at| DrawCall::Separator { at }));
        }

        calls
    }

    /// Clears the display and redraws the whole time.
    pub fn render<D: Display>(&self, state: &TimeState, display: &mut D) -> Result<(), D::Error> {
        display.clear()?;
        for call in self.plan(state) {
            match call {
                DrawCall::Digit { digit, at } => display.draw_digit(digit, at.x, at.y)?,
                DrawCall::Separator { at } => display.draw_sprite(&SEPARATOR, at.x, at.y)?,
            };
        }
        trace!("rendered {}", state);
        display.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Layout::CHIP8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Chip8Screen, PanelScreen};

    fn digit(digit: u8, x: u8, y: u8) -> DrawCall {
        DrawCall::Digit {
            digit,
            at: ScreenPosition::new(x, y),
        }
    }

    #[test]
    fn plans_groups_in_visual_order() {
        let renderer = Renderer::new(Layout::PANEL);
        let calls = renderer.plan(&TimeState::new(12, 34, 56));
        assert_eq!(
            calls.as_slice(),
            &[
                digit(1, 1, 1),
                digit(2, 6, 1),
                digit(3, 12, 1),
                digit(4, 17, 1),
                digit(5, 23, 1),
                digit(6, 28, 1),
            ]
        );
    }

    #[test]
    fn separators_follow_the_digits() {
        let calls = Renderer::default().plan(&TimeState::default());
        assert_eq!(calls.len(), 8);
        assert_eq!(
            calls[6],
            DrawCall::Separator {
                at: ScreenPosition::new(22, 13)
            }
        );
    }

    #[test]
    fn counters_above_fifteen_use_decimal_glyphs() {
        let renderer = Renderer::default();
        let mut screen = Chip8Screen::new();
        renderer.render(&TimeState::new(23, 45, 59), &mut screen).unwrap();

        let layout = renderer.layout();
        let off = layout.units_offset();
        let shown = [layout.hours, layout.minutes, layout.seconds]
            .map(|at| (screen.glyph_at(at.x, at.y), screen.glyph_at(at.x + off, at.y)));
        assert_eq!(
            shown,
            [(Some(2), Some(3)), (Some(4), Some(5)), (Some(5), Some(9))]
        );
    }

    #[test]
    fn hours_past_ninety_nine_stay_decimal() {
        let calls = Renderer::default().plan(&TimeState::new(123, 0, 0));
        assert_eq!(calls[0], digit(2, 9, 13));
        assert_eq!(calls[1], digit(3, 14, 13));
    }

    #[test]
    fn rendering_after_clear_is_repeatable() {
        let renderer = Renderer::new(Layout::PANEL);
        let state = TimeState::new(8, 0, 41);
        let mut screen = PanelScreen::new();

        renderer.render(&state, &mut screen).unwrap();
        let first = screen.clone();
        renderer.render(&state, &mut screen).unwrap();
        assert_eq!(screen, first);
        assert!(first.lit_count() > 0);
    }

    #[test]
    fn units_position_wraps_past_the_coordinate_range() {
        let layout = Layout {
            hours: ScreenPosition::new(253, 13),
            ..Layout::CHIP8
        };
        let renderer = Renderer::new(layout);
        let state = TimeState::new(12, 0, 0);
        assert_eq!(renderer.plan(&state)[1], digit(2, 2, 13));

        let mut screen = Chip8Screen::new();
        renderer.render(&state, &mut screen).unwrap();
        assert_eq!(screen.glyph_at(2, 13), Some(2));
    }

    #[test]
    fn layouts_fit_their_screens() {
        for (layout, width) in [(Layout::CHIP8, 64u8), (Layout::PANEL, 32)] {
            let right = layout.seconds.x + layout.units_offset() + GLYPH_WIDTH;
            assert!(right <= width);
        }
    }
}
