/// Tens and units of a two-digit decimal counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDigits {
    pub tens: u8,
    pub units: u8,
}

impl DisplayDigits {
    /// Both digits, most significant first.
    pub const fn pair(self) -> [u8; 2] {
        [self.tens, self.units]
    }
}

/// Splits `n` in `0..100` into its decimal digits.
///
/// The glyph set only holds single hex digits, so a two-digit count is drawn
/// as two glyphs. Values of 100 and above are not decomposed meaningfully.
pub const fn decompose(n: u8) -> DisplayDigits {
    debug_assert!(n < 100);
    DisplayDigits {
        tens: n / 10,
        units: n % 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_two_digit_value_recomposes() {
        for n in 0..100u8 {
            let digits = decompose(n);
            assert_eq!(digits, DisplayDigits { tens: n / 10, units: n % 10 });
            assert!(digits.tens <= 9 && digits.units <= 9);
            assert_eq!(10 * digits.tens + digits.units, n);
        }
    }

    #[test]
    fn pair_is_tens_first() {
        assert_eq!(decompose(42).pair(), [4, 2]);
        assert_eq!(decompose(7).pair(), [0, 7]);
    }
}
