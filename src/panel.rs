//! Clock display on an FC16 module: four chained MAX7219 8x8 matrices.

use max7219::{connectors::Connector, DataError, MAX7219};

use crate::{
    config::PANEL_DEVICES,
    display::{Display, PanelScreen},
};

/// Buffers a [`PanelScreen`] and writes it to the chain on flush.
pub struct Max7219Panel<C> {
    driver: MAX7219<C>,
    frame: PanelScreen,
}

impl<C: Connector> Max7219Panel<C> {
    /// Powers the chain on and blanks every matrix.
    pub fn new(mut driver: MAX7219<C>, intensity: u8) -> Result<Self, DataError> {
        driver.power_on()?;
        for addr in 0..PANEL_DEVICES {
            driver.set_intensity(addr, intensity)?;
            driver.clear_display(addr)?;
        }
        Ok(Self {
            driver,
            frame: PanelScreen::new(),
        })
    }
}

impl<C: Connector> Display for Max7219Panel<C> {
    type Error = DataError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.frame = PanelScreen::new();
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: &[u8], x: u8, y: u8) -> Result<bool, Self::Error> {
        Ok(self.frame.xor_sprite(sprite, x, y))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let buffers = self.frame.fc16_devices();
        for (addr, buffer) in buffers.iter().enumerate() {
            self.driver.write_raw(addr, buffer)?;
        }
        Ok(())
    }
}
