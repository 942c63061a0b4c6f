use log::info;

use crate::band::{BandEngine, Transport};
use crate::config::Config;
use crate::input::{InputSource, Inputs};

/// Everything attached to the controller board: the LED band and the inputs.
///
/// Platform crates build one at start-up from their `Transport` and
/// `InputSource` and pass it to whatever needs the hardware. Handlers
/// registered through [`Inputs::on_event`] cannot borrow the board, so they
/// never run a band operation in the middle of another one.
pub struct Board<T, I> {
    band: BandEngine<T>,
    inputs: Inputs<I>,
}

impl<T: Transport, I: InputSource> Board<T, I> {
    pub fn new(config: &Config, transport: T, source: I) -> Self {
        let strip = &config.strip;
        info!(
            "board: {} LEDs on pin {}, brightness {}, {:?} updates",
            strip.length, strip.data_pin, strip.brightness, strip.update_mode
        );
        Self {
            band: BandEngine::with_mode(
                transport,
                strip.length,
                strip.brightness_level(),
                strip.update_mode,
            ),
            inputs: Inputs::new(source, config.channels.clone()),
        }
    }

    pub fn band(&self) -> &BandEngine<T> {
        &self.band
    }

    pub fn band_mut(&mut self) -> &mut BandEngine<T> {
        &mut self.band
    }

    pub fn inputs(&self) -> &Inputs<I> {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut Inputs<I> {
        &mut self.inputs
    }
}
