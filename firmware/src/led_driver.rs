use bitcommander_core::{PackedColor, Transport};
use log::warn;
use smart_leds::SmartLedsWrite;
use smart_leds::RGB8;
use ws2812_esp32_rmt_driver::Ws2812Esp32Rmt;

pub struct LedDriver {
    driver: Ws2812Esp32Rmt,
}

impl LedDriver {
    pub fn new(data_pin: u8, channel: u8) -> Result<Self, ws2812_esp32_rmt_driver::LedPixelError> {
        let driver = Ws2812Esp32Rmt::new(channel, data_pin as u32)?;
        Ok(Self { driver })
    }
}

impl Transport for LedDriver {
    /// Frames arrive already brightness scaled. A failed write only costs this frame.
    fn render(&mut self, pixels: &[PackedColor], _brightness: u8) {
        let frame = pixels.iter().map(|&c| to_rgb8(c));
        if let Err(e) = self.driver.write(frame) {
            warn!("LED write failed: {:?}", e);
        }
    }
}

fn to_rgb8(c: PackedColor) -> RGB8 {
    RGB8 {
        r: c.red(),
        g: c.green(),
        b: c.blue(),
    }
}
