use bitcommander_core::{ChannelMap, Edge, Handler, InputSource};
use esp_idf_svc::sys;
use log::warn;

/// Button lines read straight from GPIO. Analog channels and edge events are
/// not wired up on this board revision, so the loop polls buttons instead.
pub struct GpioInputs {
    analog_warned: bool,
}

impl GpioInputs {
    pub fn new(channels: &ChannelMap) -> Self {
        let buttons = [
            channels.red,
            channels.yellow,
            channels.green,
            channels.blue,
            channels.joystick_button,
        ];
        for pin in buttons {
            // SAFETY: plain register configuration of a GPIO reserved for the board
            let err = unsafe {
                sys::gpio_reset_pin(pin as i32);
                sys::gpio_set_direction(pin as i32, sys::gpio_mode_t_GPIO_MODE_INPUT)
            };
            if let Err(e) = sys::EspError::convert(err) {
                warn!("could not configure button pin {}: {}", pin, e);
            }
        }
        Self {
            analog_warned: false,
        }
    }
}

impl InputSource for GpioInputs {
    fn read_digital(&mut self, channel: u8) -> bool {
        // SAFETY: reads the input register of a configured pin
        unsafe { sys::gpio_get_level(channel as i32) != 0 }
    }

    fn read_analog(&mut self, channel: u8) -> i32 {
        if !self.analog_warned {
            warn!("analog channel {} has no ADC mapping, reading 0", channel);
            self.analog_warned = true;
        }
        0
    }

    fn on_edge_event(&mut self, channel: u8, edge: Edge, _handler: Handler) {
        warn!("edge events unsupported, dropping {:?} handler on {}", edge, channel);
    }
}
