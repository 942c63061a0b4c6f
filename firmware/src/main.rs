use bitcommander_core::{Board, Button, Colour, Config};
use esp_idf_svc::hal::prelude::*;
use log::{error, info};

mod inputs;
mod led_driver;

use inputs::GpioInputs;
use led_driver::LedDriver;

const BOARD_CONFIG: &str = include_str!("../board.toml");
const RMT_CHANNEL: u8 = 0;

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("Bit:Commander booting...");

    let config = match Config::from_toml(BOARD_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("bad board config, using defaults: {}", e);
            Config::default()
        }
    };

    let _peripherals = Peripherals::take().expect("failed to take peripherals");

    let driver = LedDriver::new(config.strip.data_pin, RMT_CHANNEL).expect("failed to start LED driver");
    let mut board = Board::new(&config, driver, GpioInputs::new(&config.channels));

    info!("Initialization complete");

    board.band_mut().set_all(Colour::Orange.packed());
    board.band_mut().show();
    std::thread::sleep(std::time::Duration::from_millis(500));

    board.band_mut().full_rainbow();
    board.band_mut().show();
    loop {
        std::thread::sleep(std::time::Duration::from_millis(200));
        if board.inputs_mut().read_button(Button::Red) {
            board.band_mut().full_rainbow();
        } else if board.inputs_mut().read_button(Button::Blue) {
            board.band_mut().clear();
        } else {
            board.band_mut().rotate_once();
        }
        board.band_mut().show();
    }
}
