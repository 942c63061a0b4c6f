use log::warn;
use serde::Deserialize;

use crate::band::UpdateMode;
use crate::error::Result;
use crate::pixels::DEFAULT_BRIGHTNESS;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strip: StripConfig,
    #[serde(default)]
    pub channels: ChannelMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    #[serde(default = "default_data_pin")]
    pub data_pin: u8,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_brightness")]
    pub brightness: i32,
    #[serde(default)]
    pub update_mode: UpdateMode,
}

/// Physical line behind each logical input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelMap {
    #[serde(default = "default_red")]
    pub red: u8,
    #[serde(default = "default_yellow")]
    pub yellow: u8,
    #[serde(default = "default_green")]
    pub green: u8,
    #[serde(default = "default_blue")]
    pub blue: u8,
    #[serde(default = "default_joystick_button")]
    pub joystick_button: u8,
    #[serde(default = "default_joystick_x")]
    pub joystick_x: u8,
    #[serde(default = "default_joystick_y")]
    pub joystick_y: u8,
    #[serde(default = "default_dial")]
    pub dial: u8,
}

fn default_data_pin() -> u8 {
    13
}
fn default_length() -> usize {
    6
}
fn default_brightness() -> i32 {
    DEFAULT_BRIGHTNESS as i32
}
fn default_red() -> u8 {
    12
}
fn default_yellow() -> u8 {
    16
}
fn default_green() -> u8 {
    14
}
fn default_blue() -> u8 {
    15
}
fn default_joystick_button() -> u8 {
    8
}
fn default_joystick_x() -> u8 {
    1
}
fn default_joystick_y() -> u8 {
    2
}
fn default_dial() -> u8 {
    0
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            data_pin: default_data_pin(),
            length: default_length(),
            brightness: default_brightness(),
            update_mode: UpdateMode::default(),
        }
    }
}

impl StripConfig {
    /// Brightness as the engine takes it, clamped to `0..=255`.
    pub fn brightness_level(&self) -> u8 {
        self.brightness.clamp(0, 255) as u8
    }
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            red: default_red(),
            yellow: default_yellow(),
            green: default_green(),
            blue: default_blue(),
            joystick_button: default_joystick_button(),
            joystick_x: default_joystick_x(),
            joystick_y: default_joystick_y(),
            dial: default_dial(),
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(s)?;
        config.validate();
        Ok(config)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(s)?;
        config.validate();
        Ok(config)
    }

    fn validate(&mut self) {
        if self.strip.length == 0 {
            warn!("strip length 0 is not usable, using 1");
            self.strip.length = 1;
        }
        let level = self.strip.brightness_level() as i32;
        if level != self.strip.brightness {
            warn!(
                "brightness {} out of range, using {}",
                self.strip.brightness, level
            );
            self.strip.brightness = level;
        }
    }
}
