//! Core logic for the Bit:Commander controller board: the LED band engine,
//! colour packing, board configuration and the button/joystick/dial layer.
//!
//! Hardware access goes through the [`Transport`] and [`InputSource`] traits,
//! so everything here runs and tests on the host.

pub mod band;
pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod pixels;

pub use band::{BandEngine, Transport, UpdateMode};
pub use board::Board;
pub use color::{pack, scale, unpack, Colour, PackedColor};
pub use config::{ChannelMap, Config, StripConfig};
pub use error::{Error, Result};
pub use input::{Axis, Button, ButtonEvent, Edge, Handler, InputSource, Inputs};
pub use pixels::{PixelBuffer, DEFAULT_BRIGHTNESS, RAINBOW_END_HUE, RAINBOW_START_HUE};
