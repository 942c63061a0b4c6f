use crate::color::{self, PackedColor};

pub const DEFAULT_BRIGHTNESS: u8 = 40;

/// Hue sweep used by the board's rainbow fill.
pub const RAINBOW_START_HUE: i32 = 1;
pub const RAINBOW_END_HUE: i32 = 360;

/// Manages the LED colour buffer and brightness.
///
/// Brightness is only applied when a frame is produced with [`PixelBuffer::scaled`];
/// stored pixels always keep their full-intensity values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<PackedColor>,
    brightness: u8,
}

impl PixelBuffer {
    pub fn new(len: usize, brightness: u8) -> Self {
        Self {
            pixels: vec![PackedColor::BLACK; len],
            brightness,
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Option<PackedColor> {
        self.pixels.get(index).copied()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_all(&mut self, color: PackedColor) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.set_all(PackedColor::BLACK);
    }

    /// Write one slot. Indices outside the strip, negative ones included, are ignored.
    pub fn set_pixel(&mut self, index: i32, color: PackedColor) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = color;
        }
    }

    /// Move every pixel `n` slots toward the end, dropping what falls off and
    /// filling the front with black.
    pub fn shift(&mut self, n: usize) {
        let len = self.pixels.len();
        if n >= len {
            self.clear();
            return;
        }
        self.pixels.copy_within(0..len - n, n);
        self.pixels[..n].fill(PackedColor::BLACK);
    }

    /// Move every pixel `n` slots toward the end, wrapping around to the front.
    pub fn rotate(&mut self, n: usize) {
        if self.pixels.is_empty() {
            return;
        }
        let n = n % self.pixels.len();
        self.pixels.rotate_right(n);
    }

    /// Spread the hue range `start_hue..=end_hue` (degrees) evenly over the strip.
    ///
    /// Slot `i` gets `start + i * (end - start) / len`, so the last slot stays
    /// one step short of `end_hue` and the default `1..360` sweep never wraps
    /// back onto red.
    pub fn rainbow(&mut self, start_hue: i32, end_hue: i32) {
        let len = self.pixels.len() as i64;
        let start = start_hue as i64;
        let span = end_hue as i64 - start;
        for (i, slot) in self.pixels.iter_mut().enumerate() {
            let h = start + (i as i64 * span) / len;
            *slot = color::hue(h.rem_euclid(360) as u32);
        }
    }

    pub fn set_brightness(&mut self, level: i32) {
        self.brightness = level.clamp(0, 255) as u8;
    }

    /// Returns the LED buffer with brightness scaling applied.
    pub fn scaled(&self) -> Vec<PackedColor> {
        self.pixels
            .iter()
            .map(|&c| color::scale(c, self.brightness))
            .collect()
    }
}
