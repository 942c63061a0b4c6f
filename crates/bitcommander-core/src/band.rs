use log::{debug, info, trace};
use serde::Deserialize;

use crate::color::PackedColor;
use crate::pixels::{PixelBuffer, RAINBOW_END_HUE, RAINBOW_START_HUE};

/// Sink that pushes a frame onto the physical strip.
///
/// `pixels` is already brightness scaled; `brightness` is passed along for
/// drivers that want it. Implementations own their failure handling.
pub trait Transport {
    fn render(&mut self, pixels: &[PackedColor], brightness: u8);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn render(&mut self, pixels: &[PackedColor], brightness: u8) {
        (**self).render(pixels, brightness)
    }
}

/// When buffer changes reach the strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Changes are staged until [`BandEngine::show`] is called.
    Manual,
    /// Every change is rendered immediately.
    #[default]
    Automatic,
}

/// Owns the pixel buffer for one strip and decides when it is rendered.
///
/// In [`UpdateMode::Manual`] a batch of edits is rendered once by `show`, so
/// the strip never displays a half-applied batch.
pub struct BandEngine<T> {
    buffer: PixelBuffer,
    mode: UpdateMode,
    transport: T,
}

impl<T: Transport> BandEngine<T> {
    pub fn new(transport: T, len: usize, brightness: u8) -> Self {
        Self::with_mode(transport, len, brightness, UpdateMode::default())
    }

    pub fn with_mode(transport: T, len: usize, brightness: u8, mode: UpdateMode) -> Self {
        Self {
            buffer: PixelBuffer::new(len, brightness),
            mode,
            transport,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn pixels(&self) -> &[PackedColor] {
        self.buffer.pixels()
    }

    pub fn pixel(&self, index: usize) -> Option<PackedColor> {
        self.buffer.pixel(index)
    }

    pub fn brightness(&self) -> u8 {
        self.buffer.brightness()
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        if mode != self.mode {
            info!("LED update mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn set_all(&mut self, color: PackedColor) {
        self.buffer.set_all(color);
        self.changed("set_all");
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.changed("clear");
    }

    pub fn set_pixel(&mut self, index: i32, color: PackedColor) {
        self.buffer.set_pixel(index, color);
        self.changed("set_pixel");
    }

    pub fn shift(&mut self, n: usize) {
        self.buffer.shift(n);
        self.changed("shift");
    }

    pub fn rotate(&mut self, n: usize) {
        self.buffer.rotate(n);
        self.changed("rotate");
    }

    pub fn rainbow(&mut self, start_hue: i32, end_hue: i32) {
        self.buffer.rainbow(start_hue, end_hue);
        self.changed("rainbow");
    }

    pub fn set_brightness(&mut self, level: i32) {
        self.buffer.set_brightness(level);
        self.changed("set_brightness");
    }

    /// `shift(1)`.
    pub fn shift_once(&mut self) {
        self.shift(1);
    }

    /// `rotate(1)`.
    pub fn rotate_once(&mut self) {
        self.rotate(1);
    }

    /// Rainbow over the board's default `1..360` hue sweep.
    pub fn full_rainbow(&mut self) {
        self.rainbow(RAINBOW_START_HUE, RAINBOW_END_HUE);
    }

    /// Render the current buffer regardless of update mode.
    pub fn show(&mut self) {
        let frame = self.buffer.scaled();
        let brightness = self.buffer.brightness();
        debug!("render {} pixels at brightness {}", frame.len(), brightness);
        self.transport.render(&frame, brightness);
    }

    fn changed(&mut self, op: &str) {
        match self.mode {
            UpdateMode::Automatic => self.show(),
            UpdateMode::Manual => trace!("{op} staged"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::color::{pack, Colour};

    /// Records every frame handed to it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTransport {
        pub frames: Vec<(Vec<PackedColor>, u8)>,
    }

    impl Transport for RecordingTransport {
        fn render(&mut self, pixels: &[PackedColor], brightness: u8) {
            self.frames.push((pixels.to_vec(), brightness));
        }
    }

    fn engine() -> BandEngine<RecordingTransport> {
        BandEngine::new(RecordingTransport::default(), 6, 255)
    }

    #[test]
    fn defaults_to_automatic() {
        let band = BandEngine::new(RecordingTransport::default(), 6, 40);
        assert_eq!(band.update_mode(), UpdateMode::Automatic);
        assert_eq!(band.brightness(), 40);
        assert_eq!(band.len(), 6);
        assert!(band.transport().frames.is_empty());
    }

    #[test]
    fn automatic_renders_every_mutation() {
        let mut band = engine();
        band.set_pixel(0, Colour::Red.packed());
        band.set_pixel(1, Colour::Green.packed());
        band.set_pixel(2, Colour::Blue.packed());
        let frames = &band.transport().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].0[0], Colour::Red.packed());
        assert!(frames[0].0[1].is_black());
        assert_eq!(frames[2].0[2], Colour::Blue.packed());
    }

    #[test]
    fn manual_stages_until_show() {
        let mut band = engine();
        band.set_update_mode(UpdateMode::Manual);
        band.set_pixel(0, Colour::Red.packed());
        band.set_pixel(1, Colour::Green.packed());
        band.set_pixel(2, Colour::Blue.packed());
        assert!(band.transport().frames.is_empty());

        band.show();
        let frames = &band.transport().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0].0[..3],
            [
                Colour::Red.packed(),
                Colour::Green.packed(),
                Colour::Blue.packed()
            ]
        );
    }

    #[test]
    fn every_mutation_is_routed_through_mode() {
        let mut band = engine();
        band.set_all(Colour::White.packed());
        band.clear();
        band.set_pixel(0, Colour::Red.packed());
        band.shift(1);
        band.rotate(1);
        band.rainbow(1, 360);
        band.set_brightness(100);
        assert_eq!(band.transport().frames.len(), 7);

        band.set_update_mode(UpdateMode::Manual);
        band.set_all(Colour::White.packed());
        band.clear();
        band.set_pixel(0, Colour::Red.packed());
        band.shift(1);
        band.rotate(1);
        band.rainbow(1, 360);
        band.set_brightness(100);
        assert_eq!(band.transport().frames.len(), 7);
    }

    #[test]
    fn show_renders_in_automatic_too() {
        let mut band = engine();
        band.show();
        assert_eq!(band.transport().frames.len(), 1);
    }

    #[test]
    fn render_applies_brightness_without_storing_it() {
        let mut band = BandEngine::new(RecordingTransport::default(), 2, 40);
        band.set_all(pack(255, 255, 255));
        let (frame, brightness) = band.transport().frames.last().cloned().unwrap();
        assert_eq!(brightness, 40);
        assert_eq!(frame, vec![pack(40, 40, 40); 2]);
        assert_eq!(band.pixels(), &[pack(255, 255, 255); 2]);

        band.set_brightness(255);
        let (frame, _) = band.transport().frames.last().cloned().unwrap();
        assert_eq!(frame, vec![pack(255, 255, 255); 2]);
    }

    #[test]
    fn out_of_range_pixel_still_follows_mode() {
        let mut band = engine();
        band.set_pixel(42, Colour::Red.packed());
        assert!(band.pixels().iter().all(|c| c.is_black()));
        assert_eq!(band.transport().frames.len(), 1);
    }

    #[test]
    fn borrowed_transport() {
        let mut sink = RecordingTransport::default();
        {
            let mut band = BandEngine::new(&mut sink, 3, 255);
            band.set_all(Colour::Purple.packed());
        }
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn single_step_helpers_match_explicit_counts() {
        let mut explicit = BandEngine::new(RecordingTransport::default(), 6, 255);
        let mut helpers = BandEngine::new(RecordingTransport::default(), 6, 255);

        explicit.rainbow(1, 360);
        helpers.full_rainbow();
        assert_eq!(helpers.pixels(), explicit.pixels());

        explicit.rotate(1);
        helpers.rotate_once();
        assert_eq!(helpers.pixels(), explicit.pixels());

        explicit.shift(1);
        helpers.shift_once();
        assert_eq!(helpers.pixels(), explicit.pixels());
        assert!(helpers.pixel(0).is_some_and(|c| c.is_black()));
        assert_eq!(helpers.transport().frames.len(), 3);
    }

    #[test]
    fn switching_back_to_automatic_does_not_render() {
        let mut band = engine();
        band.set_update_mode(UpdateMode::Manual);
        band.set_pixel(0, Colour::Red.packed());
        band.set_update_mode(UpdateMode::Automatic);
        assert!(band.transport().frames.is_empty());
        band.rotate(1);
        let frames = &band.transport().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0[1], Colour::Red.packed());
    }
}
