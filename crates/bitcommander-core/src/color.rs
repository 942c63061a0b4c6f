/// A 24-bit colour packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: PackedColor = PackedColor(0);

    /// Wrap a raw value. Bits above the low 24 are dropped.
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for PackedColor {
    fn from(raw: u32) -> Self {
        Self::from_u32(raw)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

/// Pack three channels into a colour.
///
/// Each channel is truncated to its low 8 bits rather than clamped, so `256`
/// packs as `0` and `-1` packs as `255`. Callers depend on this wraparound.
pub fn pack(r: i32, g: i32, b: i32) -> PackedColor {
    PackedColor((((r & 0xFF) as u32) << 16) | (((g & 0xFF) as u32) << 8) | ((b & 0xFF) as u32))
}

/// Split a colour back into `(r, g, b)`.
pub fn unpack(color: PackedColor) -> (u8, u8, u8) {
    (color.red(), color.green(), color.blue())
}

/// Scale every channel by `brightness / 255`, rounding down.
pub fn scale(color: PackedColor, brightness: u8) -> PackedColor {
    let level = brightness as u16;
    let channel = |c: u8| ((c as u16 * level) / 255) as i32;
    pack(
        channel(color.red()),
        channel(color.green()),
        channel(color.blue()),
    )
}

/// Fully saturated, full value colour for a hue in degrees (taken mod 360).
pub fn hue(degrees: u32) -> PackedColor {
    let h = degrees % 360;
    let sector = h / 60;
    // 0..=255 ramp across the current 60 degree sector
    let rise = ((h % 60) * 255 / 60) as i32;
    let fall = 255 - rise;
    match sector {
        0 => pack(255, rise, 0),
        1 => pack(fall, 255, 0),
        2 => pack(0, 255, rise),
        3 => pack(0, fall, 255),
        4 => pack(rise, 0, 255),
        _ => pack(255, 0, fall),
    }
}

/// The board's predefined LED colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Purple,
    White,
    Black,
}

impl Colour {
    pub const fn packed(self) -> PackedColor {
        PackedColor::from_u32(match self {
            Colour::Red => 0xFF0000,
            Colour::Orange => 0xFFA500,
            Colour::Yellow => 0xFFFF00,
            Colour::Green => 0x00FF00,
            Colour::Blue => 0x0000FF,
            Colour::Indigo => 0x4B0082,
            Colour::Violet => 0x8A2BE2,
            Colour::Purple => 0xFF00FF,
            Colour::White => 0xFFFFFF,
            Colour::Black => 0x000000,
        })
    }
}

impl From<Colour> for PackedColor {
    fn from(colour: Colour) -> Self {
        colour.packed()
    }
}
