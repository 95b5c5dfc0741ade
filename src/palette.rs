//! The fixed set of colours that the icon is painted with

use rgb::RGB8;

/// A symbolic colour name.  Drawing code only ever refers to colours through these names; a
/// [`Palette`] turns them into concrete colours when the image is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    LightGrey,
    Grey,
    DarkBlue,
    White,
    Blue,
    Yellow,
    LightYellow,
}

/// Maps every [`Swatch`] to a concrete colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    light_grey: RGB8,
    grey: RGB8,
    dark_blue: RGB8,
    white: RGB8,
    blue: RGB8,
    yellow: RGB8,
    light_yellow: RGB8,
}

impl Palette {
    pub fn get(&self, swatch: Swatch) -> RGB8 {
        match swatch {
            Swatch::LightGrey => self.light_grey,
            Swatch::Grey => self.grey,
            Swatch::DarkBlue => self.dark_blue,
            Swatch::White => self.white,
            Swatch::Blue => self.blue,
            Swatch::Yellow => self.yellow,
            Swatch::LightYellow => self.light_yellow,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light_grey: RGB8::new(0x6e, 0x6e, 0x6e),
            grey: RGB8::new(0x45, 0x47, 0x4c),
            dark_blue: RGB8::new(0x58, 0x8e, 0xa5),
            white: RGB8::new(0xe9, 0xf7, 0xfa),
            blue: RGB8::new(0x64, 0xd1, 0xef),
            yellow: RGB8::new(0xff, 0xe3, 0x69),
            light_yellow: RGB8::new(0xff, 0xff, 0x83),
        }
    }
}

/// Formats a colour as a `#rrggbb` hex string
pub fn hex_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}
