//! Fill colors carried by rings for the host renderer.

use core::fmt;

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Color {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Formats as a CSS hex color, e.g. `#d16060`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The six wave colors, cycled by ring index.
pub const PALETTE: [Color; 6] = [
    Color::from_hex(0xd16060),
    Color::from_hex(0xedb07b),
    Color::from_hex(0x7bc4a2),
    Color::from_hex(0x343a5b),
    Color::from_hex(0x9b7bad),
    Color::from_hex(0xa05065),
];

/// Euclidean modulo: maps any index, including negative ones, into `0..total`.
///
/// Panics if `total` is zero.
pub fn cycle(value: i64, total: usize) -> usize {
    value.rem_euclid(total as i64) as usize
}

/// Palette entry for the `index`-th ring.
pub fn palette_color(index: usize) -> Color {
    PALETTE[cycle(index as i64, PALETTE.len())]
}
