use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Brown,
    White,
}

pub const PALETTE: [PaletteColor; 10] = [
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Yellow,
    PaletteColor::Orange,
    PaletteColor::Purple,
    PaletteColor::Cyan,
    PaletteColor::Magenta,
    PaletteColor::Brown,
    PaletteColor::White,
];

/// Group indices are unbounded; the palette wraps.
pub fn color_for_group(group: usize) -> PaletteColor {
    PALETTE[group % PALETTE.len()]
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
            PaletteColor::Purple => "purple",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Magenta => "magenta",
            PaletteColor::Brown => "brown",
            PaletteColor::White => "white",
        };
        f.write_str(name)
    }
}
