use std::{collections::HashMap, fmt::Write};

use image::RgbaImage;
use pixelworld_core::Color;

/// Pixels with alpha below this become the transparency key.
pub const ALPHA_CUTOFF: u8 = 128;

/// An image reduced to RGB565, row-major.
pub struct Converted {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Color>,
    /// Parallel to `cells`: whether the source pixel had alpha at or above the cutoff.
    pub opaque: Vec<bool>,
    pub transparent: usize,
}

pub fn convert(img: &RgbaImage, key: Color) -> Converted {
    let (width, height) = img.dimensions();

    // pixels() yields rows top to bottom, left to right
    let (cells, opaque): (Vec<Color>, Vec<bool>) = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            if a < ALPHA_CUTOFF {
                (key, false)
            } else {
                (Color::from_rgb888(r, g, b), true)
            }
        })
        .unzip();
    let transparent = opaque.iter().filter(|&&o| !o).count();

    Converted {
        width,
        height,
        cells,
        opaque,
        transparent,
    }
}

/// Colors of opaque pixels by pixel count, most used first. Ties sort by raw value so the
/// output is stable.
pub fn histogram(converted: &Converted) -> Vec<(Color, usize)> {
    let mut counts: HashMap<Color, usize> = HashMap::new();
    for (&c, _) in converted.cells.iter().zip(&converted.opaque).filter(|(_, o)| **o) {
        *counts.entry(c).or_default() += 1;
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0 .0.cmp(&b.0 .0)));
    sorted
}

/// Render a `pub static` declaration for the sprite, one image row per line.
pub fn emit(name: &str, source: &str, converted: &Converted) -> String {
    let mut out = String::new();
    let (w, h) = (converted.width as usize, converted.height as usize);

    let _ = writeln!(out, "// {name}: {w}x{h} RGB565, generated by spritegen from {source}");
    let _ = writeln!(out, "#[rustfmt::skip]");
    let _ = writeln!(out, "pub static {name}: Sprite = Sprite::new({w}, {h}, &[");
    if w > 0 {
        for row in converted.cells.chunks(w) {
            out.push_str("   ");
            for c in row {
                let _ = write!(out, " Color(0x{:04X}),", c.0);
            }
            out.push('\n');
        }
    }
    out.push_str("]);\n");
    out
}

/// `player-ship.png` -> `PLAYER_SHIP`.
pub fn static_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
