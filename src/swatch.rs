//! Color swatches and the capability report.
//!
//! Each color depth has a generator yielding an endless sequence of colors
//! and a fixed grid size. Cells are raw SGR escapes so the output shows
//! exactly what the terminal does with them.

use crate::capability::ColorSupport;
use crate::config::DisplayConfig;
use crate::constants::{
    GRID_16_COLORS, GRID_256_COLORS, GRID_TRUECOLOR, REPORT_16_COLORS, REPORT_256_COLORS,
    REPORT_256_COLORS_UNSUPPORTED, REPORT_NO_COLORS, REPORT_TRUECOLOR, REPORT_TRUECOLOR_UNSUPPORTED, SGR_RESET,
};
use std::io::{self, Write};

/// SGR foreground codes of the 16 ANSI colors: 30-37, then bright 90-97.
#[derive(Debug, Clone, Default)]
pub struct FourBitColors {
    last: Option<u8>,
}

impl Iterator for FourBitColors {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let code = match self.last {
            Some(37) => 90,
            None | Some(97) => 30,
            Some(code) => code + 1,
        };
        self.last = Some(code);
        Some(code)
    }
}

/// Indexes into the 256 color palette, 0 through 255.
#[derive(Debug, Clone, Default)]
pub struct EightBitColors {
    last: Option<u8>,
}

impl Iterator for EightBitColors {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let index = match self.last {
            None | Some(u8::MAX) => 0,
            Some(index) => index + 1,
        };
        self.last = Some(index);
        Some(index)
    }
}

/// A walk around the hue circle in RGB.
///
/// Starting from red, one channel at a time ramps down to 0 or up to 255,
/// alternating direction and rotating through the channels. A full turn is
/// 6 × 255 steps.
#[derive(Debug, Clone)]
pub struct TrueColors {
    rgb: [u8; 3],
    rising: usize,
    falling: usize,
    increasing: bool,
}

impl Default for TrueColors {
    fn default() -> Self {
        Self {
            rgb: [255, 0, 1],
            rising: 1,
            falling: 2,
            increasing: false,
        }
    }
}

impl Iterator for TrueColors {
    type Item = (u8, u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.increasing {
            self.rgb[self.rising] += 1;
            if self.rgb[self.rising] == u8::MAX {
                self.rising = (self.rising + 1) % 3;
                self.increasing = false;
            }
        } else {
            self.rgb[self.falling] -= 1;
            if self.rgb[self.falling] == 0 {
                self.falling = (self.falling + 1) % 3;
                self.increasing = true;
            }
        }
        let [r, g, b] = self.rgb;
        Some((r, g, b))
    }
}

/// Write `rows` × `columns` cells, resetting attributes after every row and
/// once more after the grid.
pub fn write_grid<W, I>(out: &mut W, (rows, columns): (usize, usize), cells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut cells = cells.into_iter();
    for _ in 0..rows {
        for cell in cells.by_ref().take(columns) {
            out.write_all(cell.as_bytes())?;
        }
        writeln!(out, "{SGR_RESET}")?;
    }
    writeln!(out, "{SGR_RESET}")
}

/// The 16 ANSI colors as reverse-video foreground cells.
pub fn write_16_colors<W: Write>(out: &mut W) -> io::Result<()> {
    let cells = FourBitColors::default().map(|code| format!("\x1b[{code};7m    "));
    write_grid(out, GRID_16_COLORS, cells)
}

/// The 256 color palette as background cells.
pub fn write_256_colors<W: Write>(out: &mut W) -> io::Result<()> {
    let cells = EightBitColors::default().map(|index| format!("\x1b[48;5;{index}m "));
    write_grid(out, GRID_256_COLORS, cells)
}

/// A 24-bit hue sweep as background cells.
pub fn write_truecolors<W: Write>(out: &mut W) -> io::Result<()> {
    let cells = TrueColors::default().map(|(r, g, b)| format!("\x1b[48;2;{r};{g};{b}m "));
    write_grid(out, GRID_TRUECOLOR, cells)
}

/// Write one line per color depth, each followed by its swatch grid as
/// `display` allows.
pub fn write_report<W: Write>(out: &mut W, support: ColorSupport, display: &DisplayConfig) -> io::Result<()> {
    type GridWriter<T> = fn(&mut T) -> io::Result<()>;

    let sections: [(bool, &str, GridWriter<W>); 3] = [
        (
            support.supports_16_colors(),
            if support.supports_16_colors() { REPORT_16_COLORS } else { REPORT_NO_COLORS },
            write_16_colors,
        ),
        (
            support.supports_256_colors(),
            if support.supports_256_colors() { REPORT_256_COLORS } else { REPORT_256_COLORS_UNSUPPORTED },
            write_256_colors,
        ),
        (
            support.supports_truecolor(),
            if support.supports_truecolor() { REPORT_TRUECOLOR } else { REPORT_TRUECOLOR_UNSUPPORTED },
            write_truecolors,
        ),
    ];

    for (supported, line, write_swatch) in sections {
        writeln!(out, "{line}")?;
        if display.show_swatches && (supported || display.show_unsupported_swatches) {
            write_swatch(out)?;
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_bit_sequence_wraps() {
        let codes: Vec<u8> = FourBitColors::default().take(18).collect();
        let expected: Vec<u8> = (30..=37).chain(90..=97).chain(30..=31).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_eight_bit_sequence_wraps() {
        let mut colors = EightBitColors::default().skip(255);
        assert_eq!(colors.next(), Some(255));
        assert_eq!(colors.next(), Some(0));
    }

    #[test]
    fn test_truecolor_walk_starts_at_red() {
        let first: Vec<_> = TrueColors::default().take(2).collect();
        assert_eq!(first, vec![(255, 0, 0), (255, 1, 0)]);
    }
}
