// Rust guideline compliant 2026-10-19

//! Terminal pie chart renderer.
//!
//! The pie is rasterised onto a character grid two columns per row unit, so
//! the disc looks round in a typical terminal font.

use datatrack_core::{ChartRenderer, Error, PieChart, SliceColor};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Largest radius drawn, in rows.
pub const MAX_RADIUS: usize = 8;

/// Smallest radius drawn, in rows.
pub const MIN_RADIUS: usize = 3;

/// Glyphs used per slice when color is off.
const PLAIN_GLYPHS: [char; 4] = ['.', '#', 'o', '+'];

/// Glyph used for every slice when color is on.
const COLOR_GLYPH: char = '█';

/// Draws pie charts as colored character discs.
pub struct TerminalPieRenderer<W> {
    out: W,
    radius: usize,
    use_color: bool,
}

impl TerminalPieRenderer<StandardStream> {
    /// Creates a renderer writing to stdout, sized to the terminal width.
    pub fn stdout(use_color: bool) -> Self {
        let width = crate::terminal::get_terminal_width();
        Self::new(
            crate::terminal::stdout_stream(use_color),
            radius_for_width(width),
            use_color,
        )
    }
}

impl<W: WriteColor> TerminalPieRenderer<W> {
    /// Creates a renderer writing to `out`.
    ///
    /// # Arguments
    ///
    /// * `out` - Color-capable sink
    /// * `radius` - Disc radius in rows
    /// * `use_color` - Whether slices are colored or told apart by glyph
    pub fn new(out: W, radius: usize, use_color: bool) -> Self {
        Self {
            out,
            radius: radius.max(1),
            use_color,
        }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, chart: &PieChart) -> io::Result<()> {
        let grid = rasterize(chart, self.radius);
        let width = grid.first().map_or(0, Vec::len);

        let padding = width.saturating_sub(chart.title.chars().count()) / 2;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.out, "{}{}", " ".repeat(padding), chart.title)?;
        self.out.reset()?;

        for row in &grid {
            for cell in row {
                match cell {
                    Some(index) => {
                        let slice = &chart.slices[*index];
                        self.write_glyph(*index, slice.color)?;
                    }
                    None => write!(self.out, " ")?,
                }
            }
            writeln!(self.out)?;
        }

        for (index, slice) in chart.slices.iter().enumerate() {
            self.write_glyph(index, slice.color)?;
            writeln!(self.out, " {:<10} {:>6}", slice.label, slice.percent_label())?;
        }
        self.out.flush()
    }

    fn write_glyph(&mut self, index: usize, color: SliceColor) -> io::Result<()> {
        if self.use_color {
            let (r, g, b) = color.rgb();
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Rgb(r, g, b))))?;
            write!(self.out, "{}", COLOR_GLYPH)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", PLAIN_GLYPHS[index % PLAIN_GLYPHS.len()])
        }
    }
}

impl<W: WriteColor> ChartRenderer for TerminalPieRenderer<W> {
    fn render(&mut self, chart: &PieChart) -> datatrack_core::Result<()> {
        self.draw(chart)
            .map_err(|e| Error::Render(format!("failed to draw chart: {}", e)))
    }
}

/// Picks a radius that fits a terminal `width` columns wide.
pub fn radius_for_width(width: usize) -> usize {
    // The disc is 2 * (2r + 1) columns wide.
    let fit = (width / 2).saturating_sub(1) / 2;
    fit.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Maps every cell of a `(2r + 1)` by `2 * (2r + 1)` grid to the slice covering it.
///
/// Cells outside the disc are `None`.
pub fn rasterize(chart: &PieChart, radius: usize) -> Vec<Vec<Option<usize>>> {
    let rows = 2 * radius + 1;
    let cols = 2 * rows;
    let center = radius as f64 + 0.5;
    let limit = center * center;

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let x = (col as f64 + 0.5) / 2.0 - center;
                    let y = center - (row as f64 + 0.5);
                    if x * x + y * y > limit {
                        return None;
                    }
                    chart.slice_at(y.atan2(x).to_degrees())
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatrack_core::Progress;
    use termcolor::Buffer;

    fn quarter_done() -> PieChart {
        PieChart::progress(&Progress {
            completed: 0.25,
            remaining: 0.75,
        })
    }

    #[test]
    fn test_rasterize_places_slices() {
        let grid = rasterize(&quarter_done(), 4);
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0].len(), 18);
        // Outside the disc.
        assert_eq!(grid[0][0], None);
        // Upper right is completed, lower left remaining.
        assert_eq!(grid[2][12], Some(1));
        assert_eq!(grid[6][5], Some(0));
    }

    #[test]
    fn test_rasterize_area_tracks_fraction() {
        let grid = rasterize(&quarter_done(), 10);
        let cells: Vec<usize> = grid.iter().flatten().filter_map(|c| *c).collect();
        let completed = cells.iter().filter(|&&i| i == 1).count() as f64;
        let share = completed / cells.len() as f64;
        assert!((0.2..0.3).contains(&share), "share was {}", share);
    }

    #[test]
    fn test_render_plain_output() {
        let mut renderer = TerminalPieRenderer::new(Buffer::no_color(), 3, false);
        renderer.render(&quarter_done()).unwrap();
        let text = String::from_utf8(renderer.into_inner().into_inner()).unwrap();

        assert!(text.lines().next().unwrap().trim() == "Processed Data");
        assert!(text.contains("# Completed"));
        assert!(text.contains("25.0%"));
        assert!(text.contains(". Remaining"));
        assert!(text.contains("75.0%"));
        assert!(text.contains('#') && text.contains('.'));
    }

    #[test]
    fn test_radius_for_width() {
        assert_eq!(radius_for_width(80), MAX_RADIUS);
        assert_eq!(radius_for_width(20), 4);
        assert_eq!(radius_for_width(0), MIN_RADIUS);
    }
}
