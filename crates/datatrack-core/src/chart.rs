// Rust guideline compliant 2026-10-19

//! Pie chart model and the renderer seam.
//!
//! The core describes what to draw; how it is drawn is up to a
//! [`ChartRenderer`]. Headless callers use [`CaptureRenderer`] or
//! [`NullRenderer`].

use crate::progress::Progress;
use crate::Result;
use serde::Serialize;

/// Title of the progress chart.
pub const PROGRESS_TITLE: &str = "Processed Data";

/// Fixed slice colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceColor {
    /// Remaining work.
    LightCoral,
    /// Completed work.
    YellowGreen,
}

impl SliceColor {
    /// Returns the colour as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SliceColor::LightCoral => (240, 128, 128),
            SliceColor::YellowGreen => (154, 205, 50),
        }
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Legend label.
    pub label: String,
    /// Share of the whole pie, in `[0, 1]`.
    pub fraction: f64,
    /// Fill colour.
    pub color: SliceColor,
}

impl PieSlice {
    /// Formats the slice share as a percentage with one decimal, e.g. `66.7%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

/// A titled pie chart. Slices are laid out counter-clockwise from `start_angle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    /// Chart title.
    pub title: String,
    /// Slices in drawing order.
    pub slices: Vec<PieSlice>,
    /// Angle of the first slice edge, in degrees (0 points right, 90 up).
    pub start_angle: f64,
}

impl PieChart {
    /// Builds the two-slice "Remaining" / "Completed" chart for a progress value.
    ///
    /// Fractions are clamped into `[0, 1]` so that more processed than
    /// unprocessed markers still draws a full "Completed" pie.
    pub fn progress(progress: &Progress) -> Self {
        let completed = progress.completed.clamp(0.0, 1.0);
        Self {
            title: PROGRESS_TITLE.to_string(),
            slices: vec![
                PieSlice {
                    label: "Remaining".to_string(),
                    fraction: 1.0 - completed,
                    color: SliceColor::LightCoral,
                },
                PieSlice {
                    label: "Completed".to_string(),
                    fraction: completed,
                    color: SliceColor::YellowGreen,
                },
            ],
            start_angle: 90.0,
        }
    }

    /// Returns the index of the slice covering `angle` degrees, if any.
    ///
    /// Returns `None` when every slice is empty.
    pub fn slice_at(&self, angle: f64) -> Option<usize> {
        let total: f64 = self.slices.iter().map(|s| s.fraction.max(0.0)).sum();
        if total <= 0.0 {
            return None;
        }
        let offset = (angle - self.start_angle).rem_euclid(360.0) / 360.0;
        let mut edge = 0.0;
        let mut last = None;
        for (index, slice) in self.slices.iter().enumerate() {
            let share = slice.fraction.max(0.0) / total;
            if share <= 0.0 {
                continue;
            }
            edge += share;
            last = Some(index);
            if offset < edge {
                return last;
            }
        }
        last
    }
}

/// Something that can present a pie chart.
pub trait ChartRenderer {
    /// Presents the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be drawn.
    fn render(&mut self, chart: &PieChart) -> Result<()>;
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl ChartRenderer for NullRenderer {
    fn render(&mut self, _chart: &PieChart) -> Result<()> {
        Ok(())
    }
}

/// Renderer that records every chart it receives.
#[derive(Debug, Default, Clone)]
pub struct CaptureRenderer {
    charts: Vec<PieChart>,
}

impl CaptureRenderer {
    /// Creates an empty capture renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the charts rendered so far.
    pub fn charts(&self) -> &[PieChart] {
        &self.charts
    }
}

impl ChartRenderer for CaptureRenderer {
    fn render(&mut self, chart: &PieChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
