//! Render-only chart descriptions.
//!
//! Charts are data-driven: all series, labels, and bounds are computed here,
//! outside the backend, so the renderer only draws and the data prep can be
//! tested without touching the filesystem.

use plotters::style::RGBColor;

use crate::app::pipeline::RunOutput;
use crate::fit::fitted_line;

/// Number of points used to draw the fitted line.
const FIT_LINE_POINTS: usize = 200;

/// Fraction of the data range added on each side of an axis.
const AXIS_PADDING: f64 = 0.05;

pub const LINE_BLUE: RGBColor = RGBColor(31, 119, 180);
pub const DATA_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const FIT_RED: RGBColor = RGBColor(255, 0, 0);
pub const OBSERVED_GRAY: RGBColor = RGBColor(120, 120, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    LowerRight,
}

/// One labeled `(x, y)` series.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    pub color: RGBColor,
}

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: LegendCorner,
}

impl ChartSpec {
    /// Padded `([x0, x1], [y0, y1])` covering every finite point of every series.
    ///
    /// Returns `None` when there is nothing finite to draw. A zero-width range is
    /// widened so the backend always gets `x1 > x0` and `y1 > y0`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];

        for &(px, py) in self.series.iter().flat_map(|s| s.points.iter()) {
            if !(px.is_finite() && py.is_finite()) {
                continue;
            }
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }

        if !(x[0].is_finite() && y[0].is_finite()) {
            return None;
        }
        Some((pad(x), pad(y)))
    }
}

fn pad([lo, hi]: [f64; 2]) -> [f64; 2] {
    let span = hi - lo;
    if span <= 0.0 {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.5 };
        return [lo - half, hi + half];
    }
    [lo - AXIS_PADDING * span, hi + AXIS_PADDING * span]
}

/// Saturation curve: model velocity against substrate concentration.
///
/// When the estimator was fed noisy observations they are overlaid as a scatter.
pub fn saturation_chart(run: &RunOutput) -> ChartSpec {
    let mut series = vec![Series {
        label: "Michaelis-Menten".to_string(),
        points: run.curve.points().collect(),
        style: SeriesStyle::Line,
        color: LINE_BLUE,
    }];

    if run.observed != run.curve.velocities {
        series.push(Series {
            label: "Observed".to_string(),
            points: run
                .curve
                .concentrations
                .iter()
                .copied()
                .zip(run.observed.iter().copied())
                .collect(),
            style: SeriesStyle::Scatter,
            color: OBSERVED_GRAY,
        });
    }

    ChartSpec {
        title: "Michaelis-Menten saturation curve".to_string(),
        x_label: "Substrate concentration [S]".to_string(),
        y_label: "Reaction velocity v".to_string(),
        series,
        legend: LegendCorner::LowerRight,
    }
}

/// Double-reciprocal data with the fitted line over the same `1/S` range.
pub fn lineweaver_burk_chart(run: &RunOutput) -> ChartSpec {
    ChartSpec {
        title: "Lineweaver-Burk plot".to_string(),
        x_label: "1/[S]".to_string(),
        y_label: "1/v".to_string(),
        series: vec![
            Series {
                label: "Data".to_string(),
                points: run.sample.points().collect(),
                style: SeriesStyle::Scatter,
                color: DATA_BLUE,
            },
            Series {
                label: "Fit".to_string(),
                points: fitted_line(&run.fit, &run.sample, FIT_LINE_POINTS),
                style: SeriesStyle::Line,
                color: FIT_RED,
            },
        ],
        legend: LegendCorner::UpperLeft,
    }
}
