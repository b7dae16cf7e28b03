//! PNG chart rendering with Plotters.
//!
//! The numeric pipeline never draws: it hands `ChartSpec`s to a
//! `ChartRenderer`. `PngRenderer` is the production implementation and writes
//! rasterized images via Plotters' bitmap backend.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::app::pipeline::RunOutput;
use crate::domain::{LINEWEAVER_BURK_PLOT_FILE, SATURATION_PLOT_FILE};
use crate::error::AppError;
use crate::plot::chart::{ChartSpec, LegendCorner, SeriesStyle, lineweaver_burk_chart, saturation_chart};
use crate::plot::font::{FONT_FAMILY, ensure_font};

/// Something that turns a chart description into a file.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<(), AppError>;
}

/// Image styling shared by both charts.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 640)
    pub width: u32,
    /// Image height in pixels (default: 480)
    pub height: u32,
    pub background: RGBColor,
    /// Line width in pixels (default: 2)
    pub line_width: u32,
    /// Scatter marker radius in pixels (default: 3)
    pub point_size: u32,
    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: WHITE,
            line_width: 2,
            point_size: 3,
            show_grid: true,
        }
    }
}

/// Writes charts as PNG files.
#[derive(Debug, Clone, Default)]
pub struct PngRenderer {
    pub config: PlotConfig,
    /// Explicit TrueType font; system locations are searched when `None`.
    pub font: Option<PathBuf>,
}

impl PngRenderer {
    pub fn new(config: PlotConfig, font: Option<PathBuf>) -> Self {
        Self { config, font }
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<(), AppError> {
        let text = ensure_font(self.font.as_deref());
        let root = BitMapBackend::new(path, (self.config.width, self.config.height)).into_drawing_area();

        draw_chart(&root, chart, &self.config, text)
            .map_err(|e| AppError::output(format!("Failed to render chart '{}': {e}", path.display())))?;

        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Render both charts of a run into `output_dir`, overwriting existing files.
///
/// Returns the written paths (saturation curve first).
pub fn write_charts(renderer: &dyn ChartRenderer, run: &RunOutput, output_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        AppError::output(format!("Failed to create output directory '{}': {e}", output_dir.display()))
    })?;

    let charts = [
        (SATURATION_PLOT_FILE, saturation_chart(run)),
        (LINEWEAVER_BURK_PLOT_FILE, lineweaver_burk_chart(run)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (name, chart) in &charts {
        let path = output_dir.join(name);
        renderer.render(chart, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartSpec,
    config: &PlotConfig,
    text: bool,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let Some(([x0, x1], [y0, y1])) = chart.bounds() else {
        return Err(format!("chart '{}' has no finite points", chart.title).into());
    };

    root.fill(&config.background)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(15);
    if text {
        builder
            .caption(&chart.title, (FONT_FAMILY, 24).into_font())
            .x_label_area_size(45)
            .y_label_area_size(60);
    } else {
        builder.x_label_area_size(10).y_label_area_size(10);
    }
    let mut ctx = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    {
        let mut mesh = ctx.configure_mesh();
        if !config.show_grid {
            mesh.disable_mesh();
        }
        if text {
            mesh.x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .label_style((FONT_FAMILY, 14))
                .axis_desc_style((FONT_FAMILY, 16));
        } else {
            // No font: keep axes and grid, drop every text element.
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;
    }

    for series in &chart.series {
        let color = series.color;
        match series.style {
            SeriesStyle::Line => {
                let anno = ctx.draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    color.stroke_width(config.line_width),
                ))?;
                if text {
                    anno.label(series.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
                }
            }
            SeriesStyle::Scatter => {
                let size = config.point_size;
                let anno = ctx.draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, size, color.filled())),
                )?;
                if text {
                    anno.label(series.label.as_str())
                        .legend(move |(x, y)| Circle::new((x + 10, y), size, color.filled()));
                }
            }
        }
    }

    if text {
        let position = match chart.legend {
            LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
        };
        ctx.configure_series_labels()
            .position(position)
            .label_font((FONT_FAMILY, 14))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
