//! Chart rendering for positive signals.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::prelude::*;

use crate::error::ChartError;
use crate::models::chart::{BarColor, ChartData, ChartPoint};

/// Rendered image artifact ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &ChartData) -> Result<RenderedChart, ChartError>;
}

const MARGIN: i32 = 20;
/// Share of the image height given to the price panel
const PRICE_PANEL_SHARE: f64 = 0.65;

pub const CLOSE_COLOR: RGBColor = RGBColor(31, 119, 180);
pub const EMA_9_COLOR: RGBColor = RGBColor(255, 127, 14);
pub const EMA_50_COLOR: RGBColor = RGBColor(214, 39, 40);
pub const GREEN: RGBColor = RGBColor(44, 160, 44);
pub const RED: RGBColor = RGBColor(214, 39, 40);
const ZERO_LINE: RGBColor = RGBColor(136, 136, 136);

/// Draws the price panel (close, EMA-9 dashed, EMA-50) above the MACD
/// histogram panel and encodes it as PNG.
///
/// Nothing is drawn as text so rendering never depends on system fonts;
/// the ticker and levels travel in the photo caption.
#[derive(Debug, Clone, Copy)]
pub struct PngChartRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PngChartRenderer {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

fn draw_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(e.to_string())
}

fn price_range(points: &[ChartPoint]) -> (f64, f64) {
    let (min, max) = points
        .iter()
        .flat_map(|p| [p.close, p.ema_9, p.ema_50])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

fn histogram_scale(points: &[ChartPoint]) -> f64 {
    let max_abs = points
        .iter()
        .map(|p| p.histogram.abs())
        .fold(0.0_f64, f64::max);
    if max_abs > 0.0 {
        max_abs * 1.05
    } else {
        1.0
    }
}

/// Bar centre on the x axis
fn x(index: usize) -> f64 {
    index as f64 + 0.5
}

impl PngChartRenderer {
    fn draw(&self, points: &[ChartPoint], buffer: &mut [u8]) -> Result<(), ChartError> {
        let root = BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let split = (f64::from(self.height) * PRICE_PANEL_SHARE) as i32;
        let (upper, lower) = root.split_vertically(split);
        let span = 0.0..points.len() as f64;

        let (min, max) = price_range(points);
        let mut price = ChartBuilder::on(&upper)
            .margin(MARGIN)
            .build_cartesian_2d(span.clone(), min..max)
            .map_err(draw_error)?;

        price
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (x(i), p.close)),
                CLOSE_COLOR.stroke_width(2),
            ))
            .map_err(draw_error)?;
        // every other segment of the EMA-9 path
        price
            .draw_series(
                points
                    .windows(2)
                    .enumerate()
                    .step_by(2)
                    .map(|(i, pair)| {
                        PathElement::new(
                            vec![(x(i), pair[0].ema_9), (x(i + 1), pair[1].ema_9)],
                            EMA_9_COLOR.stroke_width(2),
                        )
                    }),
            )
            .map_err(draw_error)?;
        price
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (x(i), p.ema_50)),
                EMA_50_COLOR.stroke_width(2),
            ))
            .map_err(draw_error)?;

        let scale = histogram_scale(points);
        let mut hist = ChartBuilder::on(&lower)
            .margin(MARGIN)
            .build_cartesian_2d(span, -scale..scale)
            .map_err(draw_error)?;

        hist.draw_series(points.iter().enumerate().map(|(i, p)| {
            let color = match p.histogram_color() {
                BarColor::Green => GREEN,
                BarColor::Red => RED,
            };
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, p.histogram)],
                color.filled(),
            )
        }))
        .map_err(draw_error)?;
        hist.draw_series(LineSeries::new(
            [(0.0, 0.0), (points.len() as f64, 0.0)],
            &ZERO_LINE,
        ))
        .map_err(draw_error)?;

        root.present().map_err(draw_error)
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, chart: &ChartData) -> Result<RenderedChart, ChartError> {
        let points = &chart.points;
        if points.is_empty() {
            return Err(ChartError::EmptySeries(chart.ticker.clone()));
        }
        let finite = points.iter().all(|p| {
            [p.close, p.ema_9, p.ema_50, p.histogram]
                .iter()
                .all(|v| v.is_finite())
        });
        if !finite {
            return Err(ChartError::NonFinite(chart.ticker.clone()));
        }

        let mut pixels = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(points, &mut pixels)?;

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&pixels, self.width, self.height, ColorType::Rgb8)
            .map_err(|e| ChartError::Encode(e.to_string()))?;

        Ok(RenderedChart {
            bytes,
            file_name: format!("{}.png", chart.ticker),
            mime_type: "image/png",
        })
    }
}
