use std::fmt::Write as _;

use super::scale::{blues, nice_ticks, LinearScale};
use crate::core::format::format_tick;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 48.0;
// Extra room on the right for the color bar legend.
const COLOR_BAR_GUTTER: f64 = 56.0;
const BAR_FILL_RATIO: f64 = 0.8;
const TARGET_TICKS: usize = 5;

pub const DEFAULT_SERIES_COLOR: &str = "#636efa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Area,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesColor {
    Solid(String),
    /// Each mark is colored on the Blues scale by its value.
    Continuous,
}

/// One labelled series and how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    pub x: f64,
    pub y: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub tooltip: String,
}

/// Everything needed to draw a chart, in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub plot_left: f64,
    pub plot_top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub points: Vec<PointMark>,
    pub bars: Vec<BarMark>,
    pub line_path: Option<String>,
    pub area_path: Option<String>,
    pub stroke: String,
    /// Top-to-bottom swatches with their value labels (continuous color only).
    pub color_bar: Vec<(String, String)>,
}

impl ChartModel {
    pub fn build(spec: &SeriesSpec) -> Self {
        let continuous = spec.color == SeriesColor::Continuous;
        let right = MARGIN_RIGHT + if continuous { COLOR_BAR_GUTTER } else { 0.0 };
        let plot_left = MARGIN_LEFT;
        let plot_top = MARGIN_TOP;
        let plot_width = WIDTH - MARGIN_LEFT - right;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let plot_bottom = plot_top + plot_height;

        let (data_min, data_max) = extent(&spec.values);
        let floor = match spec.kind {
            ChartKind::Line => data_min,
            ChartKind::Bar | ChartKind::Area => data_min.min(0.0),
        };
        let tick_values = nice_ticks(floor, data_max, TARGET_TICKS);
        let domain = match (tick_values.first(), tick_values.last()) {
            (Some(lo), Some(hi)) => (*lo, *hi),
            _ => (0.0, 1.0),
        };
        let y_scale = LinearScale::new(domain, (plot_bottom, plot_top));

        let count = spec.values.len().max(1) as f64;
        let band = plot_width / count;
        let center = |idx: usize| plot_left + band * (idx as f64 + 0.5);

        let x_ticks = spec
            .labels
            .iter()
            .enumerate()
            .map(|(idx, label)| Tick {
                position: center(idx),
                label: label.clone(),
            })
            .collect();
        let y_ticks = tick_values
            .iter()
            .map(|value| Tick {
                position: y_scale.map(*value),
                label: format_tick(*value),
            })
            .collect();

        let tooltip = |idx: usize, value: f64| {
            let label = spec.labels.get(idx).map(String::as_str).unwrap_or("");
            format!("{label}: {}", format_tick(value))
        };

        let stroke = match &spec.color {
            SeriesColor::Solid(color) => color.clone(),
            SeriesColor::Continuous => DEFAULT_SERIES_COLOR.to_string(),
        };

        let mut model = ChartModel {
            kind: spec.kind,
            width: WIDTH,
            height: HEIGHT,
            title: spec.title.clone(),
            x_label: spec.x_label.clone(),
            y_label: spec.y_label.clone(),
            plot_left,
            plot_top,
            plot_width,
            plot_height,
            x_ticks,
            y_ticks,
            points: Vec::new(),
            bars: Vec::new(),
            line_path: None,
            area_path: None,
            stroke,
            color_bar: Vec::new(),
        };

        match spec.kind {
            ChartKind::Bar => {
                let bar_width = band * BAR_FILL_RATIO;
                let baseline = y_scale.map(domain.0.max(0.0).min(domain.1));
                model.bars = spec
                    .values
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| {
                        let top = y_scale.map(*value);
                        BarMark {
                            x: center(idx) - bar_width / 2.0,
                            y: top.min(baseline),
                            width: bar_width,
                            height: (baseline - top).abs(),
                            fill: match &spec.color {
                                SeriesColor::Solid(color) => color.clone(),
                                SeriesColor::Continuous => {
                                    blues(normalize(*value, data_min, data_max))
                                }
                            },
                            tooltip: tooltip(idx, *value),
                        }
                    })
                    .collect();
            }
            ChartKind::Line | ChartKind::Area => {
                model.points = spec
                    .values
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| PointMark {
                        x: center(idx),
                        y: y_scale.map(*value),
                        tooltip: tooltip(idx, *value),
                    })
                    .collect();
                let line = polyline_path(&model.points);
                if spec.kind == ChartKind::Area {
                    model.area_path = area_path(&line, &model.points, y_scale.map(domain.0));
                }
                model.line_path = line;
            }
        }

        if continuous {
            model.color_bar = (0..TARGET_TICKS)
                .map(|step| {
                    let t = 1.0 - step as f64 / (TARGET_TICKS - 1) as f64;
                    let value = data_min + t * (data_max - data_min);
                    (blues(t), format_tick(value))
                })
                .collect();
        }

        model
    }

    pub fn plot_bottom(&self) -> f64 {
        self.plot_top + self.plot_height
    }

    pub fn plot_right(&self) -> f64 {
        self.plot_left + self.plot_width
    }
}

fn extent(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        (value - min) / (max - min)
    }
}

fn polyline_path(points: &[PointMark]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M{:.1},{:.1}", first.x, first.y);
    for point in rest {
        let _ = write!(d, " L{:.1},{:.1}", point.x, point.y);
    }
    Some(d)
}

fn area_path(line: &Option<String>, points: &[PointMark], baseline: f64) -> Option<String> {
    let line = line.as_ref()?;
    let first = points.first()?;
    let last = points.last()?;
    Some(format!(
        "{line} L{:.1},{baseline:.1} L{:.1},{baseline:.1} Z",
        last.x, first.x
    ))
}
