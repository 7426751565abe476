//! Standalone HTML rendering with an inline SVG line chart
//!
//! The page layout is an embedded Tera template. This module turns the view
//! state into a flat view model: plot coordinates and display strings are
//! computed here, the template only places them.

use std::fmt::Display;

use chrono::TimeZone;
use driftradar_core::{ChartData, Dashboard, ViewState};
use driftradar_domain::constants::{
    ALERTS_SECTION_TITLE, CHART_SECTION_TITLE, CHART_TITLE, DASHBOARD_TITLE, LOADING_MESSAGE,
};
use driftradar_domain::{MetricRecord, SeriesDescriptor};
use serde::Serialize;
use tera::{Context, Tera};

use super::{format_score, format_timestamp};

// Embedded so the binary is self-contained
const TPL_DASHBOARD: &str = include_str!("templates/dashboard.html");
const DASHBOARD_TEMPLATE: &str = "dashboard.html";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 72.0;
const MARGIN_BOTTOM: f64 = 48.0;
const Y_TICKS: usize = 5;

/// Render the full page.
///
/// # Errors
/// Returns the Tera error if the template fails to parse or render.
pub fn render<Tz>(
    state: &ViewState,
    descriptors: &[SeriesDescriptor],
    tz: &Tz,
) -> tera::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut tera = Tera::default();
    tera.add_raw_template(DASHBOARD_TEMPLATE, TPL_DASHBOARD)?;

    let mut context = Context::new();
    context.insert("page", &PageViewModel::new(state, descriptors, tz));
    tera.render(DASHBOARD_TEMPLATE, &context)
}

// =============================================================================
// View models
// =============================================================================

#[derive(Debug, Serialize)]
struct PageViewModel<'a> {
    title: &'static str,
    /// `loading`, `error` or `loaded`
    status: &'static str,
    loading_message: &'static str,
    error_message: Option<&'a str>,
    chart_section_title: &'static str,
    alerts_section_title: &'static str,
    chart: Option<ChartViewModel>,
    alerts: Vec<AlertRowViewModel>,
}

impl<'a> PageViewModel<'a> {
    fn new<Tz>(state: &'a ViewState, descriptors: &[SeriesDescriptor], tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut page = Self {
            title: DASHBOARD_TITLE,
            status: "loading",
            loading_message: LOADING_MESSAGE,
            error_message: None,
            chart_section_title: CHART_SECTION_TITLE,
            alerts_section_title: ALERTS_SECTION_TITLE,
            chart: None,
            alerts: Vec::new(),
        };

        match state {
            ViewState::Loading => {}
            ViewState::Error(message) => {
                page.status = "error";
                page.error_message = Some(message.as_str());
            }
            ViewState::Loaded(records) => {
                let dashboard = Dashboard::from_records(records, descriptors);
                page.status = "loaded";
                page.chart = Some(ChartViewModel::new(&dashboard.chart));
                page.alerts =
                    dashboard.alerts.iter().map(|alert| AlertRowViewModel::new(alert, tz)).collect();
            }
        }
        page
    }
}

#[derive(Debug, Serialize)]
struct ChartViewModel {
    title: &'static str,
    width: String,
    height: String,
    title_x: String,
    legend: Vec<LegendEntry>,
    grid: Vec<GridTick>,
    x_labels: Vec<AxisLabel>,
    lines: Vec<LineViewModel>,
}

#[derive(Debug, Serialize)]
struct LegendEntry {
    x: String,
    text_x: String,
    label: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct GridTick {
    x1: String,
    x2: String,
    y: String,
    label_x: String,
    label_y: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct AxisLabel {
    x: String,
    y: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct LineViewModel {
    color: String,
    segments: Vec<SegmentViewModel>,
}

#[derive(Debug, Serialize)]
struct SegmentViewModel {
    /// SVG `points` attribute
    points: String,
    markers: Vec<Marker>,
}

#[derive(Debug, Serialize)]
struct Marker {
    cx: String,
    cy: String,
    title: String,
}

impl ChartViewModel {
    fn new(chart: &ChartData) -> Self {
        let plot = Plot::new(chart);

        let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / chart.series.len().max(1) as f64;
        let legend = chart
            .series
            .iter()
            .enumerate()
            .map(|(index, series)| {
                let x = MARGIN_LEFT + slot * index as f64;
                LegendEntry {
                    x: coord(x),
                    text_x: coord(x + 34.0),
                    label: series.label().to_string(),
                    color: series.descriptor.color.clone(),
                }
            })
            .collect();

        // y grid from 0 up
        let grid = (0..=Y_TICKS)
            .map(|tick| {
                let value = plot.y_max * tick as f64 / Y_TICKS as f64;
                let y = plot.y(value);
                GridTick {
                    x1: coord(MARGIN_LEFT),
                    x2: coord(WIDTH - MARGIN_RIGHT),
                    y: coord(y),
                    label_x: coord(MARGIN_LEFT - 6.0),
                    label_y: coord(y + 4.0),
                    value: format!("{value:.2}"),
                }
            })
            .collect();

        let x_labels = chart
            .labels
            .iter()
            .enumerate()
            .map(|(index, batch_id)| AxisLabel {
                x: coord(plot.x(index)),
                y: coord(HEIGHT - MARGIN_BOTTOM + 18.0),
                text: batch_id.to_string(),
            })
            .collect();

        let lines = chart
            .series
            .iter()
            .map(|series| LineViewModel {
                color: series.descriptor.color.clone(),
                segments: segments(&series.points)
                    .into_iter()
                    .map(|segment| SegmentViewModel {
                        points: segment
                            .iter()
                            .map(|(index, score)| {
                                format!("{},{}", coord(plot.x(*index)), coord(plot.y(*score)))
                            })
                            .collect::<Vec<_>>()
                            .join(" "),
                        markers: segment
                            .iter()
                            .map(|(index, score)| Marker {
                                cx: coord(plot.x(*index)),
                                cy: coord(plot.y(*score)),
                                title: format!("{}: {}", series.label(), format_score(*score)),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: CHART_TITLE,
            width: WIDTH.to_string(),
            height: HEIGHT.to_string(),
            title_x: coord(WIDTH / 2.0),
            legend,
            grid,
            x_labels,
            lines,
        }
    }
}

#[derive(Debug, Serialize)]
struct AlertRowViewModel {
    id: String,
    batch_id: i64,
    timestamp: String,
    feature: String,
    message: String,
}

impl AlertRowViewModel {
    fn new<Tz>(alert: &MetricRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: alert.id.to_string(),
            batch_id: alert.batch_id,
            timestamp: format_timestamp(&alert.timestamp, tz),
            feature: alert.feature_name.clone(),
            message: alert.alert_text().unwrap_or_default().to_string(),
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Maps chart coordinates into the SVG viewport. The y axis starts at 0.
struct Plot {
    columns: usize,
    y_max: f64,
}

impl Plot {
    fn new(chart: &ChartData) -> Self {
        let highest = chart
            .series
            .iter()
            .flat_map(|series| series.points.iter().flatten())
            .fold(0.0_f64, |acc, score| acc.max(*score));
        let y_max = if highest > 0.0 { highest * 1.1 } else { 1.0 };
        Self { columns: chart.labels.len(), y_max }
    }

    fn x(&self, index: usize) -> f64 {
        let width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        if self.columns <= 1 {
            return MARGIN_LEFT + width / 2.0;
        }
        MARGIN_LEFT + width * index as f64 / (self.columns - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        let height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let clamped = value.clamp(0.0, self.y_max);
        HEIGHT - MARGIN_BOTTOM - height * clamped / self.y_max
    }
}

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

/// Runs of consecutive present points; a gap starts a new run.
fn segments(points: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, point) in points.iter().enumerate() {
        match point {
            Some(score) => current.push((index, *score)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
