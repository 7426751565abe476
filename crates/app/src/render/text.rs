//! Plain-text terminal rendering

use std::fmt::{Display, Write as _};

use chrono::TimeZone;
use driftradar_core::{ChartData, Dashboard, ViewState};
use driftradar_domain::constants::{
    ALERTS_SECTION_TITLE, CHART_SECTION_TITLE, CHART_TITLE, DASHBOARD_TITLE, LOADING_MESSAGE,
};
use driftradar_domain::{MetricRecord, SeriesDescriptor};

use super::{format_score, format_timestamp};

const MISSING: &str = "-";

pub fn render<Tz>(state: &ViewState, descriptors: &[SeriesDescriptor], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    heading(&mut out, DASHBOARD_TITLE, '=');

    match state {
        ViewState::Loading => out.push_str(LOADING_MESSAGE),
        ViewState::Error(message) => {
            let _ = write!(out, "[error] {message}");
        }
        ViewState::Loaded(records) => {
            let dashboard = Dashboard::from_records(records, descriptors);
            chart_section(&mut out, &dashboard.chart);
            out.push('\n');
            alerts_section(&mut out, &dashboard.alerts, tz);
        }
    }

    out.push('\n');
    out
}

fn heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat(underline).take(title.chars().count()));
    out.push_str("\n\n");
}

fn chart_section(out: &mut String, chart: &ChartData) {
    heading(out, CHART_SECTION_TITLE, '-');
    let _ = writeln!(out, "{CHART_TITLE}");

    let legend: Vec<&str> = chart.series.iter().map(|series| series.label()).collect();
    let _ = writeln!(out, "Legend: {}\n", legend.join(" | "));

    if chart.labels.is_empty() {
        out.push_str("No metrics recorded yet.\n");
        return;
    }

    let mut rows = vec![std::iter::once("Batch".to_string())
        .chain(chart.labels.iter().map(ToString::to_string))
        .collect::<Vec<_>>()];
    for series in &chart.series {
        rows.push(
            std::iter::once(series.label().to_string())
                .chain(series.points.iter().map(|point| match point {
                    Some(score) => format_score(*score),
                    None => MISSING.to_string(),
                }))
                .collect(),
        );
    }
    write_table(out, &rows);
}

fn alerts_section<Tz>(out: &mut String, alerts: &[MetricRecord], tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    heading(out, ALERTS_SECTION_TITLE, '-');

    let mut rows = vec![vec![
        "Batch ID".to_string(),
        "Timestamp".to_string(),
        "Feature".to_string(),
        "Alert".to_string(),
    ]];
    rows.extend(alerts.iter().map(|alert| {
        vec![
            alert.batch_id.to_string(),
            format_timestamp(&alert.timestamp, tz),
            alert.feature_name.clone(),
            alert.alert_text().unwrap_or_default().to_string(),
        ]
    }));
    write_table(out, &rows);

    if alerts.is_empty() {
        out.push_str("No drift alerts.\n");
    }
}

/// Left-aligned columns padded to the widest cell; the first row is the
/// header and gets a rule underneath.
fn write_table(out: &mut String, rows: &[Vec<String>]) {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter().filter_map(|row| row.get(col)).map(|c| c.chars().count()).max().unwrap_or(0)
        })
        .collect();

    for (index, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());

        if index == 0 {
            let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            let _ = writeln!(out, "{}", rule.join("  "));
        }
    }
}
