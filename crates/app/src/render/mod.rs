//! Dashboard renderers
//!
//! Each renderer is a pure function of the view state and the configured
//! series. Timestamps are shown in the caller's time zone; [`render`] uses the
//! local zone, tests pin one with [`render_in`].

pub mod html;
pub mod json;
pub mod text;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use driftradar_core::ViewState;
use driftradar_domain::constants::TIMESTAMP_DISPLAY_FORMAT;
use driftradar_domain::{DriftRadarError, OutputFormat, Result, SeriesDescriptor};

/// Render in the local time zone.
pub fn render(
    state: &ViewState,
    descriptors: &[SeriesDescriptor],
    format: OutputFormat,
) -> Result<String> {
    render_in(state, descriptors, format, &Local)
}

/// Render with timestamps converted to `tz`.
pub fn render_in<Tz>(
    state: &ViewState,
    descriptors: &[SeriesDescriptor],
    format: OutputFormat,
    tz: &Tz,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match format {
        OutputFormat::Text => Ok(text::render(state, descriptors, tz)),
        OutputFormat::Html => html::render(state, descriptors, tz).map_err(|e| {
            DriftRadarError::Internal(format!("Failed to render HTML dashboard: {}", e))
        }),
        OutputFormat::Json => json::render(state, descriptors).map_err(|e| {
            DriftRadarError::Internal(format!("Failed to serialize dashboard: {}", e))
        }),
    }
}

pub(crate) fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format(TIMESTAMP_DISPLAY_FORMAT).to_string()
}

/// Fixed-precision score; drift scores are small, four places keep them
/// readable without hiding differences.
pub(crate) fn format_score(score: f64) -> String {
    format!("{score:.4}")
}
