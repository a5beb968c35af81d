//! Request handlers for the temperature API.
//!
//! The temperature handler is a single forward pass with no retries:
//! validate inputs, locate the station file, validate the date, parse and
//! look up, respond. Station location runs before date validation, so an
//! unknown station is reported even when the date is also bad.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::state::AppState;
use crate::app::services::{lookup, reading_parser};
use crate::constants::{DATE_FORMAT, MAX_YEAR, MIN_YEAR};
use crate::{Error, Result};

/// Success body for a temperature lookup
#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    pub station: String,
    pub date: String,
    /// Degrees, or null when the reading is missing or sentinel-masked
    pub temperature: Option<f64>,
}

/// `GET /api/v1/{station}/{date}` — daily temperature lookup
pub async fn temperature(
    State(state): State<AppState>,
    Path((station, date)): Path<(String, String)>,
) -> std::result::Result<Json<TemperatureResponse>, ApiError> {
    info!("Request: station={}, date={}", station, date);

    // ValidateInputs
    if station.trim().is_empty() || date.trim().is_empty() {
        return Err(Error::MissingParameters.into());
    }

    // LocateStation
    let located = state.locator().locate(&station)?;

    // ValidateDate
    let target = validate_date(&date)?;

    // ParseAndLookup
    let table = reading_parser::parse_file(&located.data_file)?;
    let outcome = lookup::lookup_date(&table, target);

    // Respond
    info!(
        "Response: station={}, date={}, temperature={:?}",
        station,
        date,
        outcome.temperature()
    );
    Ok(Json(TemperatureResponse {
        station,
        date,
        temperature: outcome.temperature(),
    }))
}

/// `GET /` — static landing page
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/home.html"))
}

/// Validate a request date string as a strict YYYYMMDD calendar date
///
/// The year must fall in [1988, 2100]. Length and digit checks run first so
/// inputs like "2020011" or "2020-01-01" are rejected before chrono's more
/// permissive year parsing sees them.
fn validate_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.len() != 8 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid_date(input));
    }

    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| Error::invalid_date(input))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(Error::invalid_date(input));
    }

    Ok(date)
}
