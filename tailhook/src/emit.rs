// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The Tailhook Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dataset aggregation and rendering.
//!
//! All four output shapes carry the same airfields with the same gear and
//! runway content; only the presentation differs. Airfields are sorted by
//! code ascending in every shape so repeated runs over the same input diff
//! clean. JSON is the canonical shape and the only one the map front end
//! consumes; the emitted `length_ft` is the effective
//! (displaced-threshold-adjusted) length.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Error;
use crate::extract::DocumentScan;
use crate::geometry::effective_length_ft;
use crate::model::Airfield;

/// Output shape selector.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OutputFormat {
    /// Human-readable per-airfield summary lines.
    Text,
    /// One row per airfield, fixed column order.
    Csv,
    /// Newline-separated airfield codes, sorted and deduplicated.
    Codes,
    /// The canonical machine-readable shape.
    Json,
}

/// The aggregated, ordered extraction result.
pub struct Dataset {
    airfields: Vec<Airfield>,
    skipped_features: usize,
}

impl Dataset {
    /// Merges per-document scans into one dataset.
    ///
    /// Airfields are sorted by code ascending; when the same code appears
    /// in more than one document the first occurrence wins.
    pub fn from_scans(scans: impl IntoIterator<Item = DocumentScan>) -> Self {
        let mut airfields = Vec::new();
        let mut skipped_features = 0;
        let mut seen = HashSet::new();

        for scan in scans {
            skipped_features += scan.skipped_features;
            for airfield in scan.airfields {
                if seen.insert(airfield.code.clone()) {
                    airfields.push(airfield);
                }
            }
        }
        airfields.sort_by(|a, b| a.code.cmp(&b.code));

        Self {
            airfields,
            skipped_features,
        }
    }

    /// The airfields, sorted by code ascending.
    pub fn airfields(&self) -> &[Airfield] {
        &self.airfields
    }

    /// Total count of features dropped during scanning.
    pub fn skipped_features(&self) -> usize {
        self.skipped_features
    }

    /// Renders the dataset in the requested shape.
    pub fn render(&self, format: OutputFormat) -> Result<String, Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Csv => Ok(self.render_csv()),
            OutputFormat::Codes => Ok(self.render_codes()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for airfield in &self.airfields {
            let _ = write!(out, "{} - {}", airfield.code, airfield.name);
            match (&airfield.city, &airfield.state) {
                (Some(city), Some(state)) => {
                    let _ = write!(out, " ({city}, {state})");
                }
                (Some(city), None) => {
                    let _ = write!(out, " ({city})");
                }
                (None, Some(state)) => {
                    let _ = write!(out, " ({state})");
                }
                (None, None) => {}
            }
            out.push('\n');

            for entry in &airfield.gear {
                let _ = write!(out, "  gear: {}", entry.gear_type);
                if !entry.runways.is_empty() {
                    let _ = write!(out, " [{}]", entry.runways.join("/"));
                }
                if let Some(distance) = entry.distance_ft {
                    let _ = write!(out, " {distance} ft");
                }
                out.push('\n');
            }
            for runway in &airfield.runways {
                let _ = write!(out, "  rwy:  {}", runway.designator);
                if let Some(length) =
                    effective_length_ft(runway.length_ft, runway.displaced_threshold_ft)
                {
                    let _ = write!(out, " {length}");
                    if let Some(width) = runway.width_ft {
                        let _ = write!(out, "x{width}");
                    }
                    out.push_str(" ft");
                }
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn render_csv(&self) -> String {
        let mut out = String::from("code,icao,name,lat,lon,gear,runways\n");
        for airfield in &self.airfields {
            let gear = airfield
                .gear
                .iter()
                .map(|entry| entry.gear_type.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            let runways = airfield
                .runways
                .iter()
                .map(|runway| {
                    let mut summary = runway.designator.clone();
                    if let Some(length) =
                        effective_length_ft(runway.length_ft, runway.displaced_threshold_ft)
                    {
                        let _ = write!(summary, ":{length}");
                        if let Some(width) = runway.width_ft {
                            let _ = write!(summary, "x{width}");
                        }
                    }
                    summary
                })
                .collect::<Vec<_>>()
                .join("; ");

            let lat = airfield.lat.map(|v| v.to_string()).unwrap_or_default();
            let lon = airfield.lon.map(|v| v.to_string()).unwrap_or_default();
            let row = [
                airfield.code.as_str(),
                airfield.icao.as_deref().unwrap_or_default(),
                airfield.name.as_str(),
                lat.as_str(),
                lon.as_str(),
                gear.as_str(),
                runways.as_str(),
            ]
            .map(csv_escape)
            .join(",");
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    fn render_codes(&self) -> String {
        // Already sorted and deduplicated by code at aggregation time.
        let mut out = String::new();
        for airfield in &self.airfields {
            out.push_str(&airfield.code);
            out.push('\n');
        }
        out
    }

    fn render_json(&self) -> Result<String, Error> {
        let dataset = JsonDataset {
            airfields: self.airfields.iter().map(JsonAirfield::from).collect(),
        };
        let mut out = serde_json::to_string_pretty(&dataset)?;
        out.push('\n');
        Ok(out)
    }
}

/// Minimal CSV quoting: only fields containing a comma, quote, or newline
/// get wrapped, with quotes doubled.
fn csv_escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// ---------------------------------------------------------------------------
// JSON output records
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonDataset<'a> {
    airfields: Vec<JsonAirfield<'a>>,
}

#[derive(Serialize)]
struct JsonAirfield<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icao: Option<&'a str>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lon: Option<f64>,
    runways: Vec<JsonRunway<'a>>,
    gear: Vec<JsonGear<'a>>,
}

#[derive(Serialize)]
struct JsonRunway<'a> {
    designator: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    length_ft: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width_ft: Option<u32>,
}

#[derive(Serialize)]
struct JsonGear<'a> {
    #[serde(rename = "type")]
    gear_type: &'a str,
    raw: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    runways: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_ft: Option<f64>,
}

impl<'a> From<&'a Airfield> for JsonAirfield<'a> {
    fn from(airfield: &'a Airfield) -> Self {
        JsonAirfield {
            code: &airfield.code,
            icao: airfield.icao.as_deref(),
            name: &airfield.name,
            city: airfield.city.as_deref(),
            state: airfield.state.as_deref(),
            lat: airfield.lat,
            lon: airfield.lon,
            runways: airfield
                .runways
                .iter()
                .map(|runway| JsonRunway {
                    designator: &runway.designator,
                    length_ft: effective_length_ft(
                        runway.length_ft,
                        runway.displaced_threshold_ft,
                    ),
                    width_ft: runway.width_ft,
                })
                .collect(),
            gear: airfield
                .gear
                .iter()
                .map(|entry| JsonGear {
                    gear_type: &entry.gear_type,
                    raw: &entry.raw,
                    runways: entry.runways.iter().map(String::as_str).collect(),
                    distance_ft: entry.distance_ft,
                })
                .collect(),
        }
    }
}
