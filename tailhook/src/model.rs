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

//! Record types for extracted airfields.
//!
//! An [`Airfield`] owns its [`RunwayEnd`] and [`GearEntry`] lists
//! exclusively; nothing is shared across airfields. The link from a gear
//! entry to a runway is a designator string, not a reference: remark text
//! and structured runway fields do not always agree, so the association is
//! resolved by lookup and may come up empty.

/// One airfield with its runway ends and detected arresting-gear entries.
///
/// Assembled once per source feature and not modified after emission. The
/// `code` is always present and non-empty; features without one are dropped
/// at parse time.
#[derive(Clone, Debug, PartialEq)]
pub struct Airfield {
    /// FAA location identifier (e.g. `"NGW"`).
    pub code: String,
    /// ICAO location indicator, if assigned (e.g. `"KNGW"`).
    pub icao: Option<String>,
    /// Airfield name.
    pub name: String,
    /// Served city, if stated.
    pub city: Option<String>,
    /// Two-letter state/territory code, if stated.
    pub state: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    pub lon: Option<f64>,
    /// Runway ends in source document order.
    pub runways: Vec<RunwayEnd>,
    /// Deduplicated gear entries in detection order.
    pub gear: Vec<GearEntry>,
}

/// One runway end with its raw dimensions as stated in the source.
///
/// Both ends of a physical runway are separate entries. The effective
/// (displaced-threshold-adjusted) length is computed by
/// [`geometry::effective_length_ft`](crate::geometry::effective_length_ft)
/// when the record is emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct RunwayEnd {
    /// Normalized end designator (e.g. `"09"`, `"27L"`).
    pub designator: String,
    /// Raw length in feet.
    pub length_ft: Option<u32>,
    /// Raw width in feet.
    pub width_ft: Option<u32>,
    /// Displaced threshold for this end in feet, if stated.
    pub displaced_threshold_ft: Option<u32>,
}

/// One detected arresting-gear mention.
#[derive(Clone, Debug, PartialEq)]
pub struct GearEntry {
    /// Canonical gear type (e.g. `"BAK-12"`, `"EMAS"`, `"HOOK M-21"`).
    pub gear_type: String,
    /// The exact remark substring the detection matched.
    pub raw: String,
    /// Zero, one, or two associated runway end designators, normalized.
    pub runways: Vec<String>,
    /// Distance from threshold in feet, if parsed.
    pub distance_ft: Option<f64>,
}

impl GearEntry {
    /// Dedup signature: canonical type, associated designators, and the
    /// distance rounded to whole feet. Entries with identical signatures
    /// collapse to one.
    pub fn signature(&self) -> (String, Vec<String>, Option<u64>) {
        (
            self.gear_type.clone(),
            self.runways.clone(),
            self.distance_ft.map(|d| d.round() as u64),
        )
    }
}

/// Normalizes a runway end designator for matching and output.
///
/// Trims, uppercases, and zero-pads a single-digit numeric part so that
/// `"4L"` from a remark matches `"04L"` from the structured runway record.
pub fn normalize_designator(raw: &str) -> String {
    let d = raw.trim().to_ascii_uppercase();
    let digits = d.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 1 {
        format!("0{d}")
    } else {
        d
    }
}

/// Tolerant airfield identifier comparison.
///
/// Identifiers are compared uppercased. A 4-letter code matches a 3-letter
/// code when stripping the 4-letter code's leading country-prefix letter
/// makes them equal, so `"KNGW"` and `"NGW"` refer to the same airfield.
/// Downstream consumers resolve their reference fields with exactly this
/// rule; do not change it without changing them.
pub fn idents_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_ascii_uppercase();
    let b = b.trim().to_ascii_uppercase();
    if a == b {
        return true;
    }
    match (a.len(), b.len()) {
        (4, 3) => a[1..] == b,
        (3, 4) => b[1..] == a,
        _ => false,
    }
}
