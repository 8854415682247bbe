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

//! Walks one AIXM document and assembles [`Airfield`] records.
//!
//! NASR interleaves airport, runway, and runway-direction features, and
//! every cross-reference points through a `gml:id` that may appear before
//! or after the feature using it. The walk therefore streams the document
//! once, accumulating seeds and reference maps, and resolves the
//! runway-end chains after the stream ends.
//!
//! NASR encodes each physical runway as three `Runway` features: a pair
//! feature (`RWY_<suffix>`, designator `"14/32"`) carrying the strip
//! dimensions, and two end features (`RWY_BASE_END_<suffix>` /
//! `RWY_RECIPROCAL_END_<suffix>`) carrying the per-end designators.
//! Displaced thresholds live on `RunwayDirection` features that pair with
//! the end features by id suffix.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use aixm::Feature;

use crate::detect;
use crate::error::Error;
use crate::model::{normalize_designator, Airfield, RunwayEnd};

mod fields;

/// Result of scanning one source document.
pub struct DocumentScan {
    /// Fully assembled airfields whose remarks mention arresting gear.
    pub airfields: Vec<Airfield>,
    /// Features dropped for missing identity or failed deserialization.
    pub skipped_features: usize,
}

/// Identity fields and remarks accumulated for one airport feature.
struct AirportSeed {
    code: String,
    icao: Option<String>,
    name: String,
    city: Option<String>,
    state: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    remarks: Vec<String>,
}

/// One runway end feature, waiting for its pair dimensions.
struct EndSeed {
    id: String,
    designator: String,
    group: String,
}

/// One runway pair feature carrying the strip dimensions.
struct PairSeed {
    designator: String,
    length_ft: Option<u32>,
    width_ft: Option<u32>,
}

/// Where a runway-level remark belongs once references resolve.
enum NoteOwner {
    Airport(String),
    RunwayEnd(String),
}

/// Scans one AIXM document and returns the airfields with arresting-gear
/// mentions, fully assembled.
///
/// A feature that fails to deserialize, or that lacks the identity fields
/// needed to place it, is dropped and counted in
/// [`DocumentScan::skipped_features`]; the rest of the document still
/// contributes. A stream-level XML error aborts the whole document.
pub fn scan_document(data: &[u8]) -> Result<DocumentScan, Error> {
    let mut skipped_features = 0usize;
    let mut airports: IndexMap<String, AirportSeed> = IndexMap::new();
    let mut pair_dims: HashMap<(String, String), (Option<u32>, Option<u32>)> = HashMap::new();
    let mut pairs_by_airport: HashMap<String, Vec<PairSeed>> = HashMap::new();
    let mut ends_by_airport: HashMap<String, Vec<EndSeed>> = HashMap::new();
    let mut end_airports: HashMap<String, String> = HashMap::new();
    let mut thresholds: HashMap<String, u32> = HashMap::new();
    let mut sub_notes: Vec<(NoteOwner, Vec<String>)> = Vec::new();

    for feature in aixm::Features::new(data) {
        match feature {
            Ok(Feature::AirportHeliport(ahp)) => {
                if ahp.id.is_empty() || ahp.designator.trim().is_empty() {
                    skipped_features += 1;
                    warn!("skipping airport feature without an id or location identifier");
                    continue;
                }
                airports.insert(
                    ahp.id,
                    AirportSeed {
                        code: ahp.designator.trim().to_string(),
                        icao: ahp.location_indicator_icao,
                        name: ahp.name,
                        city: ahp.served_city,
                        state: ahp.state_code.or(ahp.state_name),
                        lat: ahp.latitude,
                        lon: ahp.longitude,
                        remarks: ahp.notes,
                    },
                );
            }

            Ok(Feature::Runway(rwy)) => {
                let Some(airport_id) = rwy.associated_airport_id else {
                    skipped_features += 1;
                    warn!("skipping runway {} without an airport reference", rwy.id);
                    continue;
                };
                if !rwy.notes.is_empty() {
                    sub_notes.push((NoteOwner::Airport(airport_id.clone()), rwy.notes));
                }
                match classify_runway_id(&rwy.id) {
                    RunwayRole::End { group } => {
                        end_airports.insert(rwy.id.clone(), airport_id.clone());
                        ends_by_airport.entry(airport_id).or_default().push(EndSeed {
                            id: rwy.id,
                            designator: rwy.designator,
                            group,
                        });
                    }
                    RunwayRole::Pair { group } => {
                        let length_ft = fields::length_ft(rwy.length, rwy.length_uom.as_deref());
                        let width_ft = fields::length_ft(rwy.width, rwy.width_uom.as_deref());
                        pair_dims.insert((airport_id.clone(), group), (length_ft, width_ft));
                        pairs_by_airport.entry(airport_id).or_default().push(PairSeed {
                            designator: rwy.designator,
                            length_ft,
                            width_ft,
                        });
                    }
                }
            }

            Ok(Feature::RunwayDirection(rdn)) => {
                // The NASR id convention is authoritative; usedRunway is the
                // fallback for producers that do not follow it.
                let end_id = direction_end_id(&rdn.id).or(rdn.used_runway_id);
                let Some(end_id) = end_id else {
                    continue;
                };
                if !rdn.notes.is_empty() {
                    sub_notes.push((NoteOwner::RunwayEnd(end_id.clone()), rdn.notes));
                }
                if let Some(displaced) = fields::length_ft(
                    rdn.displaced_threshold,
                    rdn.displaced_threshold_uom.as_deref(),
                ) {
                    thresholds.insert(end_id, displaced);
                }
            }

            Err(e) if e.is_recoverable() => {
                skipped_features += 1;
                warn!("skipping malformed feature: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Runway-level remarks join the owning airport's list after the
    // airport's own remarks, in document order.
    let mut extra_remarks: HashMap<String, Vec<String>> = HashMap::new();
    for (owner, notes) in sub_notes {
        let airport_id = match owner {
            NoteOwner::Airport(id) => Some(id),
            NoteOwner::RunwayEnd(end_id) => end_airports.get(&end_id).cloned(),
        };
        if let Some(id) = airport_id {
            extra_remarks.entry(id).or_default().extend(notes);
        }
    }

    let mut airfields = Vec::new();
    for (airport_id, seed) in airports {
        let mut remarks = seed.remarks;
        if let Some(extra) = extra_remarks.remove(&airport_id) {
            remarks.extend(extra);
        }
        if !detect::remarks_mention_gear(&remarks) {
            continue;
        }

        airfields.push(Airfield {
            code: seed.code,
            icao: seed.icao,
            name: seed.name,
            city: seed.city,
            state: seed.state,
            lat: seed.lat,
            lon: seed.lon,
            runways: resolve_runways(
                &airport_id,
                ends_by_airport.get(&airport_id),
                &pair_dims,
                &pairs_by_airport,
                &thresholds,
            ),
            gear: detect::scan_remarks(&remarks),
        });
    }

    debug!(
        "document scan: {} gear airfields, {} skipped features",
        airfields.len(),
        skipped_features
    );

    Ok(DocumentScan {
        airfields,
        skipped_features,
    })
}

/// Builds the runway-end list for one airport.
///
/// End features pick up their strip dimensions from the pair feature with
/// the same id suffix and their displaced threshold from the matching
/// direction feature. An airport whose document carries only pair features
/// gets the pair designator split so both ends stay distinct.
fn resolve_runways(
    airport_id: &str,
    ends: Option<&Vec<EndSeed>>,
    pair_dims: &HashMap<(String, String), (Option<u32>, Option<u32>)>,
    pairs_by_airport: &HashMap<String, Vec<PairSeed>>,
    thresholds: &HashMap<String, u32>,
) -> Vec<RunwayEnd> {
    match ends.filter(|ends| !ends.is_empty()) {
        Some(ends) => ends
            .iter()
            .filter(|end| !end.designator.trim().is_empty())
            .map(|end| {
                let (length_ft, width_ft) = pair_dims
                    .get(&(airport_id.to_string(), end.group.clone()))
                    .copied()
                    .unwrap_or((None, None));
                RunwayEnd {
                    designator: normalize_designator(&end.designator),
                    length_ft,
                    width_ft,
                    displaced_threshold_ft: thresholds.get(&end.id).copied(),
                }
            })
            .collect(),
        None => pairs_by_airport
            .get(airport_id)
            .into_iter()
            .flatten()
            .flat_map(|pair| {
                pair.designator
                    .split('/')
                    .filter(|d| !d.trim().is_empty())
                    .map(|d| RunwayEnd {
                        designator: normalize_designator(d),
                        length_ft: pair.length_ft,
                        width_ft: pair.width_ft,
                        displaced_threshold_ft: None,
                    })
                    .collect::<Vec<_>>()
            })
            .collect(),
    }
}

/// Whether a runway feature is a pair (dimensions) or an end (designator).
enum RunwayRole {
    Pair { group: String },
    End { group: String },
}

fn classify_runway_id(id: &str) -> RunwayRole {
    if let Some(group) = id.strip_prefix("RWY_BASE_END_") {
        RunwayRole::End {
            group: group.to_string(),
        }
    } else if let Some(group) = id.strip_prefix("RWY_RECIPROCAL_END_") {
        RunwayRole::End {
            group: group.to_string(),
        }
    } else if let Some(group) = id.strip_prefix("RWY_") {
        RunwayRole::Pair {
            group: group.to_string(),
        }
    } else {
        RunwayRole::Pair {
            group: id.to_string(),
        }
    }
}

/// Maps a direction feature id to its runway end feature id
/// (`RWY_DIRECTION_BASE_END_x` pairs with `RWY_BASE_END_x`).
fn direction_end_id(id: &str) -> Option<String> {
    id.strip_prefix("RWY_DIRECTION_BASE_END_")
        .map(|suffix| format!("RWY_BASE_END_{suffix}"))
        .or_else(|| {
            id.strip_prefix("RWY_DIRECTION_RECIPROCAL_END_")
                .map(|suffix| format!("RWY_RECIPROCAL_END_{suffix}"))
        })
}
