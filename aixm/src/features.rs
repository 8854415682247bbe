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

//! Public AIXM feature types yielded by the [`Features`](crate::Features)
//! iterator.
//!
//! Each struct is a flat representation of one AIXM 5.1 feature with all
//! relevant fields already extracted and parsed. Coordinates are WGS-84
//! decimal degrees, numeric values are `f64`, and feature references are
//! plain `gml:id` strings ready for cross-reference lookups.
//!
//! The AIXM XML format nests data deeply (TimeSlice wrappers, GML geometry
//! elements, xlink references, annotation chains). The parser handles that
//! nesting internally using serde-mapped structs and converts each feature
//! into these flat types so callers never deal with XML structure.

/// A parsed AIXM feature yielded by [`Features`](crate::Features).
///
/// Match on the variant to access the specific feature data.
///
/// # Examples
///
/// ```no_run
/// # let data = vec![];
/// for result in aixm::Features::new(&data) {
///     match result.unwrap() {
///         aixm::Feature::AirportHeliport(ahp) => {
///             println!("{}: {}", ahp.designator, ahp.name);
///         }
///         aixm::Feature::Runway(rwy) => {
///             println!("Runway {}", rwy.designator);
///         }
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug)]
pub enum Feature {
    /// An airport or heliport (AIXM `AirportHeliport`).
    AirportHeliport(AirportHeliport),
    /// A runway feature (AIXM `Runway`). NASR files emit one feature per
    /// physical strip plus one per runway end; see [`Runway::id`].
    Runway(Runway),
    /// One directional use of a runway end (AIXM `RunwayDirection`).
    RunwayDirection(RunwayDirection),
}

/// An airport or heliport parsed from an AIXM `AirportHeliport` feature.
///
/// Carries the identity fields, the aerodrome reference point (ARP)
/// coordinates, the FAA state extension fields, and every remark attached
/// to the feature, in document order.
///
/// # Examples
///
/// ```no_run
/// # let ahp: aixm::AirportHeliport = unimplemented!();
/// // Use the ICAO indicator for lookup, falling back to the designator
/// let ident = ahp.location_indicator_icao
///     .as_deref()
///     .unwrap_or(&ahp.designator);
/// ```
#[derive(Clone, Debug)]
pub struct AirportHeliport {
    /// `gml:id` of the feature (e.g. `"AH_0000319"`).
    pub id: String,
    /// FAA location identifier (e.g. `"NGW"`).
    pub designator: String,
    /// Human-readable name (e.g. `"CABANISS FLD NOLF"`).
    pub name: String,
    /// ICAO location indicator, if assigned (e.g. `"KNGW"`).
    pub location_indicator_icao: Option<String>,
    /// Served city name, if stated.
    pub served_city: Option<String>,
    /// Two-letter FAA state/territory post office code (e.g. `"TX"`).
    pub state_code: Option<String>,
    /// Full state name from the FAA extension block.
    pub state_name: Option<String>,
    /// ARP latitude in WGS-84 decimal degrees.
    pub latitude: Option<f64>,
    /// ARP longitude in WGS-84 decimal degrees.
    pub longitude: Option<f64>,
    /// Remark texts from every annotation chain, in document order.
    pub notes: Vec<String>,
}

/// A runway feature parsed from an AIXM `Runway` element.
///
/// NASR encodes each physical runway three times: a pair feature
/// (`RWY_…`, designator `"14/32"`) carrying the strip dimensions, and two
/// end features (`RWY_BASE_END_…` / `RWY_RECIPROCAL_END_…`, designators
/// `"14"` and `"32"`) carrying the per-end designators. The `id` is the
/// only way to tell them apart.
#[derive(Clone, Debug)]
pub struct Runway {
    /// `gml:id` of the feature (e.g. `"RWY_0000319_1"`,
    /// `"RWY_BASE_END_0000319_1"`).
    pub id: String,
    /// Designator: pair form (`"14/32"`) or end form (`"14"`).
    pub designator: String,
    /// Strip length value, from `lengthStrip` or `nominalLength`.
    pub length: Option<f64>,
    /// Unit of measurement for [`length`](Self::length) (e.g. `"FT"`).
    pub length_uom: Option<String>,
    /// Strip width value, from `widthStrip` or `nominalWidth`.
    pub width: Option<f64>,
    /// Unit of measurement for [`width`](Self::width).
    pub width_uom: Option<String>,
    /// `gml:id` of the associated airport (from `xlink:href`).
    pub associated_airport_id: Option<String>,
    /// Remark texts attached to this runway feature, in document order.
    pub notes: Vec<String>,
}

/// One directional use of a runway end, parsed from an AIXM
/// `RunwayDirection` feature.
///
/// Links back to the runway end feature via
/// [`used_runway_id`](Self::used_runway_id); NASR additionally encodes the
/// link in the id itself (`RWY_DIRECTION_BASE_END_<suffix>` pairs with
/// `RWY_BASE_END_<suffix>`).
#[derive(Clone, Debug)]
pub struct RunwayDirection {
    /// `gml:id` of the feature (e.g. `"RWY_DIRECTION_BASE_END_0000319_1"`).
    pub id: String,
    /// Designator for this end (e.g. `"14"`).
    pub designator: String,
    /// `gml:id` of the runway end feature this direction uses.
    pub used_runway_id: Option<String>,
    /// Displaced threshold length value, if stated.
    pub displaced_threshold: Option<f64>,
    /// Unit of measurement for
    /// [`displaced_threshold`](Self::displaced_threshold).
    pub displaced_threshold_uom: Option<String>,
    /// Remark texts attached to this direction feature, in document order.
    pub notes: Vec<String>,
}
