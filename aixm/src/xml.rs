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

//! Serde-deserializable structs that mirror the AIXM 5.1 XML structure of
//! the FAA NASR subscriber files.
//!
//! These are internal types used by the parser. They map directly to the XML
//! nesting with namespace-qualified element names, then get converted into
//! the flat public [`Feature`](crate::Feature) types. FAA-specific elements
//! (`lengthStrip`, `countyStatePostOfficeCode`, the `faa:` extension blocks)
//! are modeled next to their AIXM-standard counterparts.

#![allow(dead_code)]

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared GML/AIXM types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ElevatedPoint {
    #[serde(rename = "pos", default)]
    pub pos: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValWithUom {
    #[serde(rename = "@uom", default)]
    pub uom: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

/// An xlink reference element (e.g. `<aixm:associatedAirportHeliport
/// xlink:href="..."/>`). NASR files use XPath-shaped hrefs.
#[derive(Debug, Deserialize)]
pub(crate) struct XlinkRef {
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

// ---------------------------------------------------------------------------
// Annotations (remarks)
// ---------------------------------------------------------------------------

/// One `<aixm:annotation>` wrapper. The remark text sits at the bottom of
/// the Note/translatedNote/LinguisticNote/note chain.
#[derive(Debug, Deserialize)]
pub(crate) struct Annotation {
    #[serde(rename = "Note")]
    pub note: Option<NoteXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteXml {
    #[serde(rename = "propertyName", default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(rename = "translatedNote", default)]
    pub translated_notes: Vec<TranslatedNote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslatedNote {
    #[serde(rename = "LinguisticNote")]
    pub linguistic_note: Option<LinguisticNote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LinguisticNote {
    #[serde(rename = "note", default)]
    pub note: Option<NoteText>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteText {
    #[serde(rename = "@lang", default)]
    pub lang: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// AirportHeliport
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AirportHeliportXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "timeSlice")]
    pub time_slice: AhpTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhpTimeSliceWrapper {
    #[serde(rename = "AirportHeliportTimeSlice")]
    pub inner: AhpTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhpTimeSlice {
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "locationIndicatorICAO", default)]
    pub location_indicator_icao: Option<String>,
    #[serde(rename = "ARP", default)]
    pub arp: Option<Arp>,
    #[serde(rename = "servedCity", default)]
    pub served_cities: Vec<ServedCity>,
    #[serde(rename = "annotation", default)]
    pub annotations: Vec<Annotation>,
    #[serde(rename = "extension", default)]
    pub extensions: Vec<AhpExtension>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Arp {
    #[serde(rename = "ElevatedPoint")]
    pub elevated_point: Option<ElevatedPoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServedCity {
    #[serde(rename = "City")]
    pub city: Option<City>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct City {
    #[serde(default)]
    pub name: Option<String>,
}

/// The FAA `AirportHeliportExtension` block carrying state information.
#[derive(Debug, Deserialize)]
pub(crate) struct AhpExtension {
    #[serde(rename = "AirportHeliportExtension")]
    pub inner: Option<AhpExtensionInner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhpExtensionInner {
    #[serde(rename = "countyStatePostOfficeCode", default)]
    pub state_post_office_code: Option<String>,
    #[serde(rename = "stateName", default)]
    pub state_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Runway
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RunwayXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "timeSlice")]
    pub time_slice: RwyTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RwyTimeSliceWrapper {
    #[serde(rename = "RunwayTimeSlice")]
    pub inner: RwyTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RwyTimeSlice {
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(rename = "nominalLength", default)]
    pub nominal_length: Option<ValWithUom>,
    #[serde(rename = "nominalWidth", default)]
    pub nominal_width: Option<ValWithUom>,
    #[serde(rename = "lengthStrip", default)]
    pub length_strip: Option<ValWithUom>,
    #[serde(rename = "widthStrip", default)]
    pub width_strip: Option<ValWithUom>,
    #[serde(rename = "associatedAirportHeliport", default)]
    pub associated_airport_heliport: Option<XlinkRef>,
    #[serde(rename = "annotation", default)]
    pub annotations: Vec<Annotation>,
}

// ---------------------------------------------------------------------------
// RunwayDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RunwayDirectionXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "timeSlice")]
    pub time_slice: RdnTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnTimeSliceWrapper {
    #[serde(rename = "RunwayDirectionTimeSlice")]
    pub inner: RdnTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnTimeSlice {
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(rename = "usedRunway", default)]
    pub used_runway: Option<XlinkRef>,
    // NASR files have placed the displaced threshold both directly on the
    // time slice and inside the faa extension block over the years.
    #[serde(rename = "displacedThresholdLength", default)]
    pub displaced_threshold_length: Option<ValWithUom>,
    #[serde(rename = "extension", default)]
    pub extensions: Vec<RdnExtension>,
    #[serde(rename = "annotation", default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnExtension {
    #[serde(rename = "RunwayDirectionExtension")]
    pub inner: Option<RdnExtensionInner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnExtensionInner {
    #[serde(rename = "displacedThresholdLength", default)]
    pub displaced_threshold_length: Option<ValWithUom>,
}
