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

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;
use crate::features::*;
use crate::xml;

/// Streaming iterator over AIXM features in an XML document.
///
/// Yields one [`Feature`] at a time as it encounters supported AIXM feature
/// elements in the XML stream. Unsupported elements are silently skipped.
///
/// # Examples
///
/// ```
/// use aixm::Features;
///
/// let xml = br#"
///   <message:AIXMBasicMessage
///     xmlns:aixm="http://www.aixm.aero/schema/5.1"
///     xmlns:gml="http://www.opengis.net/gml/3.2"
///     xmlns:message="http://www.aixm.aero/schema/5.1/message"
///     xmlns:xlink="http://www.w3.org/1999/xlink">
///     <message:hasMember>
///       <aixm:AirportHeliport gml:id="AH_0000001">
///         <aixm:timeSlice>
///           <aixm:AirportHeliportTimeSlice gml:id="AHP1">
///             <aixm:interpretation>BASELINE</aixm:interpretation>
///             <aixm:designator>NGW</aixm:designator>
///             <aixm:name>CABANISS FLD NOLF</aixm:name>
///           </aixm:AirportHeliportTimeSlice>
///         </aixm:timeSlice>
///       </aixm:AirportHeliport>
///     </message:hasMember>
///   </message:AIXMBasicMessage>"#;
///
/// let features: Vec<_> = Features::new(&xml[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(features.len(), 1);
/// ```
pub struct Features<'a> {
    reader: Reader<&'a [u8]>,
    data: &'a [u8],
    buf: Vec<u8>,
}

impl<'a> Features<'a> {
    /// Creates a new `Features` iterator from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(data);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            data,
            buf: Vec::new(),
        }
    }
}

impl<'a> Iterator for Features<'a> {
    type Item = Result<Feature, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    let local = local_name(name.as_ref());

                    let kind = match local {
                        b"AirportHeliport" => FeatureKind::AirportHeliport,
                        b"Runway" => FeatureKind::Runway,
                        b"RunwayDirection" => FeatureKind::RunwayDirection,
                        _ => continue,
                    };

                    // Capture the start tag text and read the subtree content.
                    let tag = String::from_utf8_lossy(e.as_ref()).to_string();
                    let end = e.to_end().into_owned();
                    let result = self
                        .reader
                        .read_to_end(end.name())
                        .map_err(Error::from)
                        .and_then(|span| {
                            let content = std::str::from_utf8(
                                &self.data[span.start as usize..span.end as usize],
                            )?;
                            let end_name = end.name();
                            let end_tag = std::str::from_utf8(end_name.as_ref())?;
                            let xml = format!("<{tag}>{content}</{end_tag}>");
                            deserialize_feature(kind, &xml)
                        });

                    return Some(result);
                }
                Ok(Event::Eof) => return None,
                Err(e) => return Some(Err(e.into())),
                _ => continue,
            }
        }
    }
}

/// Which kind of feature we're deserializing.
enum FeatureKind {
    AirportHeliport,
    Runway,
    RunwayDirection,
}

/// Deserializes a feature XML fragment into the public [`Feature`] type.
fn deserialize_feature(kind: FeatureKind, xml: &str) -> Result<Feature, Error> {
    match kind {
        FeatureKind::AirportHeliport => {
            let x: xml::AirportHeliportXml = quick_xml::de::from_str(xml)?;
            Ok(Feature::AirportHeliport(x.into()))
        }
        FeatureKind::Runway => {
            let x: xml::RunwayXml = quick_xml::de::from_str(xml)?;
            Ok(Feature::Runway(x.into()))
        }
        FeatureKind::RunwayDirection => {
            let x: xml::RunwayDirectionXml = quick_xml::de::from_str(xml)?;
            Ok(Feature::RunwayDirection(x.into()))
        }
    }
}

/// Returns the local name of an XML element, stripping any namespace prefix.
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .position(|&b| b == b':')
        .map_or(name, |pos| &name[pos + 1..])
}

/// Extracts the referenced feature id from an `xlink:href` value.
///
/// NASR files use XPath-shaped hrefs like
/// `(//aixm:AirportHeliport[@gml:id='AH_0000319'])`; other producers use
/// `urn:uuid:` or plain `#id` fragments. All three forms are accepted.
fn parse_feature_ref(href: &str) -> Option<String> {
    if let Some(uuid) = href.strip_prefix("urn:uuid:") {
        return Some(uuid.to_string());
    }
    if let Some(pos) = href.find("@gml:id='") {
        let rest = &href[pos + "@gml:id='".len()..];
        return rest.find('\'').map(|end| rest[..end].to_string());
    }
    href.strip_prefix('#').map(str::to_string)
}

/// Parses a NASR `gml:pos` text content into (latitude, longitude).
///
/// NASR positions are written longitude-first, unlike the lat-lon order
/// most EPSG:4326 AIXM producers use.
fn parse_pos(text: &str) -> Option<(f64, f64)> {
    let mut parts = text.split_whitespace();
    let lon = parts.next()?.parse().ok()?;
    let lat = parts.next()?.parse().ok()?;
    Some((lat, lon))
}

/// Collects the remark texts out of a list of annotation chains,
/// preserving document order.
fn collect_notes(annotations: Vec<xml::Annotation>) -> Vec<String> {
    annotations
        .into_iter()
        .filter_map(|a| a.note)
        .flat_map(|note| note.translated_notes)
        .filter_map(|tn| tn.linguistic_note)
        .filter_map(|ln| ln.note)
        .filter_map(|nt| nt.value)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Parses a value-with-uom element into its numeric value and unit.
fn parse_val_uom(val: Option<xml::ValWithUom>) -> (Option<f64>, Option<String>) {
    match val {
        Some(v) => {
            let num = v.value.as_deref().and_then(|s| s.trim().parse().ok());
            (num, v.uom)
        }
        None => (None, None),
    }
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public feature types
// ---------------------------------------------------------------------------

impl From<xml::AirportHeliportXml> for AirportHeliport {
    fn from(x: xml::AirportHeliportXml) -> Self {
        let ts = x.time_slice.inner;
        let (latitude, longitude) = ts
            .arp
            .and_then(|arp| arp.elevated_point)
            .and_then(|ep| ep.pos.as_deref().and_then(parse_pos))
            .map_or((None, None), |(lat, lon)| (Some(lat), Some(lon)));

        let served_city = ts
            .served_cities
            .into_iter()
            .filter_map(|sc| sc.city)
            .find_map(|city| city.name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let (state_code, state_name) = ts
            .extensions
            .into_iter()
            .filter_map(|ext| ext.inner)
            .fold((None, None), |(code, name), inner| {
                (
                    code.or(inner.state_post_office_code),
                    name.or(inner.state_name),
                )
            });

        AirportHeliport {
            id: x.id.unwrap_or_default(),
            designator: ts.designator.unwrap_or_default(),
            name: ts.name.unwrap_or_default(),
            location_indicator_icao: ts.location_indicator_icao,
            served_city,
            state_code,
            state_name,
            latitude,
            longitude,
            notes: collect_notes(ts.annotations),
        }
    }
}

impl From<xml::RunwayXml> for Runway {
    fn from(x: xml::RunwayXml) -> Self {
        let ts = x.time_slice.inner;

        // NASR writes strip dimensions; other producers write nominal ones.
        let (length, length_uom) = match (ts.nominal_length, ts.length_strip) {
            (Some(nominal), _) => parse_val_uom(Some(nominal)),
            (None, strip) => parse_val_uom(strip),
        };
        let (width, width_uom) = match (ts.nominal_width, ts.width_strip) {
            (Some(nominal), _) => parse_val_uom(Some(nominal)),
            (None, strip) => parse_val_uom(strip),
        };

        Runway {
            id: x.id.unwrap_or_default(),
            designator: ts.designator.unwrap_or_default(),
            length,
            length_uom,
            width,
            width_uom,
            associated_airport_id: ts
                .associated_airport_heliport
                .and_then(|r| r.href)
                .as_deref()
                .and_then(parse_feature_ref),
            notes: collect_notes(ts.annotations),
        }
    }
}

impl From<xml::RunwayDirectionXml> for RunwayDirection {
    fn from(x: xml::RunwayDirectionXml) -> Self {
        let ts = x.time_slice.inner;

        let threshold = ts.displaced_threshold_length.or_else(|| {
            ts.extensions
                .into_iter()
                .filter_map(|ext| ext.inner)
                .find_map(|inner| inner.displaced_threshold_length)
        });
        let (displaced_threshold, displaced_threshold_uom) = parse_val_uom(threshold);

        RunwayDirection {
            id: x.id.unwrap_or_default(),
            designator: ts.designator.unwrap_or_default(),
            used_runway_id: ts
                .used_runway
                .and_then(|r| r.href)
                .as_deref()
                .and_then(parse_feature_ref),
            displaced_threshold,
            displaced_threshold_uom,
            notes: collect_notes(ts.annotations),
        }
    }
}
