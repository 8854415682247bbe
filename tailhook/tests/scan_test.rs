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

use tailhook::{scan_document, Dataset, OutputFormat};

const NASR_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<message:AIXMBasicMessage
  xmlns:aixm="http://www.aixm.aero/schema/5.1"
  xmlns:faa="http://www.faa.gov/aixm51/apt"
  xmlns:gml="http://www.opengis.net/gml/3.2"
  xmlns:message="http://www.aixm.aero/schema/5.1/message"
  xmlns:xlink="http://www.w3.org/1999/xlink">

  <!-- Airfield with a runway-pair gear remark, no displaced threshold -->
  <message:hasMember>
    <aixm:AirportHeliport gml:id="AH_0000001">
      <aixm:timeSlice>
        <aixm:AirportHeliportTimeSlice gml:id="AHP_1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>NGW</aixm:designator>
          <aixm:name>CABANISS FLD NOLF</aixm:name>
          <aixm:locationIndicatorICAO>KNGW</aixm:locationIndicatorICAO>
          <aixm:ARP>
            <aixm:ElevatedPoint srsName="urn:ogc:def:crs:EPSG::4326" gml:id="ep1">
              <gml:pos>-97.440556 27.700556</gml:pos>
            </aixm:ElevatedPoint>
          </aixm:ARP>
          <aixm:servedCity>
            <aixm:City gml:id="CITY_1">
              <aixm:name>CORPUS CHRISTI</aixm:name>
            </aixm:City>
          </aixm:servedCity>
          <aixm:annotation>
            <aixm:Note gml:id="NOTE_1">
              <aixm:purpose>REMARK</aixm:purpose>
              <aixm:translatedNote>
                <aixm:LinguisticNote gml:id="LN_1">
                  <aixm:note lang="eng">ARRESTING GEAR: BAK-12B RWY 14/32, 500 FT FM THR</aixm:note>
                </aixm:LinguisticNote>
              </aixm:translatedNote>
            </aixm:Note>
          </aixm:annotation>
          <aixm:extension>
            <faa:AirportHeliportExtension gml:id="AHX_1">
              <faa:countyStatePostOfficeCode>TX</faa:countyStatePostOfficeCode>
            </faa:AirportHeliportExtension>
          </aixm:extension>
        </aixm:AirportHeliportTimeSlice>
      </aixm:timeSlice>
    </aixm:AirportHeliport>
  </message:hasMember>

  <message:hasMember>
    <aixm:Runway gml:id="RWY_0000001_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>14/32</aixm:designator>
          <aixm:lengthStrip uom="FT">8000</aixm:lengthStrip>
          <aixm:widthStrip uom="FT">200</aixm:widthStrip>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000001'])"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>
  <message:hasMember>
    <aixm:Runway gml:id="RWY_BASE_END_0000001_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_2">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>14</aixm:designator>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000001'])"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>
  <message:hasMember>
    <aixm:Runway gml:id="RWY_RECIPROCAL_END_0000001_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_3">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>32</aixm:designator>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000001'])"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>

  <!-- Airfield with an airfield-level EMAS remark, a runway-level gear
       remark, and a displaced threshold on one end only -->
  <message:hasMember>
    <aixm:AirportHeliport gml:id="AH_0000002">
      <aixm:timeSlice>
        <aixm:AirportHeliportTimeSlice gml:id="AHP_2">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>NQI</aixm:designator>
          <aixm:name>KINGSVILLE NAS</aixm:name>
          <aixm:locationIndicatorICAO>KNQI</aixm:locationIndicatorICAO>
          <aixm:annotation>
            <aixm:Note gml:id="NOTE_2">
              <aixm:purpose>REMARK</aixm:purpose>
              <aixm:translatedNote>
                <aixm:LinguisticNote gml:id="LN_2">
                  <aixm:note lang="eng">EMAS INSTALLED</aixm:note>
                </aixm:LinguisticNote>
              </aixm:translatedNote>
            </aixm:Note>
          </aixm:annotation>
        </aixm:AirportHeliportTimeSlice>
      </aixm:timeSlice>
    </aixm:AirportHeliport>
  </message:hasMember>

  <message:hasMember>
    <aixm:Runway gml:id="RWY_0000002_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_4">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>13/31</aixm:designator>
          <aixm:lengthStrip uom="FT">9000</aixm:lengthStrip>
          <aixm:widthStrip uom="FT">200</aixm:widthStrip>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000002'])"/>
          <aixm:annotation>
            <aixm:Note gml:id="NOTE_3">
              <aixm:purpose>REMARK</aixm:purpose>
              <aixm:translatedNote>
                <aixm:LinguisticNote gml:id="LN_3">
                  <aixm:note lang="eng">A-GEAR E-28A RY 13 (1500')</aixm:note>
                </aixm:LinguisticNote>
              </aixm:translatedNote>
            </aixm:Note>
          </aixm:annotation>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>
  <message:hasMember>
    <aixm:Runway gml:id="RWY_BASE_END_0000002_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_5">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>13</aixm:designator>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000002'])"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>
  <message:hasMember>
    <aixm:Runway gml:id="RWY_RECIPROCAL_END_0000002_1">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY_TS_6">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>31</aixm:designator>
          <aixm:associatedAirportHeliport xlink:href="(//aixm:AirportHeliport[@gml:id='AH_0000002'])"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>
  <message:hasMember>
    <aixm:RunwayDirection gml:id="RWY_DIRECTION_BASE_END_0000002_1">
      <aixm:timeSlice>
        <aixm:RunwayDirectionTimeSlice gml:id="RDN_TS_1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>13</aixm:designator>
          <aixm:usedRunway xlink:href="(//aixm:Runway[@gml:id='RWY_BASE_END_0000002_1'])"/>
          <aixm:extension>
            <faa:RunwayDirectionExtension gml:id="RDX_1">
              <faa:displacedThresholdLength uom="FT">300</faa:displacedThresholdLength>
            </faa:RunwayDirectionExtension>
          </aixm:extension>
        </aixm:RunwayDirectionTimeSlice>
      </aixm:timeSlice>
    </aixm:RunwayDirection>
  </message:hasMember>

  <!-- Airfield with no gear mention anywhere; stays out of the dataset -->
  <message:hasMember>
    <aixm:AirportHeliport gml:id="AH_0000003">
      <aixm:timeSlice>
        <aixm:AirportHeliportTimeSlice gml:id="AHP_3">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>T78</aixm:designator>
          <aixm:name>QUIET FIELD</aixm:name>
          <aixm:annotation>
            <aixm:Note gml:id="NOTE_4">
              <aixm:purpose>REMARK</aixm:purpose>
              <aixm:translatedNote>
                <aixm:LinguisticNote gml:id="LN_4">
                  <aixm:note lang="eng">DEER ON AND INVOF ARPT</aixm:note>
                </aixm:LinguisticNote>
              </aixm:translatedNote>
            </aixm:Note>
          </aixm:annotation>
        </aixm:AirportHeliportTimeSlice>
      </aixm:timeSlice>
    </aixm:AirportHeliport>
  </message:hasMember>
</message:AIXMBasicMessage>"#;

#[test]
fn scan_collects_gear_airfields_only() {
    let scan = scan_document(NASR_DATA).expect("document should scan");
    assert_eq!(scan.skipped_features, 0);

    let codes: Vec<_> = scan.airfields.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, ["NGW", "NQI"]);
}

#[test]
fn gear_with_runway_pair_and_distance() {
    let scan = scan_document(NASR_DATA).unwrap();
    let ngw = &scan.airfields[0];

    assert_eq!(ngw.code, "NGW");
    assert_eq!(ngw.icao.as_deref(), Some("KNGW"));
    assert_eq!(ngw.city.as_deref(), Some("CORPUS CHRISTI"));
    assert_eq!(ngw.state.as_deref(), Some("TX"));
    assert!((ngw.lat.unwrap() - 27.700556).abs() < 1e-6);
    assert!((ngw.lon.unwrap() - (-97.440556)).abs() < 1e-6);

    assert_eq!(ngw.gear.len(), 1);
    let entry = &ngw.gear[0];
    assert_eq!(entry.gear_type, "BAK-12B");
    assert_eq!(entry.runways, vec!["14", "32"]);
    assert_eq!(entry.distance_ft, Some(500.0));
}

#[test]
fn runway_level_remarks_join_the_airfield() {
    let scan = scan_document(NASR_DATA).unwrap();
    let nqi = &scan.airfields[1];

    let types: Vec<_> = nqi.gear.iter().map(|g| g.gear_type.as_str()).collect();
    assert_eq!(types, ["EMAS", "E-28A"]);

    // EMAS came from an airfield-level remark with no runway reference.
    assert!(nqi.gear[0].runways.is_empty());
    assert_eq!(nqi.gear[0].distance_ft, None);

    // E-28A came from a remark on the runway feature itself.
    assert_eq!(nqi.gear[1].runways, vec!["13"]);
    assert_eq!(nqi.gear[1].distance_ft, Some(1500.0));
}

#[test]
fn displaced_threshold_reduces_one_end_only() {
    let scan = scan_document(NASR_DATA).unwrap();
    let dataset = Dataset::from_scans([scan]);
    let json = dataset.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let nqi = &value["airfields"][1];
    assert_eq!(nqi["code"], "NQI");

    let runways = nqi["runways"].as_array().unwrap();
    assert_eq!(runways.len(), 2);
    assert_eq!(runways[0]["designator"], "13");
    assert_eq!(runways[0]["length_ft"], 8700);
    assert_eq!(runways[1]["designator"], "31");
    assert_eq!(runways[1]["length_ft"], 9000);

    // No displaced threshold at NGW: both ends keep the raw length.
    let ngw = &value["airfields"][0];
    for runway in ngw["runways"].as_array().unwrap() {
        assert_eq!(runway["length_ft"], 8000);
        assert_eq!(runway["width_ft"], 200);
    }
}

#[test]
fn json_output_is_byte_identical_across_runs() {
    let render = || {
        let scan = scan_document(NASR_DATA).unwrap();
        Dataset::from_scans([scan])
            .render(OutputFormat::Json)
            .unwrap()
    };
    assert_eq!(render(), render());
}

#[test]
fn codes_output_is_sorted_and_deduplicated() {
    // The same document scanned twice still yields each code once.
    let scans = [
        scan_document(NASR_DATA).unwrap(),
        scan_document(NASR_DATA).unwrap(),
    ];
    let dataset = Dataset::from_scans(scans);
    let codes = dataset.render(OutputFormat::Codes).unwrap();
    assert_eq!(codes, "NGW\nNQI\n");
}

#[test]
fn one_malformed_feature_does_not_sink_the_rest() {
    let mut members = String::new();

    // A feature with no time slice fails deserialization but is bounded.
    members.push_str(
        r#"<message:hasMember>
             <aixm:AirportHeliport gml:id="AH_BAD">
               <aixm:wrongElement>garbage</aixm:wrongElement>
             </aixm:AirportHeliport>
           </message:hasMember>"#,
    );

    for i in 1..=9 {
        members.push_str(&format!(
            r#"<message:hasMember>
                 <aixm:AirportHeliport gml:id="AH_{i}">
                   <aixm:timeSlice>
                     <aixm:AirportHeliportTimeSlice gml:id="AHP_{i}">
                       <aixm:interpretation>BASELINE</aixm:interpretation>
                       <aixm:designator>AG{i}</aixm:designator>
                       <aixm:name>FIELD {i}</aixm:name>
                       <aixm:annotation>
                         <aixm:Note gml:id="N_{i}">
                           <aixm:translatedNote>
                             <aixm:LinguisticNote gml:id="L_{i}">
                               <aixm:note>A-GEAR BAK-12 AVBL</aixm:note>
                             </aixm:LinguisticNote>
                           </aixm:translatedNote>
                         </aixm:Note>
                       </aixm:annotation>
                     </aixm:AirportHeliportTimeSlice>
                   </aixm:timeSlice>
                 </aixm:AirportHeliport>
               </message:hasMember>"#,
        ));
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
           <message:AIXMBasicMessage
             xmlns:aixm="http://www.aixm.aero/schema/5.1"
             xmlns:gml="http://www.opengis.net/gml/3.2"
             xmlns:message="http://www.aixm.aero/schema/5.1/message">{members}</message:AIXMBasicMessage>"#,
    );

    let scan = scan_document(document.as_bytes()).expect("document should scan");
    assert_eq!(scan.airfields.len(), 9);
    assert_eq!(scan.skipped_features, 1);
}
