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

//! Arresting-gear detection over free-text remarks.
//!
//! Remarks are scanned left to right for known gear tokens. Around each
//! token a bounded text window is searched for a runway reference and a
//! distance-from-threshold expression. Detection is deliberately
//! over-inclusive: for planning purposes a spurious entry is cheaper than a
//! missed one, so ambiguous but token-matching text is kept. Garbled text
//! never fails a scan; it just matches nothing.

use std::collections::HashSet;

use crate::model::{normalize_designator, GearEntry};
use crate::patterns::{
    classify_gear_token, extract_distance_ft, AG_MARKER, GEAR_TOKEN, HOOK_MODEL, RWY_REF,
};

/// Characters of context searched on each side of a matched gear token.
const CONTEXT_WINDOW: usize = 80;

/// Whether any remark mentions arresting gear at all, by specific model or
/// by the generic marker. Used to decide whether an airfield belongs in
/// the dataset.
pub fn remarks_mention_gear<S: AsRef<str>>(remarks: &[S]) -> bool {
    remarks.iter().any(|remark| {
        let text = remark.as_ref();
        AG_MARKER.is_match(text) || GEAR_TOKEN.is_match(text)
    })
}

/// Scans an airfield's remarks and returns its deduplicated gear entries.
///
/// Entries keep their first-detection order. Two mentions with the same
/// (type, runways, rounded distance) signature collapse to one, so a gear
/// installation described in two overlapping remarks yields one entry.
///
/// # Examples
///
/// ```
/// use tailhook::detect::scan_remarks;
///
/// let remarks = ["ARRESTING GEAR: BAK-12B RWY 14/32, 500 FT FM THR"];
/// let gear = scan_remarks(&remarks);
///
/// assert_eq!(gear.len(), 1);
/// assert_eq!(gear[0].gear_type, "BAK-12B");
/// assert_eq!(gear[0].runways, vec!["14", "32"]);
/// assert_eq!(gear[0].distance_ft, Some(500.0));
/// ```
pub fn scan_remarks<S: AsRef<str>>(remarks: &[S]) -> Vec<GearEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for remark in remarks {
        for entry in scan_remark(remark.as_ref()) {
            if seen.insert(entry.signature()) {
                entries.push(entry);
            }
        }
    }

    entries
}

/// Scans one remark string for gear mentions.
fn scan_remark(text: &str) -> Vec<GearEntry> {
    let mut candidates: Vec<(usize, usize, String)> = GEAR_TOKEN
        .find_iter(text)
        .filter_map(|m| {
            classify_gear_token(m.as_str())
                .map(|canonical| (m.start(), m.end(), canonical.to_string()))
        })
        .collect();

    // Hook-shaped models outside the alias table become generic entries.
    // Hook-prefixed known models were already found by the token scan.
    for caps in HOOK_MODEL.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let model = &caps[1];
        // "HOOK RWY 06" is a runway reference, not a model designation.
        if classify_gear_token(model).is_none() && !RWY_REF.is_match(whole.as_str()) {
            candidates.push((
                whole.start(),
                whole.end(),
                format!("HOOK {}", normalize_hook_model(model)),
            ));
        }
    }
    candidates.sort_by_key(|&(start, end, _)| (start, end));

    candidates
        .into_iter()
        .map(|(start, end, gear_type)| {
            let window_start = floor_char_boundary(text, start.saturating_sub(CONTEXT_WINDOW));
            let window_end = ceil_char_boundary(text, (end + CONTEXT_WINDOW).min(text.len()));
            let window = &text[window_start..window_end];

            GearEntry {
                gear_type,
                raw: text[start..end].to_string(),
                runways: nearest_runway_pair(window, start - window_start, end - window_start),
                distance_ft: extract_distance_ft(window),
            }
        })
        .collect()
}

/// Finds the runway reference closest to the gear token within the window.
///
/// When the window holds references to more than one candidate pair the
/// one textually nearest the token wins. This is a heuristic, not a rule
/// the source data guarantees; remarks occasionally list several runways
/// in one breath.
fn nearest_runway_pair(window: &str, token_start: usize, token_end: usize) -> Vec<String> {
    let mut best: Option<(usize, Vec<String>)> = None;

    for caps in RWY_REF.captures_iter(window) {
        let Some(m) = caps.get(0) else { continue };
        let gap = if m.start() >= token_end {
            m.start() - token_end
        } else if m.end() <= token_start {
            token_start - m.end()
        } else {
            0
        };

        if best.as_ref().map_or(true, |(d, _)| gap < *d) {
            let mut designators = vec![normalize_designator(&caps[1])];
            if let Some(second) = caps.get(2) {
                designators.push(normalize_designator(second.as_str()));
            }
            best = Some((gap, designators));
        }
    }

    best.map(|(_, designators)| designators).unwrap_or_default()
}

/// Uppercases a hook model token and joins its parts with a hyphen.
fn normalize_hook_model(model: &str) -> String {
    model
        .to_ascii_uppercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
