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

//! Recognized arresting-gear vocabulary and the text patterns used to scan
//! remarks.
//!
//! Everything here is a fixed table or a compiled pattern behind a
//! [`LazyLock`]; the matcher functions take text in and give values out
//! with no state in between, so they can be shared across any number of
//! concurrent scans.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical gear types and their textual spelling variants.
///
/// FAA remarks write the same equipment with and without hyphens and with
/// stray spaces (`BAK-12`, `BAK12`, `BAK 12`). Suffixed models are listed
/// before their base model so the token scan, which tries alternatives in
/// table order, never truncates `BAK-12A` down to `BAK-12`.
const GEAR_ALIASES: &[(&str, &[&str])] = &[
    ("BAK-12A", &["BAK-12A", "BAK12A", "BAK 12A"]),
    ("BAK-12B", &["BAK-12B", "BAK12B", "BAK 12B"]),
    ("BAK-12", &["BAK-12", "BAK12", "BAK 12"]),
    ("BAK-13", &["BAK-13", "BAK13", "BAK 13"]),
    ("BAK-14", &["BAK-14", "BAK14", "BAK 14"]),
    ("BAK-15", &["BAK-15", "BAK15", "BAK 15"]),
    ("BAK-9", &["BAK-9", "BAK9", "BAK 9"]),
    ("MB60", &["MB60", "MB-60", "MB 60"]),
    ("EMAS", &["EMAS"]),
    ("E-5A", &["E-5A", "E5A"]),
    ("E-5", &["E-5", "E5"]),
    ("E-28A", &["E-28A", "E28A"]),
    ("E-28B", &["E-28B", "E28B"]),
    ("E-28", &["E-28", "E28"]),
    ("E-32A", &["E-32A", "E32A"]),
    ("E-32", &["E-32", "E32"]),
    ("MAAS", &["MAAS"]),
];

/// Matches any known gear alias as a whole word. Alternatives are ordered
/// longest-first; the regex engine tries them in that order at each
/// position, so a longer alias always wins over its prefix.
pub(crate) static GEAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let mut aliases: Vec<&str> = GEAR_ALIASES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied())
        .collect();
    aliases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = aliases
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

/// Generic arresting-gear marker (`A-GEAR`, `AGEAR`). Marks an airfield as
/// gear-equipped even when no specific model is named. The spaced form is
/// deliberately not matched; `"… has a gear …"` is ordinary English.
pub(crate) static AG_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bA-?GEAR\b").unwrap());

/// `HOOK <model>` mention, for hook-shaped tokens outside the alias table.
pub(crate) static HOOK_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bHOOK\s+([A-Z]{1,4} ?-? ?\d{1,3}[A-Z]?)\b").unwrap());

/// Runway reference inside a remark: `RWY 14`, `RY 04/22`, `RUNWAY 13-31`,
/// with one or two end designators.
pub(crate) static RWY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:RWYS?|RYS?|RUNWAYS?)\s*:?\s*(\d{1,2}[LRC]?)(?:\s*[/-]\s*(\d{1,2}[LRC]?))?")
        .unwrap()
});

/// Distance with an explicit threshold reference: `500 FT FM THR`,
/// `1500 FT FROM THRESHOLD`.
static FT_FROM_THR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{2,5})\s*FT\.?\s*(?:FM|FROM)\s*THR(?:ESHOLD)?\b").unwrap()
});

/// Parenthetical feet expression: `(1500 FT)`, `(1500')`, `(1500)`.
static PAREN_FEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\((\d{2,5})\s*(?:FT\.?|')?\)").unwrap());

/// Classifies a single matched token into its canonical gear type.
///
/// Case-insensitive and tolerant of internal whitespace runs. Returns
/// `None` for anything outside the alias table.
///
/// # Examples
///
/// ```
/// use tailhook::patterns::classify_gear_token;
///
/// assert_eq!(classify_gear_token("bak12a"), Some("BAK-12A"));
/// assert_eq!(classify_gear_token("MB-60"), Some("MB60"));
/// assert_eq!(classify_gear_token("CABLE"), None);
/// ```
pub fn classify_gear_token(text: &str) -> Option<&'static str> {
    let token = text.trim().to_ascii_uppercase();
    let token = token.split_whitespace().collect::<Vec<_>>().join(" ");
    GEAR_ALIASES.iter().find_map(|(canonical, aliases)| {
        aliases.iter().any(|a| *a == token).then_some(*canonical)
    })
}

/// Extracts a distance in feet from a text window around a gear mention.
///
/// An explicit `… FT FM THR` expression wins over a bare parenthetical
/// feet value. Returns `None` when the window states no distance.
pub fn extract_distance_ft(window: &str) -> Option<f64> {
    FT_FROM_THR
        .captures(window)
        .or_else(|| PAREN_FEET.captures(window))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
