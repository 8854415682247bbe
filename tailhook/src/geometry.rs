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

//! Effective runway length computation.

/// Returns the effective length of a runway end in feet.
///
/// The effective length is the raw length reduced by the displaced
/// threshold when one is stated for that end, clamped at zero: a threshold
/// exceeding the raw length is a data anomaly, not a failure. Without
/// threshold data the raw length passes through unchanged; without a raw
/// length there is nothing to compute. Width needs no analogous
/// adjustment.
///
/// # Examples
///
/// ```
/// use tailhook::geometry::effective_length_ft;
///
/// assert_eq!(effective_length_ft(Some(9000), Some(300)), Some(8700));
/// assert_eq!(effective_length_ft(Some(9000), None), Some(9000));
/// assert_eq!(effective_length_ft(None, Some(300)), None);
/// ```
pub fn effective_length_ft(
    raw_length_ft: Option<u32>,
    displaced_threshold_ft: Option<u32>,
) -> Option<u32> {
    raw_length_ft.map(|length| match displaced_threshold_ft {
        Some(displaced) => length.saturating_sub(displaced),
        None => length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_by_displaced_threshold() {
        assert_eq!(effective_length_ft(Some(9000), Some(300)), Some(8700));
    }

    #[test]
    fn passes_through_without_threshold() {
        assert_eq!(effective_length_ft(Some(8000), None), Some(8000));
    }

    #[test]
    fn clamps_at_zero_when_threshold_exceeds_length() {
        assert_eq!(effective_length_ft(Some(200), Some(500)), Some(0));
    }

    #[test]
    fn absent_length_stays_absent() {
        assert_eq!(effective_length_ft(None, None), None);
        assert_eq!(effective_length_ft(None, Some(100)), None);
    }

    #[test]
    fn never_exceeds_raw_length() {
        for raw in [0u32, 1, 100, 8000] {
            for disp in [None, Some(0u32), Some(50), Some(10_000)] {
                let eff = effective_length_ft(Some(raw), disp).unwrap();
                assert!(eff <= raw);
            }
        }
    }
}
