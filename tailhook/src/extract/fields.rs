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

/// Converts a dimension value with unit to whole feet.
///
/// NASR states runway dimensions in feet, usually without repeating the
/// unit; metric units are converted for other producers. Non-finite and
/// negative values are treated as absent rather than failing.
pub(crate) fn length_ft(value: Option<f64>, uom: Option<&str>) -> Option<u32> {
    let value = value?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let feet = match uom {
        Some("M") => value * 3.28084,
        Some("KM") => value * 3280.84,
        _ => value,
    };
    Some(feet.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_pass_through() {
        assert_eq!(length_ft(Some(8000.0), Some("FT")), Some(8000));
        assert_eq!(length_ft(Some(8000.0), None), Some(8000));
    }

    #[test]
    fn metric_units_convert() {
        assert_eq!(length_ft(Some(2800.0), Some("M")), Some(9187));
        assert_eq!(length_ft(Some(1.0), Some("KM")), Some(3281));
    }

    #[test]
    fn bad_values_are_absent() {
        assert_eq!(length_ft(None, Some("FT")), None);
        assert_eq!(length_ft(Some(f64::NAN), None), None);
        assert_eq!(length_ft(Some(-20.0), None), None);
    }
}
