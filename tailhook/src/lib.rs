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

//! Extracts arresting-gear equipped airfields from FAA AIXM records.
//!
//! The FAA's NASR subscription files describe every US airport and runway
//! in AIXM 5.1 XML, but arresting-gear installations (BAK-12, E-28, EMAS,
//! …) only ever appear as free-text remarks. This crate walks the
//! airport/heliport features of such a document, detects gear mentions in
//! the remarks, associates them with runway ends where the text names
//! them, applies displaced-threshold corrections to runway lengths, and
//! emits one compact record per gear-equipped airfield.
//!
//! Processing is synchronous and per-document; documents are independent
//! units of work with no shared mutable state, so callers may parallelize
//! across them freely. The pattern tables are read-only statics.
//!
//! # Examples
//!
//! ```no_run
//! use tailhook::{scan_document, Dataset, OutputFormat};
//!
//! # fn main() -> Result<(), tailhook::Error> {
//! let data = std::fs::read("APT_AIXM.xml").unwrap();
//! let scan = scan_document(&data)?;
//! let dataset = Dataset::from_scans([scan]);
//!
//! println!("{}", dataset.render(OutputFormat::Json)?);
//! # Ok(())
//! # }
//! ```

pub mod detect;
pub mod emit;
mod error;
pub mod extract;
pub mod geometry;
pub mod model;
pub mod patterns;

pub use emit::{Dataset, OutputFormat};
pub use error::Error;
pub use extract::{scan_document, DocumentScan};
pub use model::{Airfield, GearEntry, RunwayEnd};
