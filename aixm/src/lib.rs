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

//! AIXM (Aeronautical Information Exchange Model) parser for FAA NASR data.
//!
//! This crate streams the airport, runway, and runway-direction features out
//! of the AIXM 5.1 XML documents published with each FAA NASR subscription
//! cycle (`APT_AIXM.xml` and friends). It exposes one lazy iterator,
//! [`Features`], that yields flat [`Feature`] values; all TimeSlice
//! wrappers, GML geometry elements, xlink cross-references, and annotation
//! chains are resolved internally.

mod error;
mod features;
mod parser;
mod xml;

pub use error::Error;
pub use features::{AirportHeliport, Feature, Runway, RunwayDirection};
pub use parser::Features;
