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

//! tailhook CLI: list or export arresting-gear airfields from FAA AIXM
//! data on disk.
//!
//! The binary only does plumbing. It finds the XML documents under the
//! input root, feeds them to the `tailhook` engine one at a time, and
//! writes the rendered dataset to stdout or a file. A document that fails
//! to parse is skipped with a warning; an unreadable root or a root with
//! zero parseable documents is fatal. Zero matched airfields is a valid,
//! successful result.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{info, warn};
use thiserror::Error;
use walkdir::WalkDir;

use tailhook::{scan_document, Dataset, DocumentScan, OutputFormat};

#[derive(Debug, Clone, ValueEnum)]
enum Format {
    /// Human-readable summary per airfield
    Text,
    /// One CSV row per airfield
    Csv,
    /// Airfield codes only, sorted
    Codes,
    /// Canonical JSON dataset
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Csv => OutputFormat::Csv,
            Format::Codes => OutputFormat::Codes,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "List or export airfields with arresting gear from AIXM XML data.")]
struct Cli {
    /// Root folder containing AIXM XML files
    #[arg(long, default_value = "data")]
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("input root {} is not a readable directory", .0.display())]
    UnreadableRoot(PathBuf),
    #[error("no parseable AIXM documents under {}", .0.display())]
    NoDocuments(PathBuf),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Engine(#[from] tailhook::Error),
}

/// Collects the XML documents to process.
///
/// The consolidated `APT_AIXM.xml` covers every airport feature, so when
/// it is present nothing else needs reading. Otherwise every `*.xml` under
/// the root is taken, in sorted order for reproducible output.
fn find_documents(root: &Path) -> CliResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CliError::UnreadableRoot(root.to_path_buf()));
    }

    let consolidated = root.join("APT_AIXM.xml");
    if consolidated.is_file() {
        return Ok(vec![consolidated]);
    }

    let documents = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    Ok(documents)
}

fn run(cli: Cli) -> CliResult<()> {
    let documents = find_documents(&cli.root)?;

    let mut scans: Vec<DocumentScan> = Vec::new();
    for path in &documents {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("skipping unreadable {}: {e}", path.display());
                continue;
            }
        };
        match scan_document(&data) {
            Ok(scan) => {
                info!(
                    "{}: {} gear airfields, {} skipped features",
                    path.display(),
                    scan.airfields.len(),
                    scan.skipped_features
                );
                scans.push(scan);
            }
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    if scans.is_empty() {
        return Err(CliError::NoDocuments(cli.root));
    }

    let dataset = Dataset::from_scans(scans);
    if dataset.skipped_features() > 0 {
        warn!("{} features skipped in total", dataset.skipped_features());
    }

    let rendered = dataset.render(cli.format.into())?;
    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
