// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Extract translatable text from mockup files.
//!
//! Scans one mockup file or a directory of mockup files and writes the
//! extracted strings as XML or JSON input for a translation-memory
//! system.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use mockup_i18n_helpers::export::OutputExporter;
use mockup_i18n_helpers::{discover_mockup_files, ExtractOptions, Extractor};

/// Extract translatable text from mockup files.
#[derive(Parser)]
#[command(name = "mockup-xgettext", version, about)]
struct Cli {
    /// Mockup file to read, or a directory searched for mockup files
    /// (including its assets subdirectory).
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// File the generated output is written to.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write output in JSON format instead of XML.
    #[arg(long)]
    json: bool,

    /// Remove whitespace from the generated output.
    #[arg(short, long)]
    minified: bool,

    /// Do not generate output, just run extraction and the
    /// ignored-text check.
    #[arg(short, long)]
    check: bool,

    /// Wrap every extracted text in #TAG# markers to fake a
    /// translation for downstream smoke tests.
    #[arg(long, value_name = "TAG")]
    fake_translation: Option<String>,

    /// Continue past recoverable errors instead of aborting.
    #[arg(short, long)]
    force: bool,

    /// Increase output verbosity.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::init_from_env(env_logger::Env::default().filter_or(
        "RUST_LOG",
        if cli.verbose { "debug" } else { "info" },
    ));

    if cli.output.is_none() && !cli.check {
        bail!("an output file is required unless running in check mode");
    }

    let mut extractor = Extractor::new(ExtractOptions {
        force: cli.force,
        fake_translation: cli.fake_translation.clone(),
    });
    for file in discover_mockup_files(&cli.input)? {
        extractor.extract_file(&file)?;
    }

    if cli.check {
        extractor.check_ignored_texts();
        return Ok(());
    }

    if let Some(output) = &cli.output {
        let exporter = OutputExporter::new(extractor.into_records());
        if cli.json {
            exporter.json_export(output, cli.minified)?;
        } else {
            exporter.xml_export(output, cli.minified)?;
        }
    }
    Ok(())
}
