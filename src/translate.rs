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

//! Back-fill of translated text into mockup files.
//!
//! Reads a translation XML file shaped like the exporter's XML output
//! (`gui_element` records keyed by `id`/`text`) and rewrites the
//! `text` property of matching elements, by identifier, inside copies
//! of the original mockup files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use log::{debug, info, warn};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use roxmltree::Document;

use crate::{discover_mockup_files, is_ignore_tag, property_text, TEXT_CONTROL_TYPES};

/// Translated texts keyed by identifier, read from a translation XML
/// export.
#[derive(Debug, Default)]
pub struct TranslationCatalog {
    texts: HashMap<String, String>,
}

impl TranslationCatalog {
    /// Parse a catalog from the contents of a translation XML file.
    ///
    /// Entries missing an id or a text are skipped with a warning.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let document = Document::parse(content).context("Syntax error in translation file")?;
        let mut texts = HashMap::new();
        let entries = document
            .root_element()
            .children()
            .filter(|node| node.is_element() && node.tag_name().name() == "gui_element");
        for entry in entries {
            match (property_text(entry, "id"), property_text(entry, "text")) {
                (Some(identifier), Some(text)) => {
                    texts.insert(identifier.to_string(), text.to_string());
                }
                _ => warn!("Translation entry without id or text skipped"),
            }
        }
        Ok(Self { texts })
    }

    /// Read and parse a catalog from `path`.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// The translated text for `identifier`, if any.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.texts.get(identifier).map(String::as_str)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Copy the mockup files from `source_dir` to `output_dir` and patch
/// the copies with the catalog texts. Returns the number of rewritten
/// text properties.
pub fn translate_mockups(
    source_dir: &Path,
    catalog: &TranslationCatalog,
    output_dir: &Path,
) -> anyhow::Result<usize> {
    if output_dir.exists() {
        bail!(
            "output directory {} already exists, refusing to overwrite",
            output_dir.display()
        );
    }
    copy_directory(source_dir, output_dir)?;
    let mut patched = 0;
    for file in discover_mockup_files(output_dir)? {
        info!("Translating {}", file.display());
        patched += translate_mockup_file(&file, catalog)?;
    }
    Ok(patched)
}

fn copy_directory(source: &Path, destination: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(destination)
        .with_context(|| format!("Failed to create {}", destination.display()))?;
    let entries =
        fs::read_dir(source).with_context(|| format!("Failed to list {}", source.display()))?;
    for entry in entries {
        let entry = entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_directory(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

/// Rewrite one mockup file in place with the catalog texts. Returns
/// the number of rewritten text properties.
pub fn translate_mockup_file(path: &Path, catalog: &TranslationCatalog) -> anyhow::Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (rewritten, patched) = rewrite_document(&content, catalog)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;
    fs::write(path, rewritten).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(patched)
}

/// Rewrite the `text` properties of translatable controls, leaving
/// every other event of the document untouched.
fn rewrite_document(
    content: &str,
    catalog: &TranslationCatalog,
) -> anyhow::Result<(String, usize)> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new(Vec::new());
    let mut patched = 0;
    // Nesting of control elements; true while the innermost control is
    // a text-bearing one.
    let mut control_stack: Vec<bool> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(start) if start.name().as_ref() == b"control" => {
                let translatable = control_type(&start)?
                    .is_some_and(|kind| TEXT_CONTROL_TYPES.contains(&kind.as_str()));
                control_stack.push(translatable);
                writer.write_event(Event::Start(start))?;
            }
            Event::End(end) if end.name().as_ref() == b"control" => {
                control_stack.pop();
                writer.write_event(Event::End(end))?;
            }
            Event::Start(start)
                if start.name().as_ref() == b"controlProperties"
                    && control_stack.last() == Some(&true) =>
            {
                writer.write_event(Event::Start(start))?;
                let group = read_property_group(&mut reader)?;
                patched += patch_property_group(&group, catalog, &mut writer)?;
                writer.write_event(Event::End(BytesEnd::new("controlProperties")))?;
            }
            event => writer.write_event(event)?,
        }
    }

    Ok((String::from_utf8(writer.into_inner())?, patched))
}

/// The `controlTypeID` attribute of a control start tag.
fn control_type(start: &BytesStart) -> anyhow::Result<Option<String>> {
    match start.try_get_attribute("controlTypeID")? {
        Some(attribute) => Ok(Some(attribute.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Buffer the events of one property group, up to but excluding its
/// closing tag.
fn read_property_group(reader: &mut Reader<&[u8]>) -> anyhow::Result<Vec<Event<'static>>> {
    let mut events = Vec::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Eof => bail!("unexpected end of document inside a property group"),
            Event::Start(start) if start.name().as_ref() == b"controlProperties" => {
                depth += 1;
                events.push(Event::Start(start.into_owned()));
            }
            Event::End(end) if end.name().as_ref() == b"controlProperties" => {
                if depth == 0 {
                    return Ok(events);
                }
                depth -= 1;
                events.push(Event::End(end.into_owned()));
            }
            event => events.push(event.into_owned()),
        }
    }
}

/// Write one buffered property group back out, replacing the content
/// of its `text` properties with the catalog text for the group's
/// identifier. Returns the number of rewritten text properties.
fn patch_property_group(
    events: &[Event<'static>],
    catalog: &TranslationCatalog,
    writer: &mut Writer<Vec<u8>>,
) -> anyhow::Result<usize> {
    let identifier = group_identifier(events)?;
    let translation = identifier
        .as_deref()
        .filter(|id| !is_ignore_tag(id))
        .and_then(|id| catalog.get(id));
    let Some(translation) = translation else {
        if let Some(id) = identifier.as_deref().filter(|id| !is_ignore_tag(id)) {
            debug!("No translation for identifier {id:?}");
        }
        for event in events {
            writer.write_event(event.clone())?;
        }
        return Ok(0);
    };

    let mut patched = 0;
    let mut in_text_property = false;
    let mut replaced_current = false;
    for event in events {
        match event {
            Event::Start(start) if start.name().as_ref() == b"text" => {
                in_text_property = true;
                replaced_current = false;
                writer.write_event(event.clone())?;
            }
            Event::End(end) if in_text_property && end.name().as_ref() == b"text" => {
                if !replaced_current {
                    writer.write_event(Event::Text(BytesText::new(translation)))?;
                    patched += 1;
                }
                in_text_property = false;
                writer.write_event(event.clone())?;
            }
            Event::Empty(start) if start.name().as_ref() == b"text" => {
                writer.write_event(Event::Start(start.clone()))?;
                writer.write_event(Event::Text(BytesText::new(translation)))?;
                writer.write_event(Event::End(BytesEnd::new("text")))?;
                patched += 1;
            }
            Event::Text(_) if in_text_property => {
                // The original text is dropped in favor of the
                // translation, written once per property.
                if !replaced_current {
                    writer.write_event(Event::Text(BytesText::new(translation)))?;
                    replaced_current = true;
                    patched += 1;
                }
            }
            event => writer.write_event(event.clone())?,
        }
    }
    Ok(patched)
}

/// The `customID` value of a buffered property group.
fn group_identifier(events: &[Event<'static>]) -> anyhow::Result<Option<String>> {
    let mut in_custom_id = false;
    for event in events {
        match event {
            Event::Start(start) if start.name().as_ref() == b"customID" => in_custom_id = true,
            Event::End(end) if end.name().as_ref() == b"customID" => in_custom_id = false,
            Event::Text(text) if in_custom_id => {
                return Ok(Some(text.unescape()?.into_owned()));
            }
            _ => {}
        }
    }
    Ok(None)
}
