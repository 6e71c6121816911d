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

//! Serialization of extracted records to XML or JSON.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::TextRecord;

/// Entities the XML writer escapes that the translation-memory system
/// expects as literal characters, decoded in order after
/// serialization.
const XML_ENTITIES: [(&str, &str); 10] = [
    ("&#196;", "Ä"),
    ("&#214;", "Ö"),
    ("&#220;", "Ü"),
    ("&#223;", "ß"),
    ("&#228;", "ä"),
    ("&#246;", "ö"),
    ("&#252;", "ü"),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Writes extracted records to an output file in XML or JSON format.
pub struct OutputExporter {
    records: Vec<TextRecord>,
}

impl OutputExporter {
    /// Create an exporter over `records`, sorted by source file. The
    /// sort is stable, so records from one file keep their insertion
    /// order.
    pub fn new(mut records: Vec<TextRecord>) -> Self {
        records.sort_by(|a, b| a.source_file.cmp(&b.source_file));
        Self { records }
    }

    /// Write all records to `output_file` as XML.
    pub fn xml_export(&self, output_file: &Path, minified: bool) -> anyhow::Result<()> {
        info!("Writing XML export to {}", output_file.display());
        let serialized = self.to_xml(minified)?;
        fs::write(output_file, serialized)
            .with_context(|| format!("Failed to write {}", output_file.display()))
    }

    /// Serialize all records as one `<gui_element>` per record under a
    /// `<root>` element.
    ///
    /// The id has spaces replaced by underscores, the index is
    /// self-closing for single-value records and `metainformation` is
    /// omitted entirely when absent.
    fn to_xml(&self, minified: bool) -> anyhow::Result<String> {
        let mut writer = if minified {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        };
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("root")))?;
        for record in &self.records {
            writer.write_event(Event::Start(BytesStart::new("gui_element")))?;
            write_value(&mut writer, "file", &record.source_file)?;
            write_value(&mut writer, "id", &record.identifier.replace(' ', "_"))?;
            let index = record
                .index
                .map(|index| index.to_string())
                .unwrap_or_default();
            write_value(&mut writer, "index", &index)?;
            write_value(&mut writer, "text", &record.text)?;
            if let Some(metadata) = &record.metadata {
                write_value(&mut writer, "metainformation", metadata)?;
            }
            writer.write_event(Event::End(BytesEnd::new("gui_element")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("root")))?;
        let serialized = String::from_utf8(writer.into_inner())?;
        Ok(decode_entities(&serialized))
    }

    /// Write all records to `output_file` as a flat JSON object mapping
    /// identifier to text.
    ///
    /// Every field except identifier and text is dropped from this
    /// format; see DESIGN.md.
    pub fn json_export(&self, output_file: &Path, minified: bool) -> anyhow::Result<()> {
        info!("Writing JSON export to {}", output_file.display());
        fs::write(output_file, self.to_json(minified))
            .with_context(|| format!("Failed to write {}", output_file.display()))
    }

    fn to_json(&self, minified: bool) -> String {
        let entries = self
            .records
            .iter()
            .map(|record| (record.identifier.as_str(), escape_json_value(&record.text)))
            .collect::<Vec<_>>();
        if minified {
            let body = entries
                .iter()
                .map(|(identifier, text)| format!("\"{identifier}\":\"{text}\""))
                .collect::<Vec<_>>()
                .join(",");
            format!("{{{body}}}")
        } else {
            let body = entries
                .iter()
                .map(|(identifier, text)| format!("\t\"{identifier}\":\"{text}\""))
                .collect::<Vec<_>>()
                .join(",\n");
            if body.is_empty() {
                String::from("{\n}")
            } else {
                format!("{{\n{body}\n}}")
            }
        }
    }
}

/// Write one `<tag>value</tag>` child, self-closing when the value is
/// empty.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &str,
) -> anyhow::Result<()> {
    if value.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
    }
    Ok(())
}

/// Decode the fixed entity table back to literal characters so the
/// injected `<br />`/`<b>` markup and known special characters appear
/// verbatim in the output.
fn decode_entities(xml: &str) -> String {
    let mut result = xml.to_string();
    for (entity, literal) in XML_ENTITIES {
        result = result.replace(entity, literal);
    }
    result
}

/// Escape double quotes so the text is usable as a JSON value.
fn escape_json_value(text: &str) -> String {
    text.replace('"', "\\\"")
}
