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

//! Helpers for translating Balsamiq mockup projects.
//!
//! The tools here extract user-facing strings from mockup (`.bmml`)
//! files into an XML or JSON export for a translation-memory system,
//! and patch translated strings back into copies of the mockups.
//!
//! Extraction walks the control elements of a mockup document, reads
//! the `customID`, `text` and `customData` properties of every
//! text-bearing control, normalizes the percent-escaped markup (see
//! [`normalize`]) and accumulates [`TextRecord`] values in an
//! [`Extractor`]. The [`export`] module serializes the records, the
//! [`translate`] module implements the reverse direction. The
//! `mockup-xgettext` and `mockup-gettext` binaries wire this into a
//! command-line workflow.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, error, info, warn};
use roxmltree::{Document, Node};

pub mod export;
pub mod normalize;
pub mod translate;

/// File extension of mockup files.
pub const MOCKUP_EXTENSION: &str = "bmml";

/// Mockup control types that carry translatable text.
pub const TEXT_CONTROL_TYPES: [&str; 13] = [
    "com.balsamiq.mockups::Label",
    "com.balsamiq.mockups::Paragraph",
    "com.balsamiq.mockups::TextArea",
    "com.balsamiq.mockups::TextInput",
    "com.balsamiq.mockups::SubTitle",
    "com.balsamiq.mockups::Button",
    "com.balsamiq.mockups::Accordion",
    "com.balsamiq.mockups::Tooltip",
    "com.balsamiq.mockups::IconLabel",
    "com.balsamiq.mockups::ComboBox",
    "com.balsamiq.mockups::ButtonBar",
    "com.balsamiq.mockups::CheckBox",
    "com.balsamiq.mockups::Link",
];

/// Sentinel identifiers marking an element as not to be translated.
pub const IGNORE_TAGS: [&str; 1] = ["IGNORE"];

const COMBO_BOX_TYPE: &str = "com.balsamiq.mockups::ComboBox";
const BUTTON_BAR_TYPE: &str = "com.balsamiq.mockups::ButtonBar";

/// Separator between the options of a button bar. The normalizer
/// leaves `%2C` untouched, so it is matched percent-escaped.
const BUTTON_BAR_SEPARATOR: &str = "%2C";
/// Separator between the options of a combo box. The normalizer has
/// already turned the `%0A` line breaks into `<br />` tags.
const COMBO_BOX_SEPARATOR: &str = "<br />";

/// Whether `identifier` marks its element as ignored. Matching is
/// case-insensitive.
pub fn is_ignore_tag(identifier: &str) -> bool {
    IGNORE_TAGS
        .iter()
        .any(|tag| identifier.eq_ignore_ascii_case(tag))
}

/// One extracted string.
#[derive(Debug, Clone)]
pub struct TextRecord {
    /// Unique key, from the mockup's `customID` property. Multi-value
    /// elements suffix it with the option text.
    pub identifier: String,
    /// Normalized display string.
    pub text: String,
    /// Originating mockup file, used for diagnostics and output
    /// grouping.
    pub source_file: String,
    /// Free-text annotation from the mockup's `customData` property.
    pub metadata: Option<String>,
    /// Position within a multi-value element such as a button bar.
    pub index: Option<usize>,
}

impl PartialEq for TextRecord {
    // The source file is excluded on purpose: the same string extracted
    // from two files counts as one record.
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.text == other.text
            && self.metadata == other.metadata
            && self.index == other.index
    }
}

/// Options controlling an extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Continue past recoverable errors instead of aborting.
    pub force: bool,
    /// Wrap every extracted text in `#TAG#` markers to simulate a
    /// translation for downstream smoke tests.
    pub fake_translation: Option<String>,
}

/// Accumulates extracted records over one or more mockup files.
///
/// The two sequences are disjoint: `kept` holds records destined for
/// the export, `ignored` holds records whose identifier matched an
/// ignore sentinel. Records are never mutated after insertion.
#[derive(Debug, Default)]
pub struct Extractor {
    options: ExtractOptions,
    kept: Vec<TextRecord>,
    ignored: Vec<TextRecord>,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            kept: Vec::new(),
            ignored: Vec::new(),
        }
    }

    /// Records that survived filtering, in insertion order.
    pub fn records(&self) -> &[TextRecord] {
        &self.kept
    }

    /// Records whose identifier matched an ignore sentinel.
    pub fn ignored(&self) -> &[TextRecord] {
        &self.ignored
    }

    /// Consume the extractor, returning the kept records.
    pub fn into_records(self) -> Vec<TextRecord> {
        self.kept
    }

    /// Read and parse one mockup file and extract its texts.
    ///
    /// An unreadable or malformed file is a fatal error; in permissive
    /// mode it is logged and the file is skipped instead.
    pub fn extract_file(&mut self, path: &Path) -> anyhow::Result<()> {
        info!("Extracting text from {}", path.display());
        let source_file = path.display().to_string();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if self.options.force => {
                error!("Cannot read {source_file}: {err}");
                return Ok(());
            }
            Err(err) => {
                return Err(err).context(format!("Failed to read {source_file}"));
            }
        };
        let document = match Document::parse(&content) {
            Ok(document) => document,
            Err(err) if self.options.force => {
                error!("Syntax error in {source_file}: {err}");
                return Ok(());
            }
            Err(err) => {
                return Err(err).context(format!("Syntax error in {source_file}"));
            }
        };
        self.extract_document(&document, &source_file)
    }

    /// Extract texts from every control element of a parsed document.
    ///
    /// Control elements are recognized by their `controlTypeID`
    /// attribute; everything else is structural and skipped.
    pub fn extract_document(
        &mut self,
        document: &Document,
        source_file: &str,
    ) -> anyhow::Result<()> {
        for node in document.descendants().filter(Node::is_element) {
            if let Some(kind) = node.attribute("controlTypeID") {
                self.extract_control(node, kind, source_file)?;
            }
        }
        Ok(())
    }

    fn extract_control(
        &mut self,
        control: Node<'_, '_>,
        kind: &str,
        source_file: &str,
    ) -> anyhow::Result<()> {
        if !TEXT_CONTROL_TYPES.contains(&kind) {
            return self.check_misplaced_identifier(control, kind, source_file);
        }
        match kind {
            BUTTON_BAR_TYPE => self.extract_multi_value(control, source_file, BUTTON_BAR_SEPARATOR),
            COMBO_BOX_TYPE => self.extract_multi_value(control, source_file, COMBO_BOX_SEPARATOR),
            _ => self.extract_single_value(control, source_file),
        }
    }

    /// Extract one record per property group of a default text-bearing
    /// element (label, button and friends).
    fn extract_single_value(
        &mut self,
        control: Node<'_, '_>,
        source_file: &str,
    ) -> anyhow::Result<()> {
        for properties in control.children().filter(|node| node.is_element()) {
            let Some(identifier) = self.control_id(properties, source_file)? else {
                continue;
            };
            let text = normalize::fix_text(&normalize::substitute_formatting(property_text(
                properties, "text",
            )));
            let metadata = property_text(properties, "customData")
                .map(|raw| normalize::substitute_formatting(Some(raw)));
            let text = match &self.options.fake_translation {
                Some(tag) => format!("#{tag}# {text} #{tag}#"),
                None => text,
            };
            let record = TextRecord {
                identifier,
                text,
                source_file: source_file.to_string(),
                metadata,
                index: None,
            };
            if is_ignore_tag(&record.identifier) {
                self.ignored.push(record);
            } else {
                self.push_record(record)?;
            }
        }
        Ok(())
    }

    /// Extract one record per option of an element holding several
    /// texts behind one identifier (button bar, combo box).
    ///
    /// Each option gets a compound identifier (base, underscore, option
    /// text with spaces removed) and a zero-based index preserving the
    /// original option order. A group whose base identifier is an
    /// ignore sentinel is dropped entirely.
    fn extract_multi_value(
        &mut self,
        control: Node<'_, '_>,
        source_file: &str,
        separator: &str,
    ) -> anyhow::Result<()> {
        for properties in control.children().filter(|node| node.is_element()) {
            let Some(identifier) = self.control_id(properties, source_file)? else {
                continue;
            };
            if is_ignore_tag(&identifier) {
                debug!("Dropping ignored multi-value element {identifier} in {source_file}");
                continue;
            }
            let text = normalize::fix_text(&normalize::substitute_formatting(property_text(
                properties, "text",
            )));
            let metadata = property_text(properties, "customData")
                .map(|raw| normalize::substitute_formatting(Some(raw)));
            for (index, option) in text.split(separator).enumerate() {
                self.push_record(TextRecord {
                    identifier: format!("{identifier}_{}", option.replace(' ', "")),
                    text: option.to_string(),
                    source_file: source_file.to_string(),
                    metadata: metadata.clone(),
                    index: Some(index),
                })?;
            }
        }
        Ok(())
    }

    /// The identifier of a property group.
    ///
    /// A missing or empty `customID` is fatal; in permissive mode the
    /// group is dropped and `None` is returned instead.
    fn control_id(
        &self,
        properties: Node<'_, '_>,
        source_file: &str,
    ) -> anyhow::Result<Option<String>> {
        match property_text(properties, "customID") {
            Some(id) if !id.is_empty() => Ok(Some(id.to_string())),
            _ => {
                let text = normalize::fix_text(&normalize::substitute_formatting(property_text(
                    properties, "text",
                )));
                if self.options.force {
                    error!("Element without custom id in {source_file}, text: {text:?}");
                    Ok(None)
                } else {
                    bail!("element without custom id in {source_file} (text: {text:?})")
                }
            }
        }
    }

    /// An identifier on an element that carries no translatable text is
    /// a misplaced annotation: warned about in permissive mode, fatal
    /// otherwise.
    fn check_misplaced_identifier(
        &self,
        control: Node<'_, '_>,
        kind: &str,
        source_file: &str,
    ) -> anyhow::Result<()> {
        for properties in control.children().filter(|node| node.is_element()) {
            if let Some(id) = property_text(properties, "customID") {
                if !self.options.force {
                    bail!("identifier {id:?} on untranslatable element {kind} in {source_file}");
                }
                warn!("Identifier {id:?} on untranslatable element {kind} in {source_file}");
            }
        }
        Ok(())
    }

    /// Append a kept record after checking for identifier collisions.
    ///
    /// A record fully equal to an existing one is dropped silently. A
    /// record sharing an identifier but diverging in text, metadata or
    /// index is a consistency error; in permissive mode the divergent
    /// duplicate is appended and coexists.
    fn push_record(&mut self, record: TextRecord) -> anyhow::Result<()> {
        let existing = self
            .kept
            .iter()
            .find(|existing| existing.identifier == record.identifier);
        match existing {
            Some(existing) if *existing == record => return Ok(()),
            Some(existing) => {
                let message = format!(
                    "conflicting texts for identifier {:?}: {:?} in {} vs {:?} in {}",
                    record.identifier,
                    existing.text,
                    existing.source_file,
                    record.text,
                    record.source_file,
                );
                if !self.options.force {
                    bail!(message);
                }
                error!("{message}");
            }
            None => {}
        }
        self.kept.push(record);
        Ok(())
    }

    /// Check that every ignored text also appears in a kept record.
    ///
    /// Text marked as ignored is assumed to be a duplicate presentation
    /// of text that is translated elsewhere; an orphan indicates an
    /// author mistake. Purely diagnostic: each orphan is logged and the
    /// orphan count is returned, nothing aborts.
    pub fn check_ignored_texts(&self) -> usize {
        let mut orphans = 0;
        for ignored in &self.ignored {
            if !self.kept.iter().any(|record| record.text == ignored.text) {
                error!(
                    "Ignored text not translated elsewhere: {:?} in {}",
                    ignored.text, ignored.source_file
                );
                orphans += 1;
            }
        }
        orphans
    }
}

/// The text of the property child `tag` within a property group.
pub(crate) fn property_text<'a>(properties: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    properties
        .children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
        .and_then(|child| child.text())
}

/// Discover the mockup files to process for `input`.
///
/// An explicit file path is returned as-is. For a directory, the
/// mockup files directly inside it and inside its `assets`
/// subdirectory are returned, sorted per directory for a deterministic
/// processing order.
pub fn discover_mockup_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files = mockup_files_in(input)?;
    let assets = input.join("assets");
    if assets.is_dir() {
        files.extend(mockup_files_in(&assets)?);
    }
    Ok(files)
}

fn mockup_files_in(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    let mut files = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == MOCKUP_EXTENSION)
        })
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LABEL: &str = "com.balsamiq.mockups::Label";
    const BUTTON_BAR: &str = "com.balsamiq.mockups::ButtonBar";
    const COMBO_BOX: &str = "com.balsamiq.mockups::ComboBox";

    fn mockup(controls: &str) -> String {
        format!(
            "<mockup version=\"1.0\" skin=\"sketch\" measuredW=\"800\" measuredH=\"600\">\n\
             <controls>\n{controls}\n</controls>\n\
             </mockup>"
        )
    }

    fn control(kind: &str, properties: &str) -> String {
        format!(
            "<control controlTypeID=\"{kind}\" x=\"10\" y=\"10\" w=\"120\" h=\"24\" zOrder=\"0\">\n\
             <controlProperties>\n{properties}\n</controlProperties>\n\
             </control>"
        )
    }

    fn extract(xml: &str, options: ExtractOptions) -> anyhow::Result<Extractor> {
        let document = Document::parse(xml)?;
        let mut extractor = Extractor::new(options);
        extractor.extract_document(&document, "test.bmml")?;
        Ok(extractor)
    }

    fn record(identifier: &str, text: &str) -> TextRecord {
        TextRecord {
            identifier: identifier.to_string(),
            text: text.to_string(),
            source_file: "test.bmml".to_string(),
            metadata: None,
            index: None,
        }
    }

    #[test]
    fn extracts_label_text() {
        let doc = mockup(&control(
            LABEL,
            "<customID>greet</customID>\n<text>Hello%20World</text>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records().len(), 1);
        let record = &extractor.records()[0];
        assert_eq!(record.identifier, "greet");
        assert_eq!(record.text, "Hello World");
        assert_eq!(record.source_file, "test.bmml");
        assert_eq!(record.metadata, None);
        assert_eq!(record.index, None);
    }

    #[test]
    fn extracts_metadata_when_present() {
        let doc = mockup(&control(
            LABEL,
            "<customID>greet</customID>\n<text>Hi</text>\n<customData>shown on login</customData>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(
            extractor.records()[0].metadata.as_deref(),
            Some("shown on login")
        );
    }

    #[test]
    fn missing_text_property_yields_empty_text() {
        let doc = mockup(&control(LABEL, "<customID>greet</customID>"));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records()[0].text, "");
    }

    #[test]
    fn fake_translation_wraps_text() {
        let doc = mockup(&control(
            LABEL,
            "<customID>greet</customID>\n<text>Hello%20World</text>",
        ));
        let options = ExtractOptions {
            fake_translation: Some("XX".to_string()),
            ..Default::default()
        };
        let extractor = extract(&doc, options).unwrap();
        assert_eq!(extractor.records()[0].text, "#XX# Hello World #XX#");
    }

    #[test]
    fn ignore_sentinel_routes_record_to_ignored() {
        let doc = mockup(&control(
            LABEL,
            "<customID>ignore</customID>\n<text>Duplicate</text>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records().len(), 0);
        assert_eq!(extractor.ignored().len(), 1);
        assert_eq!(extractor.ignored()[0].text, "Duplicate");
    }

    #[test]
    fn missing_identifier_is_fatal() {
        let doc = mockup(&control(LABEL, "<text>No id here</text>"));
        assert!(extract(&doc, ExtractOptions::default()).is_err());
    }

    #[test]
    fn missing_identifier_is_dropped_in_permissive_mode() {
        let doc = mockup(&control(LABEL, "<text>No id here</text>"));
        let options = ExtractOptions {
            force: true,
            ..Default::default()
        };
        let extractor = extract(&doc, options).unwrap();
        assert_eq!(extractor.records().len(), 0);
    }

    #[test]
    fn equal_duplicates_are_deduplicated() {
        let label = control(LABEL, "<customID>greet</customID>\n<text>Hello</text>");
        let doc = mockup(&format!("{label}\n{label}"));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records().len(), 1);
    }

    #[test]
    fn conflicting_duplicate_is_fatal() {
        let doc = mockup(&format!(
            "{}\n{}",
            control(LABEL, "<customID>greet</customID>\n<text>Hello</text>"),
            control(LABEL, "<customID>greet</customID>\n<text>Goodbye</text>"),
        ));
        assert!(extract(&doc, ExtractOptions::default()).is_err());
    }

    #[test]
    fn conflicting_duplicate_coexists_in_permissive_mode() {
        let doc = mockup(&format!(
            "{}\n{}",
            control(LABEL, "<customID>greet</customID>\n<text>Hello</text>"),
            control(LABEL, "<customID>greet</customID>\n<text>Goodbye</text>"),
        ));
        let options = ExtractOptions {
            force: true,
            ..Default::default()
        };
        let extractor = extract(&doc, options).unwrap();
        assert_eq!(extractor.records().len(), 2);
    }

    #[test]
    fn button_bar_splits_into_indexed_records() {
        let doc = mockup(&control(
            BUTTON_BAR,
            "<customID>actions</customID>\n<text>A%2CB%2CC</text>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        let summary = extractor
            .records()
            .iter()
            .map(|record| (record.identifier.as_str(), record.text.as_str(), record.index))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("actions_A", "A", Some(0)),
                ("actions_B", "B", Some(1)),
                ("actions_C", "C", Some(2)),
            ]
        );
    }

    #[test]
    fn combo_box_splits_on_line_breaks() {
        let doc = mockup(&control(
            COMBO_BOX,
            "<customID>colors</customID>\n<text>Dark%20Red%0AGreen%0ABlue</text>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        let summary = extractor
            .records()
            .iter()
            .map(|record| (record.identifier.as_str(), record.text.as_str(), record.index))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("colors_DarkRed", "Dark Red", Some(0)),
                ("colors_Green", "Green", Some(1)),
                ("colors_Blue", "Blue", Some(2)),
            ]
        );
    }

    #[test]
    fn ignored_multi_value_group_is_dropped_entirely() {
        let doc = mockup(&control(
            BUTTON_BAR,
            "<customID>IGNORE</customID>\n<text>A%2CB</text>",
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records().len(), 0);
        assert_eq!(extractor.ignored().len(), 0);
    }

    #[test]
    fn misplaced_identifier_is_fatal() {
        let doc = mockup(&control(
            "com.balsamiq.mockups::Rectangle",
            "<customID>decor</customID>",
        ));
        assert!(extract(&doc, ExtractOptions::default()).is_err());
    }

    #[test]
    fn misplaced_identifier_is_a_warning_in_permissive_mode() {
        let doc = mockup(&control(
            "com.balsamiq.mockups::Rectangle",
            "<customID>decor</customID>",
        ));
        let options = ExtractOptions {
            force: true,
            ..Default::default()
        };
        let extractor = extract(&doc, options).unwrap();
        assert_eq!(extractor.records().len(), 0);
    }

    #[test]
    fn untranslatable_elements_without_identifier_are_skipped_silently() {
        let doc = mockup(&control("com.balsamiq.mockups::Rectangle", "<size>10</size>"));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.records().len(), 0);
    }

    #[test]
    fn ignored_text_with_kept_counterpart_passes_check() {
        let doc = mockup(&format!(
            "{}\n{}",
            control(LABEL, "<customID>greet</customID>\n<text>Hello</text>"),
            control(LABEL, "<customID>ignore</customID>\n<text>Hello</text>"),
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.check_ignored_texts(), 0);
    }

    #[test]
    fn orphaned_ignored_text_is_counted() {
        let doc = mockup(&format!(
            "{}\n{}",
            control(LABEL, "<customID>greet</customID>\n<text>Hello</text>"),
            control(LABEL, "<customID>ignore</customID>\n<text>Orphan</text>"),
        ));
        let extractor = extract(&doc, ExtractOptions::default()).unwrap();
        assert_eq!(extractor.check_ignored_texts(), 1);
    }

    #[test]
    fn same_record_from_two_files_is_deduplicated() {
        let doc = mockup(&control(
            LABEL,
            "<customID>greet</customID>\n<text>Hello</text>",
        ));
        let document = Document::parse(&doc).unwrap();
        let mut extractor = Extractor::new(ExtractOptions::default());
        extractor.extract_document(&document, "a.bmml").unwrap();
        extractor.extract_document(&document, "b.bmml").unwrap();
        assert_eq!(extractor.records().len(), 1);
    }

    #[test]
    fn uniqueness_holds_for_generated_record_pairs() {
        for seed in 0..25u32 {
            let text = format!("Text number {seed}");

            // Equal pairs are accepted and deduplicated.
            let mut extractor = Extractor::new(ExtractOptions::default());
            extractor.push_record(record("generated", &text)).unwrap();
            extractor.push_record(record("generated", &text)).unwrap();
            assert_eq!(extractor.records().len(), 1);

            // Divergent pairs are rejected outside permissive mode.
            let mut extractor = Extractor::new(ExtractOptions::default());
            extractor.push_record(record("generated", &text)).unwrap();
            let divergent = record("generated", &format!("{text} changed"));
            assert!(extractor.push_record(divergent).is_err());
        }
    }

    #[test]
    fn divergent_metadata_is_a_conflict() {
        let mut extractor = Extractor::new(ExtractOptions::default());
        extractor.push_record(record("greet", "Hello")).unwrap();
        let mut with_metadata = record("greet", "Hello");
        with_metadata.metadata = Some("annotated".to_string());
        assert!(extractor.push_record(with_metadata).is_err());
    }

    #[test]
    fn malformed_file_is_fatal_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.bmml");
        fs::write(&path, "<mockup><unclosed>").unwrap();

        let mut extractor = Extractor::new(ExtractOptions::default());
        assert!(extractor.extract_file(&path).is_err());

        let mut extractor = Extractor::new(ExtractOptions {
            force: true,
            ..Default::default()
        });
        extractor.extract_file(&path).unwrap();
        assert_eq!(extractor.records().len(), 0);
    }

    #[test]
    fn discovery_finds_mockups_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.bmml"), "<mockup/>").unwrap();
        fs::write(dir.path().join("a.bmml"), "<mockup/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets").join("c.bmml"), "<mockup/>").unwrap();

        let files = discover_mockup_files(dir.path()).unwrap();
        let names = files
            .iter()
            .map(|path| path.strip_prefix(dir.path()).unwrap().to_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.bmml", "b.bmml", "assets/c.bmml"]);
    }

    #[test]
    fn discovery_accepts_an_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.bmml");
        fs::write(&path, "<mockup/>").unwrap();
        assert_eq!(discover_mockup_files(&path).unwrap(), vec![path]);
    }
}
