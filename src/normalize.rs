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

//! Normalization of raw mockup text.
//!
//! Mockup files store text percent-escaped and with a small
//! markdown-like markup vocabulary. The functions here turn that into
//! clean display strings with HTML-ish tags: [`substitute_formatting`]
//! runs the default pipeline applied to every extracted value and
//! [`fix_text`] is the later fix-up pass applied to text (but not
//! metadata) values. The italic and unordered-list conversions are
//! invocable separately and are not part of the default pipeline.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("well-formed regex"))
}

fn bold_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("well-formed regex"))
}

fn italic_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_(.*?)_").expect("well-formed regex"))
}

fn list_item_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*%20[a-zA-Z0-9 ]*(?:%0A)?").expect("well-formed regex"))
}

fn br_space_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<br /> *").expect("well-formed regex"))
}

/// Run the default normalization pipeline over a raw mockup value.
///
/// Encoded newlines become `<br />` tags, whitespace runs collapse to
/// a single space, the `breakNewLine` marker becomes a `<br />` tag,
/// spaces adjacent to `<br />` and `<li>` tags are stripped and
/// `*bold*` markup becomes `<b>` tag pairs. An absent value yields an
/// empty string.
pub fn substitute_formatting(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    // Replacing %0A first keeps the line breaks from being decoded as
    // literal newlines further down the pipeline.
    let result = text.replace("%0A", "<br />");
    let result = collapse_whitespace(&result);
    let result = result.replace("breakNewLine", " <br />");
    let result = result.replace("<br /> ", "<br />");
    let result = result.replace(" <br />", "<br />");
    let result = result.replace(" <li>", "<li>");
    let result = result.replace("<li> ", "<li>");
    substitute_bold(&result)
}

/// Replace runs of whitespace with a single space and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    whitespace_run_pattern()
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Convert `*bold*` markup (non-greedy) into `<b>` tag pairs.
///
/// Nested or unbalanced asterisks are undefined and come out however
/// the non-greedy match pairs them up.
pub fn substitute_bold(text: &str) -> String {
    bold_pattern().replace_all(text, "<b>$1</b>").into_owned()
}

/// Convert `_italic_` markup into `<i>` tag pairs. Not part of the
/// default pipeline.
pub fn substitute_italic(text: &str) -> String {
    italic_pattern().replace_all(text, "<i>$1</i>").into_owned()
}

/// Whether the text starts with percent-escaped list-item markup
/// (`*%20item`).
pub fn contains_unordered_list(text: &str) -> bool {
    list_item_pattern().is_match(text)
}

/// Convert a run of `*%20`-prefixed list items into an HTML unordered
/// list. Not part of the default pipeline.
///
/// Splitting happens on the item marker, so any text preceding the
/// first marker is dropped. Encoded newlines survive verbatim inside
/// the items.
pub fn substitute_unordered_list(text: &str) -> String {
    if !contains_unordered_list(text) {
        return text.to_string();
    }
    let mut result = String::from("<ul>");
    for item in text.split("*%20").filter(|item| !item.is_empty()) {
        result.push_str("<li>");
        result.push_str(item);
        result.push_str("</li>");
    }
    result.push_str("</ul>");
    result
}

/// The later fix-up pass: decode percent-escaped spaces, trim, and
/// strip spaces following a `<br />` tag.
pub fn fix_text(text: &str) -> String {
    let result = text.replace("%20", " ");
    let result = result.trim();
    br_space_pattern().replace_all(result, "<br />").into_owned()
}
