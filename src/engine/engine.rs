// src/engine/engine.rs
use std::{
    cell::OnceCell,
    collections::HashMap,
    sync::{LazyLock, Mutex, PoisonError},
};

use regex::{Regex, RegexBuilder};
use scraper::Html;

use crate::core::html::{self, DomNode};
use crate::core::sanitize::{first_line, strip_leading_punct};
use crate::engine::types::*;

/// One fetched page. The DOM is parsed on first use and at most once,
/// so a raw-text hit never pays for parsing.
pub struct Document<'a> {
    raw: &'a str,
    dom: OnceCell<Html>,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw, dom: OnceCell::new() }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn dom(&self) -> &Html {
        self.dom.get_or_init(|| Html::parse_document(self.raw))
    }
}

pub type Strategy = fn(&Document<'_>, &FieldSpec) -> Option<String>;

/// Tried top to bottom; first `Some` wins.
pub const CHAIN: [(Stage, Strategy); 5] = [
    (Stage::RawPattern, raw_pattern),
    (Stage::LabelNode, label_node),
    (Stage::ParentLine, parent_line),
    (Stage::NextSibling, next_sibling),
    (Stage::NextElement, next_element),
];

/// Run the chain for one field. Always returns; a miss is the sentinel.
pub fn extract(doc: &Document<'_>, spec: &FieldSpec) -> Extracted {
    for (stage, run) in CHAIN {
        if let Some(value) = run(doc, spec) {
            logd!("Extract: {} = {:?} via {}", spec.name, value, stage);
            return Extracted::found(value, stage);
        }
    }
    logd!("Extract: {} not found", spec.name);
    Extracted::not_found()
}

/// Convenience for a single field straight from markup.
pub fn extract_str(markup: &str, spec: &FieldSpec) -> Extracted {
    extract(&Document::new(markup), spec)
}

/// Compiled spec patterns, keyed by source text. A bad pattern is cached as `None`.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Case-insensitive regex for `pattern`, compiled on first use.
fn ci(pattern: &'static str) -> Option<Regex> {
    let mut cache = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(pattern)
        .or_insert_with(|| match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                logd!("Extract: bad pattern {:?}: {}", pattern, e);
                None
            }
        })
        .clone()
}

/// Group 1 when the pattern has one, otherwise the whole match.
fn capture(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    first_line(m.as_str())
}

/// First text node carrying the label, in document order.
fn label_node_of<'d>(doc: &'d Document<'_>, spec: &FieldSpec) -> Option<DomNode<'d>> {
    let label = ci(spec.label_pat)?;
    html::text_nodes(doc.dom()).find(|n| label.is_match(html::node_text(*n)))
}

/// Element holding the label text; the anchor for all neighbour stages.
fn label_parent<'d>(doc: &'d Document<'_>, spec: &FieldSpec) -> Option<DomNode<'d>> {
    if !spec.neighbors {
        return None;
    }
    html::parent_element(label_node_of(doc, spec)?)
}

/* ---------------- Strategies ---------------- */

fn raw_pattern(doc: &Document<'_>, spec: &FieldSpec) -> Option<String> {
    let re = ci(spec.raw?)?;
    let caps = re.captures(doc.raw())?;
    first_line(caps.get(1)?.as_str())
}

fn label_node(doc: &Document<'_>, spec: &FieldSpec) -> Option<String> {
    let value = ci(spec.value?)?;
    let label = ci(spec.label_pat)?;
    html::text_nodes(doc.dom())
        .map(html::node_text)
        .filter(|t| label.is_match(t))
        .find_map(|t| capture(&value, t.trim()))
}

fn parent_line(doc: &Document<'_>, spec: &FieldSpec) -> Option<String> {
    let parent = label_parent(doc, spec)?;
    let re = ci(spec.line?)?;
    let text = html::rendered_text(parent, " ");
    let caps = re.captures(&text)?;
    // "Classe:" alone leaves only punctuation behind; that is not a value.
    first_line(strip_leading_punct(caps.get(1)?.as_str()))
}

fn next_sibling(doc: &Document<'_>, spec: &FieldSpec) -> Option<String> {
    let parent = label_parent(doc, spec)?;
    let sib = html::next_sibling_element(parent)?;
    first_line(&html::stripped_text(sib))
}

fn next_element(doc: &Document<'_>, spec: &FieldSpec) -> Option<String> {
    let parent = label_parent(doc, spec)?;
    let next = html::next_element(parent).filter(|n| n.id() != parent.id())?;
    first_line(&html::stripped_text(next))
}
