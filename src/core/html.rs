// src/core/html.rs
//! Read-only navigation over a parsed document.
//!
//! The `scraper::Html` tree owns every node; everything here hands out borrowed
//! `NodeRef`s into it. Text rendering mirrors what a person sees in the page:
//! `rendered_text` joins text nodes with a separator, `stripped_text` trims each
//! piece and glues the non-empty ones together.

use ego_tree::NodeRef;
use scraper::{Html, Node};

pub type DomNode<'a> = NodeRef<'a, Node>;

/// All text nodes, in document order.
pub fn text_nodes(doc: &Html) -> impl Iterator<Item = DomNode<'_>> {
    doc.tree.root().descendants().filter(|n| n.value().is_text())
}

/// Own text of a text node; empty for anything else.
pub fn node_text<'a>(node: DomNode<'a>) -> &'a str {
    match node.value() {
        Node::Text(t) => &t.text,
        _ => "",
    }
}

/// Text of `node` and its descendants joined by `sep`, outer whitespace trimmed.
pub fn rendered_text(node: DomNode<'_>, sep: &str) -> String {
    let parts: Vec<&str> = node
        .descendants()
        .filter(|n| n.value().is_text())
        .map(node_text)
        .collect();
    parts.join(sep).trim().to_string()
}

/// Each descendant text piece trimmed, empties dropped, concatenated.
pub fn stripped_text(node: DomNode<'_>) -> String {
    node.descendants()
        .filter(|n| n.value().is_text())
        .map(|n| node_text(n).trim())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn parent_element(node: DomNode<'_>) -> Option<DomNode<'_>> {
    node.parent().filter(|p| p.value().is_element())
}

/// Next sibling that is an element (text/comment siblings are skipped).
pub fn next_sibling_element(node: DomNode<'_>) -> Option<DomNode<'_>> {
    node.next_siblings().find(|n| n.value().is_element())
}

/// First element after `node` in document order: its own first element
/// descendant, else the first element that follows it anywhere in the tree.
pub fn next_element(node: DomNode<'_>) -> Option<DomNode<'_>> {
    if let Some(el) = node.descendants().skip(1).find(|n| n.value().is_element()) {
        return Some(el);
    }
    let mut cur = Some(node);
    while let Some(n) = cur {
        for sib in n.next_siblings() {
            if let Some(el) = sib.descendants().find(|d| d.value().is_element()) {
                return Some(el);
            }
        }
        cur = n.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_name<'a>(node: DomNode<'a>) -> Option<&'a str> {
        node.value().as_element().map(|e| e.name())
    }

    fn first_text<'a>(doc: &'a Html, needle: &str) -> DomNode<'a> {
        text_nodes(doc).find(|n| node_text(*n).contains(needle)).unwrap()
    }

    #[test]
    fn rendered_vs_stripped() {
        let doc = Html::parse_document("<div>Classe: <span> IIA </span>\n</div>");
        let div = parent_element(first_text(&doc, "Classe")).unwrap();
        assert_eq!(tag_name(div), Some("div"));
        assert_eq!(rendered_text(div, " "), "Classe:   IIA");
        assert_eq!(stripped_text(div), "Classe:IIA");
    }

    #[test]
    fn sibling_skips_text() {
        let doc = Html::parse_document("<table><tr><td>Classe</td> <td>IIA</td></tr></table>");
        let td = parent_element(first_text(&doc, "Classe")).unwrap();
        let sib = next_sibling_element(td).unwrap();
        assert_eq!(stripped_text(sib), "IIA");
    }

    #[test]
    fn next_element_prefers_descendant_then_climbs() {
        let doc = Html::parse_document("<div><p>Classe <b>A</b></p></div><section>B</section>");
        let p = parent_element(first_text(&doc, "Classe")).unwrap();
        assert_eq!(tag_name(next_element(p).unwrap()), Some("b"));

        let b = parent_element(first_text(&doc, "A")).unwrap();
        assert_eq!(tag_name(next_element(b).unwrap()), Some("section"));
    }

    #[test]
    fn next_element_none_at_end() {
        let doc = Html::parse_document("<p>last</p>");
        let p = parent_element(first_text(&doc, "last")).unwrap();
        assert!(next_element(p).is_none());
    }
}
