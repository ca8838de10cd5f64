//! Reads markup text back into a tree.
//!
//! Accepts what the generator produces plus ordinary hand-written
//! templates: nested elements, `<tag ... />`, quoted or bare attributes
//! and text runs. Whitespace-only text is dropped and other text is
//! trimmed, so indentation added by the generator does not leak into
//! text content.

use pest::Parser;
use pest::iterators::Pair;
use thiserror::Error;

use crate::ast::{AttrValue, AttributeNode, ElementNode, Node, RootNode, TextNode};

#[derive(pest_derive::Parser)]
#[grammar = "markup.pest"]
struct MarkupParser;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("markup syntax error: {0}")]
    Syntax(String),

    #[error("closing tag `</{found}>` does not match `<{expected}>`")]
    MismatchedClose { expected: String, found: String },
}

#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn parse_markup(source: &str) -> Result<RootNode, MarkupError> {
    let mut pairs = MarkupParser::parse(Rule::document, source)
        .map_err(|e| MarkupError::Syntax(e.to_string()))?;
    let document = pairs
        .next()
        .ok_or_else(|| MarkupError::Syntax("empty document".to_string()))?;

    let mut children = Vec::new();
    for node in document.into_inner() {
        if let Some(n) = consume_node(node)? {
            children.push(n);
        }
    }
    tracing::debug!(top_level = children.len(), "read markup");
    Ok(RootNode { children })
}

fn consume_node(pair: Pair<Rule>) -> Result<Option<Node>, MarkupError> {
    match pair.as_rule() {
        Rule::element => Ok(Some(Node::Element(parse_element(pair)?))),
        Rule::text => {
            let content = pair.as_str().trim();
            if content.is_empty() {
                Ok(None)
            } else {
                Ok(Some(Node::Text(TextNode {
                    content: content.to_string(),
                })))
            }
        }
        // EOI
        _ => Ok(None),
    }
}

fn parse_element(pair: Pair<Rule>) -> Result<ElementNode, MarkupError> {
    let mut el = ElementNode::default();

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::self_closing_tag => {
                el.self_closing = true;
                read_tag(p, &mut el);
            }
            Rule::open_tag => read_tag(p, &mut el),
            Rule::close_tag => {
                let found = p
                    .into_inner()
                    .next()
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_default();
                if found != el.tag {
                    return Err(MarkupError::MismatchedClose {
                        expected: el.tag,
                        found,
                    });
                }
            }
            _ => {
                if let Some(child) = consume_node(p)? {
                    el.children.push(child);
                }
            }
        }
    }
    Ok(el)
}

fn read_tag(tag: Pair<Rule>, el: &mut ElementNode) {
    for part in tag.into_inner() {
        match part.as_rule() {
            Rule::tag_name => el.tag = part.as_str().to_string(),
            Rule::attribute => el.attributes.push(parse_attr(part)),
            _ => {}
        }
    }
}

fn parse_attr(attr: Pair<Rule>) -> AttributeNode {
    // attribute = attr_name ( "=" quoted )?
    let mut name = String::new();
    let mut value = AttrValue::Bool(true);

    for part in attr.into_inner() {
        match part.as_rule() {
            Rule::attr_name => name = part.as_str().to_string(),
            Rule::quoted => {
                let inner = part.into_inner().next().map(|p| p.as_str()).unwrap_or("");
                value = AttrValue::Str(unescape_attr_value(inner));
            }
            _ => {}
        }
    }
    AttributeNode { name, value }
}

/// Inverse of the generator's attribute escaping. `&amp;` goes last so
/// `&amp;lt;` reads back as `&lt;`.
fn unescape_attr_value(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
