use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::{AttrValue, AttributeNode, ElementNode, Node, RootNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Repeated once per nesting level. Empty means the default.
    pub indent: String,
    /// Multi-line output when true, a single compact line otherwise.
    pub format: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            format: true,
        }
    }
}

impl GeneratorOptions {
    pub fn compact() -> Self {
        Self {
            format: false,
            ..Self::default()
        }
    }
}

/// Serializes a tree back into markup.
///
/// Holds only options; nesting depth travels as an argument, so one
/// generator can be shared between threads and reused across trees.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    /// An empty `indent` falls back to the default two spaces.
    pub fn new(mut options: GeneratorOptions) -> Self {
        if options.indent.is_empty() {
            options.indent = GeneratorOptions::default().indent;
        }
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    #[tracing::instrument(skip_all, fields(format = self.options.format))]
    pub fn generate(&self, node: &Node) -> String {
        let out = self.emit_node(node, 0);
        tracing::debug!(bytes = out.len(), "generated markup");
        out
    }

    fn emit_node(&self, node: &Node, depth: usize) -> String {
        match node {
            Node::Root(root) => self.emit_root(root, depth),
            Node::Element(el) => self.emit_element(el, depth),
            Node::Text(t) => format!("{}{}", self.indent(depth), t.content),
            Node::Attribute(a) => emit_attribute(a),
        }
    }

    fn emit_root(&self, root: &RootNode, depth: usize) -> String {
        let parts: Vec<String> = root
            .children
            .iter()
            .map(|c| self.emit_node(c, depth))
            .collect();
        parts.join(self.separator())
    }

    fn emit_element(&self, el: &ElementNode, depth: usize) -> String {
        let indent = self.indent(depth);
        let tag = &el.tag;
        let attrs = emit_attributes(&el.attributes);

        if el.self_closing || el.children.is_empty() {
            return format!("{indent}<{tag}{attrs} />");
        }

        // A lone text child stays on the tag's line.
        if let [Node::Text(t)] = el.children.as_slice() {
            return format!("{indent}<{tag}{attrs}>{}</{tag}>", t.content);
        }

        let kids: Vec<String> = el
            .children
            .iter()
            .map(|c| self.emit_node(c, depth + 1))
            .collect();
        let kids = kids.join(self.separator());

        if self.options.format {
            format!("{indent}<{tag}{attrs}>\n{kids}\n{indent}</{tag}>")
        } else {
            format!("<{tag}{attrs}>{kids}</{tag}>")
        }
    }

    fn indent(&self, depth: usize) -> String {
        if self.options.format {
            self.options.indent.repeat(depth)
        } else {
            String::new()
        }
    }

    fn separator(&self) -> &'static str {
        if self.options.format { "\n" } else { "" }
    }
}

/// Generate markup for `node` with the given options.
pub fn generate(node: &Node, options: &GeneratorOptions) -> String {
    Generator::new(options.clone()).generate(node)
}

/// Attribute list with a leading space, or empty when nothing renders.
fn emit_attributes(attrs: &[AttributeNode]) -> String {
    let parts: Vec<String> = attrs
        .iter()
        .map(emit_attribute)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

fn emit_attribute(a: &AttributeNode) -> String {
    match &a.value {
        AttrValue::Bool(true) => a.name.clone(),
        AttrValue::Bool(false) => String::new(),
        AttrValue::Str(v) => format!(r#"{}="{}""#, a.name, escape_attr_value(v)),
    }
}

/// Escapes `& " < >` for use inside a double-quoted attribute value.
pub fn escape_attr_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Generator::default().generate(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{attr, element, text};

    #[test]
    fn emit_attribute_varieties() {
        assert_eq!(emit_attribute(&attr("clearable", true)), "clearable");
        assert_eq!(emit_attribute(&attr("disabled", false)), "");
        assert_eq!(emit_attribute(&attr("type", "primary")), r#"type="primary""#);
    }

    #[test]
    fn false_attributes_leave_no_gap() {
        let attrs = vec![attr("a", "1"), attr("b", false), attr("c", true)];
        assert_eq!(emit_attributes(&attrs), r#" a="1" c"#);
        assert_eq!(emit_attributes(&[attr("b", false)]), "");
    }

    #[test]
    fn escape_does_not_double_escape() {
        assert_eq!(escape_attr_value(r#"a&b"c<d>e"#), "a&amp;b&quot;c&lt;d&gt;e");
        assert_eq!(escape_attr_value("&amp;"), "&amp;amp;");
    }

    #[test]
    fn empty_indent_uses_default() {
        let generator = Generator::new(GeneratorOptions {
            indent: String::new(),
            format: true,
        });
        assert_eq!(generator.options().indent, "  ");
        let node = element("div", vec![], vec![element("span", vec![], vec![])]);
        assert_eq!(generator.generate(&node), "<div>\n  <span />\n</div>");
    }

    #[test]
    fn display_uses_default_options() {
        let node = element("div", vec![], vec![element("span", vec![], vec![text("x")])]);
        assert_eq!(node.to_string(), "<div>\n  <span>x</span>\n</div>");
    }
}
