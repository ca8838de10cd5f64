use serde::{Deserialize, Serialize};

/// A node in the designer's markup tree.
///
/// The JSON form is internally tagged with `"type"`, matching what the
/// designer UI stores: `{"type": "Element", "tag": "el-button", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Root(RootNode),
    Element(ElementNode),
    Text(TextNode),
    Attribute(AttributeNode),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    /// Selection handle used by the canvas; never emitted as markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttributeNode>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, rename = "isSelfClosing")]
    pub self_closing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ElementMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeNode {
    pub name: String,
    pub value: AttrValue,
}

/// `Bool(true)` renders as a bare attribute name, `Bool(false)` is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Str(String),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Canvas bookkeeping attached to elements placed in the designer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_props: Option<FlexProps>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

/// Either a pixel count or a CSS length such as `"100%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Flex,
    Block,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    High,
    Business,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlexProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

impl Node {
    /// Child list for the variants that have one (`Root`, `Element`).
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(el) => Some(&el.children),
            Node::Text(_) | Node::Attribute(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Element(el) => Some(&mut el.children),
            Node::Text(_) | Node::Attribute(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Replaces the value in place when `name` exists, otherwise appends.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(AttributeNode { name, value }),
        }
    }
}

impl From<RootNode> for Node {
    fn from(root: RootNode) -> Self {
        Node::Root(root)
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

impl From<TextNode> for Node {
    fn from(t: TextNode) -> Self {
        Node::Text(t)
    }
}

impl From<AttributeNode> for Node {
    fn from(a: AttributeNode) -> Self {
        Node::Attribute(a)
    }
}

// Builders for hand-assembled trees.

pub fn root(children: Vec<Node>) -> Node {
    Node::Root(RootNode { children })
}

pub fn element(tag: impl Into<String>, attributes: Vec<AttributeNode>, children: Vec<Node>) -> Node {
    Node::Element(ElementNode {
        tag: tag.into(),
        attributes,
        children,
        ..ElementNode::default()
    })
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(TextNode {
        content: content.into(),
    })
}

pub fn attr(name: impl Into<String>, value: impl Into<AttrValue>) -> AttributeNode {
    AttributeNode {
        name: name.into(),
        value: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tree() {
        let node = element(
            "div",
            vec![attr("class", "app")],
            vec![text("hello"), element("span", vec![], vec![text("world")])],
        );
        let el = node.as_element().unwrap();
        assert_eq!(el.tag, "div");
        assert_eq!(el.attribute("class"), Some(&AttrValue::Str("app".into())));
        assert_eq!(node.children().unwrap().len(), 2);
        assert!(text("x").children().is_none());
    }

    #[test]
    fn set_attribute_keeps_position() {
        let mut el = ElementNode::new("el-input");
        el.set_attribute("type", "text");
        el.set_attribute("disabled", false);
        el.set_attribute("type", "password");
        assert_eq!(el.attributes.len(), 2);
        assert_eq!(el.attributes[0].name, "type");
        assert_eq!(el.attributes[0].value, AttrValue::Str("password".into()));
    }

    #[test]
    fn json_shape_is_tagged() {
        let json = r#"{
            "type": "Element",
            "tag": "el-card",
            "attributes": [{ "name": "shadow", "value": "hover" }],
            "children": [{ "type": "Text", "content": "卡片内容" }],
            "meta": { "layout": "block", "isContainer": false }
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let el = node.as_element().unwrap();
        assert_eq!(el.tag, "el-card");
        assert!(!el.self_closing);
        assert_eq!(el.meta.as_ref().unwrap().layout, Some(Layout::Block));
        assert_eq!(el.children[0].as_text().unwrap().content, "卡片内容");

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["type"], "Element");
        assert_eq!(back["isSelfClosing"], false);
    }
}
