use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::{AttrValue, AttributeNode, ElementNode, Node, RootNode, TextNode};

/// Declarative component description authored by the designer UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    pub tag: String,
    #[serde(default)]
    pub props: IndexMap<String, PropValue>,
    #[serde(default)]
    pub children: Vec<ConfigChild>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_self_closing: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigChild {
    Text(String),
    Component(ComponentConfig),
}

/// Scalar prop values accepted from the UI. Arrays and objects fail to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    Number(serde_json::Number),
    Null,
}

/// Either one config or a list of them, as handed over by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigInput {
    Many(Vec<ComponentConfig>),
    One(ComponentConfig),
}

impl ComponentConfig {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<ConfigChild>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn self_closing(mut self, yes: bool) -> Self {
        self.is_self_closing = Some(yes);
        self
    }
}

impl From<&str> for ConfigChild {
    fn from(s: &str) -> Self {
        ConfigChild::Text(s.to_string())
    }
}

impl From<String> for ConfigChild {
    fn from(s: String) -> Self {
        ConfigChild::Text(s)
    }
}

impl From<ComponentConfig> for ConfigChild {
    fn from(c: ComponentConfig) -> Self {
        ConfigChild::Component(c)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n.into())
    }
}

impl From<&PropValue> for AttrValue {
    /// Numbers keep their JSON spelling; `null` counts as an absent attribute.
    fn from(v: &PropValue) -> Self {
        match v {
            PropValue::Bool(b) => AttrValue::Bool(*b),
            PropValue::Str(s) => AttrValue::Str(s.clone()),
            PropValue::Number(n) => AttrValue::Str(n.to_string()),
            PropValue::Null => AttrValue::Bool(false),
        }
    }
}

/// Parse one config into a root holding a single element.
#[tracing::instrument(skip_all, fields(tag = %config.tag))]
pub fn parse(config: &ComponentConfig) -> RootNode {
    tracing::debug!("parsing single component config");
    RootNode {
        children: vec![Node::Element(parse_element(config))],
    }
}

/// Parse a list of configs; each becomes a top-level child of the root.
#[tracing::instrument(skip_all, fields(count = configs.len()))]
pub fn parse_all(configs: &[ComponentConfig]) -> RootNode {
    tracing::debug!("parsing component config list");
    RootNode {
        children: configs
            .iter()
            .map(|c| Node::Element(parse_element(c)))
            .collect(),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid component config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize a `ConfigInput` from JSON and parse it.
pub fn parse_json(source: &str) -> Result<RootNode, ConfigError> {
    let input: ConfigInput = serde_json::from_str(source)?;
    Ok(parse_input(&input))
}

pub fn parse_input(input: &ConfigInput) -> RootNode {
    match input {
        ConfigInput::One(config) => parse(config),
        ConfigInput::Many(configs) => parse_all(configs),
    }
}

fn parse_element(config: &ComponentConfig) -> ElementNode {
    tracing::trace!(tag = %config.tag, props = config.props.len(), "element");
    ElementNode {
        id: None,
        tag: config.tag.clone(),
        attributes: parse_attributes(&config.props),
        children: parse_children(&config.children),
        self_closing: config.is_self_closing.unwrap_or(false),
        meta: None,
    }
}

fn parse_attributes(props: &IndexMap<String, PropValue>) -> Vec<AttributeNode> {
    props
        .iter()
        .map(|(name, value)| AttributeNode {
            name: name.clone(),
            value: value.into(),
        })
        .collect()
}

fn parse_children(children: &[ConfigChild]) -> Vec<Node> {
    children
        .iter()
        .map(|child| match child {
            ConfigChild::Text(content) => Node::Text(TextNode {
                content: content.clone(),
            }),
            ConfigChild::Component(config) => Node::Element(parse_element(config)),
        })
        .collect()
}
