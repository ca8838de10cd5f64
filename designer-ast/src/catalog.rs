//! Component definitions offered by the designer's palette.
//!
//! Each definition pairs display data (label, category) with the element
//! template that gets dropped onto the canvas. The template is the only
//! thing that reaches the tree; labels are for the palette.

use serde::{Deserialize, Serialize};

use crate::ast::{
    AttrValue, AttributeNode, Category, Dimension, ElementMeta, ElementNode, Layout, Node, Size,
    TextNode,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Lookup key, usually the tag.
    pub name: String,
    pub label: String,
    pub category: Category,
    pub template: ElementNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCategory {
    pub name: Category,
    pub label: String,
    pub components: Vec<ComponentDefinition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<ComponentCategory>,
}

impl ComponentDefinition {
    /// A fresh copy of the template tagged with `id`, ready to insert.
    pub fn instantiate(&self, id: impl Into<String>) -> ElementNode {
        let mut el = self.template.clone();
        el.id = Some(id.into());
        el
    }
}

impl Catalog {
    pub fn find(&self, name: &str) -> Option<&ComponentDefinition> {
        self.categories
            .iter()
            .flat_map(|c| c.components.iter())
            .find(|d| d.name == name)
    }

    pub fn category(&self, name: Category) -> Option<&ComponentCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.categories.iter().flat_map(|c| c.components.iter())
    }
}

fn attrs(pairs: &[(&str, AttrValue)]) -> Vec<AttributeNode> {
    pairs
        .iter()
        .map(|(name, value)| AttributeNode {
            name: name.to_string(),
            value: value.clone(),
        })
        .collect()
}

fn block_meta() -> ElementMeta {
    ElementMeta {
        size: Some(Size {
            width: None,
            height: None,
        }),
        layout: Some(Layout::Block),
        is_container: Some(false),
        ..ElementMeta::default()
    }
}

fn definition(
    name: &str,
    label: &str,
    category: Category,
    attributes: Vec<AttributeNode>,
    content: &str,
    meta: Option<ElementMeta>,
) -> ComponentDefinition {
    ComponentDefinition {
        name: name.to_string(),
        label: label.to_string(),
        category,
        template: ElementNode {
            tag: name.to_string(),
            attributes,
            children: vec![Node::Text(TextNode {
                content: content.to_string(),
            })],
            meta,
            ..ElementNode::default()
        },
    }
}

/// The stock palette: basic Element Plus controls, wrapped high-level
/// components, and an empty business group for project components.
pub fn builtin_catalog() -> Catalog {
    let button = definition(
        "el-button",
        "按钮",
        Category::Basic,
        attrs(&[
            ("type", "primary".into()),
            ("size", "default".into()),
            ("disabled", false.into()),
        ]),
        "按钮",
        Some(block_meta()),
    );
    let input = definition(
        "el-input",
        "输入框",
        Category::Basic,
        attrs(&[
            ("type", "text".into()),
            ("size", "default".into()),
            ("disabled", false.into()),
            ("clearable", false.into()),
            ("placeholder", "请输入".into()),
            ("model-value", "".into()),
        ]),
        "输入框",
        Some(block_meta()),
    );
    let mut card = definition(
        "el-card",
        "卡片",
        Category::High,
        attrs(&[("shadow", "hover".into())]),
        "卡片内容",
        None,
    );
    card.template.meta = Some(ElementMeta {
        size: Some(Size {
            width: Some(Dimension::Css("100%".to_string())),
            height: None,
        }),
        is_container: Some(true),
        ..ElementMeta::default()
    });

    Catalog {
        categories: vec![
            ComponentCategory {
                name: Category::Basic,
                label: "基础组件".to_string(),
                components: vec![button, input],
            },
            ComponentCategory {
                name: Category::High,
                label: "高阶组件".to_string(),
                components: vec![card],
            },
            ComponentCategory {
                name: Category::Business,
                label: "业务组件".to_string(),
                components: Vec::new(),
            },
        ],
    }
}
